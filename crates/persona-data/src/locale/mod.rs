//! Locale modules: supported regions and their keyboard profiles.
//!
//! Each region owns a read-only [`LocaleProfile`] describing its keyboard
//! adjacency and alphabet. Profiles are built once, on first use, and shared
//! for the lifetime of the process.

mod keyboard;
pub(crate) mod russia;
pub(crate) mod ukraine;
pub(crate) mod usa;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

static USA_PROFILE: LazyLock<LocaleProfile> =
    LazyLock::new(|| LocaleProfile::build(Region::Usa, usa::KEYBOARD_ROWS, usa::ALPHABET));

static RUSSIA_PROFILE: LazyLock<LocaleProfile> = LazyLock::new(|| {
    LocaleProfile::build(Region::Russia, russia::KEYBOARD_ROWS, russia::ALPHABET)
});

static UKRAINE_PROFILE: LazyLock<LocaleProfile> = LazyLock::new(|| {
    LocaleProfile::build(Region::Ukraine, ukraine::KEYBOARD_ROWS, ukraine::ALPHABET)
});

/// A region with a locale module.
///
/// # Example
///
/// ```
/// use persona_data::Region;
///
/// let region: Region = "russia".parse().expect("known region");
/// assert_eq!(region, Region::Russia);
/// assert_eq!(region.to_string(), "Russia");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United States, English data on a QWERTY keyboard.
    #[default]
    #[serde(rename = "USA")]
    Usa,
    /// Russia, Russian data on a ЙЦУКЕН keyboard.
    Russia,
    /// Ukraine, Ukrainian data on a ЙЦУКЕН keyboard.
    Ukraine,
}

impl Region {
    /// Every supported region, in display order.
    pub const ALL: [Self; 3] = [Self::Usa, Self::Russia, Self::Ukraine];

    /// Returns the display name used in forms and exports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Russia => "Russia",
            Self::Ukraine => "Ukraine",
        }
    }

    /// Returns the static locale profile for this region.
    #[must_use]
    pub fn profile(self) -> &'static LocaleProfile {
        match self {
            Self::Usa => LazyLock::force(&USA_PROFILE),
            Self::Russia => LazyLock::force(&RUSSIA_PROFILE),
            Self::Ukraine => LazyLock::force(&UKRAINE_PROFILE),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = LocaleError;

    /// Accepts display names and language tags, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "usa" | "us" | "en" | "en_us" => Ok(Self::Usa),
            "russia" | "ru" | "ru_ru" => Ok(Self::Russia),
            "ukraine" | "ua" | "uk" | "uk_ua" => Ok(Self::Ukraine),
            _ => Err(LocaleError::UnsupportedRegion {
                name: value.to_owned(),
            }),
        }
    }
}

/// Keyboard and character-set data for one region.
///
/// Profiles are immutable; obtain one through [`Region::profile`] or
/// [`LocaleProfile::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleProfile {
    region: Region,
    adjacency: HashMap<char, Box<[char]>>,
    alphabet: Box<[char]>,
}

impl LocaleProfile {
    /// Resolves a region name to its profile.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnsupportedRegion`] for names without a locale
    /// module.
    ///
    /// # Example
    ///
    /// ```
    /// use persona_data::{LocaleProfile, Region};
    ///
    /// let profile = LocaleProfile::lookup("Ukraine").expect("known region");
    /// assert_eq!(profile.region(), Region::Ukraine);
    /// assert!(LocaleProfile::lookup("Atlantis").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<&'static Self, LocaleError> {
        name.parse::<Region>().map(Region::profile)
    }

    fn build(region: Region, rows: &[&str], alphabet: &str) -> Self {
        Self {
            region,
            adjacency: keyboard::adjacency_from_rows(rows),
            alphabet: alphabet.chars().collect(),
        }
    }

    /// Returns the region this profile belongs to.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the keys physically adjacent to `key`.
    ///
    /// Lookup ignores case. Characters that are not on the keyboard, such as
    /// spaces and punctuation, have no neighbours.
    #[must_use]
    pub fn neighbours(&self, key: char) -> Option<&[char]> {
        let lower = key.to_lowercase().next().unwrap_or(key);
        self.adjacency
            .get(&lower)
            .map(|keys| &**keys)
            .filter(|keys| !keys.is_empty())
    }

    /// Returns the lower-case alphabet used for fallback substitutions.
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

/// Static record tables for regions without a `fake` data set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionalTables {
    pub(crate) male_surnames: &'static [&'static str],
    pub(crate) female_surnames: &'static [&'static str],
    pub(crate) male_first_names: &'static [&'static str],
    pub(crate) female_first_names: &'static [&'static str],
    pub(crate) male_patronymics: &'static [&'static str],
    pub(crate) female_patronymics: &'static [&'static str],
    pub(crate) cities: &'static [&'static str],
    pub(crate) streets: &'static [&'static str],
    pub(crate) city_prefix: &'static str,
    pub(crate) street_prefix: &'static str,
    pub(crate) house_prefix: &'static str,
    pub(crate) flat_prefix: &'static str,
    /// Digit mask; each `#` becomes a random digit.
    pub(crate) postcode_mask: &'static str,
    /// Digit mask; each `#` becomes a random digit.
    pub(crate) phone_mask: &'static str,
}
