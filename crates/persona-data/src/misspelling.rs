//! Human-like typing errors for generated fields.
//!
//! The engine applies a random sequence of deletions, transpositions,
//! duplications, and keyboard-adjacent substitutions to each field. The
//! number of operations per field follows the configured
//! [`ErrorIntensity`]. All randomness comes from the caller's RNG and the
//! engine itself is stateless, so the same RNG state always yields the same
//! corruption.

use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};

use crate::error::LocaleError;
use crate::intensity::ErrorIntensity;
use crate::locale::LocaleProfile;
use crate::record::PersonFields;

/// A single typing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypingError {
    /// One character is dropped.
    Deletion,
    /// Two neighbouring characters swap places.
    Transposition,
    /// One character is typed twice.
    Duplication,
    /// One character is replaced by a neighbouring key.
    Substitution,
}

impl TypingError {
    /// Every error type, in selection order.
    pub const ALL: [Self; 4] = [
        Self::Deletion,
        Self::Transposition,
        Self::Duplication,
        Self::Substitution,
    ];

    /// Number of positions this error can target in a string of `len`
    /// characters. Zero means the error is unavailable.
    #[must_use]
    pub const fn positions(self, len: usize) -> usize {
        match self {
            Self::Transposition => len.saturating_sub(1),
            Self::Deletion | Self::Duplication | Self::Substitution => len,
        }
    }
}

/// Result of corrupting one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCorruption {
    /// The corrupted text.
    pub text: String,
    /// Number of operations actually applied. Lower than the drawn count
    /// when the field ran out of characters.
    pub applied: u32,
}

/// Applies locale-aware typing errors to record fields.
///
/// # Example
///
/// ```
/// use persona_data::{ErrorIntensity, MisspellingEngine, PersonFields, Region};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let engine = MisspellingEngine::new(Region::Usa.profile());
/// let fields = PersonFields {
///     name: "Ada Lovelace".to_owned(),
///     address: "12 Marylebone Rd".to_owned(),
///     phone: "555-0100".to_owned(),
/// };
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let untouched = engine.generate(&mut rng, ErrorIntensity::ZERO, &fields);
/// assert_eq!(untouched, fields);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MisspellingEngine {
    profile: &'static LocaleProfile,
}

impl MisspellingEngine {
    /// Creates an engine bound to a locale profile.
    #[must_use]
    pub const fn new(profile: &'static LocaleProfile) -> Self {
        Self { profile }
    }

    /// Creates an engine for a region given by name.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnsupportedRegion`] when the name has no locale
    /// module.
    pub fn for_region_name(name: &str) -> Result<Self, LocaleError> {
        LocaleProfile::lookup(name).map(Self::new)
    }

    /// Returns the locale profile used for substitutions.
    #[must_use]
    pub const fn profile(&self) -> &'static LocaleProfile {
        self.profile
    }

    /// Corrupts the name, address, and phone, in that order.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        intensity: ErrorIntensity,
        fields: &PersonFields,
    ) -> PersonFields {
        let name = self.corrupt_field(rng, intensity, &fields.name).text;
        let address = self.corrupt_field(rng, intensity, &fields.address).text;
        let phone = self.corrupt_field(rng, intensity, &fields.phone).text;
        PersonFields {
            name,
            address,
            phone,
        }
    }

    /// Corrupts one string and reports how many operations were applied.
    ///
    /// Each step picks uniformly among the error types that fit the current
    /// length, then uniformly among that type's positions. Once the string
    /// is empty the remaining steps are skipped.
    pub fn corrupt_field<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        intensity: ErrorIntensity,
        text: &str,
    ) -> FieldCorruption {
        let count = intensity.sample_count(rng);
        let mut chars: Vec<char> = text.chars().collect();
        let mut applied = 0;

        for _ in 0..count {
            let Some(kind) = choose_error(rng, chars.len()) else {
                break;
            };
            self.apply(rng, kind, &mut chars);
            applied += 1;
        }

        FieldCorruption {
            text: chars.into_iter().collect(),
            applied,
        }
    }

    fn apply<R: Rng + ?Sized>(&self, rng: &mut R, kind: TypingError, chars: &mut Vec<char>) {
        let slots = kind.positions(chars.len());
        if slots == 0 {
            return;
        }
        let position = rng.random_range(0..slots);

        match kind {
            TypingError::Deletion => {
                chars.remove(position);
            }
            TypingError::Transposition => chars.swap(position, position + 1),
            TypingError::Duplication => {
                if let Some(&typed) = chars.get(position) {
                    chars.insert(position + 1, typed);
                }
            }
            TypingError::Substitution => {
                if let Some(slot) = chars.get_mut(position) {
                    *slot = self.substitute(rng, *slot);
                }
            }
        }
    }

    /// Picks a neighbouring key, or any other letter of the alphabet when
    /// the character is not on the keyboard. Upper case is preserved.
    fn substitute<R: Rng + ?Sized>(&self, rng: &mut R, original: char) -> char {
        let key = original.to_lowercase().next().unwrap_or(original);
        let pool = self
            .profile
            .neighbours(original)
            .unwrap_or_else(|| self.profile.alphabet());
        let replacement = pool
            .iter()
            .copied()
            .filter(|&candidate| candidate != key)
            .choose(rng)
            .unwrap_or(original);
        if original.is_uppercase() {
            replacement.to_uppercase().next().unwrap_or(replacement)
        } else {
            replacement
        }
    }
}

fn choose_error<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<TypingError> {
    let available: Vec<TypingError> = TypingError::ALL
        .into_iter()
        .filter(|kind| kind.positions(len) > 0)
        .collect();
    available.choose(rng).copied()
}
