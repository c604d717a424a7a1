//! Generator defaults loaded via OrthoConfig.
//!
//! Values come from `PERSONA_*` environment variables (and any configuration
//! file OrthoConfig discovers). Every value is free-form text: seeds and
//! error intensities go through the same lenient normalisation as form input,
//! so a malformed value degrades to 0 instead of failing the load.

use std::ffi::OsString;
use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};

use crate::batch::GenerationParams;
use crate::error::{ExportError, LocaleError, SettingsError};
use crate::export::ExportFormat;
use crate::intensity::ErrorIntensity;
use crate::locale::Region;
use crate::seed::GenerationSeed;
use crate::validation::{normalize_error_intensity_input, normalize_seed_input};

/// Program name handed to OrthoConfig in place of real CLI arguments.
const PROGRAM_NAME: &str = "persona-gen";

/// Export format used when nothing else is configured.
const DEFAULT_FORMAT: &str = "csv";

/// Default generation parameters and export format.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PERSONA")]
pub struct GeneratorSettings {
    /// Region name, e.g. `USA`, `Russia` or `Ukraine`.
    pub region: Option<String>,
    /// Seed as typed; normalised leniently.
    #[serde(default, deserialize_with = "lenient_text")]
    pub seed: Option<String>,
    /// Expected errors per field as typed; normalised leniently.
    #[serde(default, deserialize_with = "lenient_text")]
    pub error_intensity: Option<String>,
    /// Export format name, `csv` or `jsonl`.
    #[ortho_config(default = String::from(DEFAULT_FORMAT))]
    pub format: Option<String>,
}

impl GeneratorSettings {
    /// Loads settings from the environment without reading process
    /// arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a configuration source cannot be
    /// read or merged.
    pub fn from_environment() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Returns the configured region, defaulting to USA.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnsupportedRegion`] for an unknown name.
    pub fn region(&self) -> Result<Region, LocaleError> {
        self.region
            .as_deref()
            .map_or(Ok(Region::default()), str::parse)
    }

    /// Returns the normalised seed, defaulting to 0.
    #[must_use]
    pub fn seed(&self) -> GenerationSeed {
        self.seed
            .as_deref()
            .map(normalize_seed_input)
            .unwrap_or_default()
    }

    /// Returns the normalised error intensity, defaulting to 0.
    #[must_use]
    pub fn error_intensity(&self) -> ErrorIntensity {
        self.error_intensity
            .as_deref()
            .map_or(ErrorIntensity::ZERO, normalize_error_intensity_input)
    }

    /// Returns the configured export format, defaulting to CSV.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`] for an unknown name.
    pub fn format(&self) -> Result<ExportFormat, ExportError> {
        self.format
            .as_deref()
            .map_or(Ok(ExportFormat::default()), str::parse)
    }

    /// Resolves the configured generation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] when the region is unknown.
    pub fn params(&self) -> Result<GenerationParams, LocaleError> {
        Ok(GenerationParams {
            region: self.region()?,
            seed: self.seed(),
            error_intensity: self.error_intensity(),
        })
    }
}

/// Accepts strings, numbers and booleans, keeping their textual form.
///
/// Environment providers type values such as `42` or `2.5` as numbers; the
/// lenient normalisers expect the text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientText;

    impl<'de> Visitor<'de> for LenientText {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a string or number")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            deserializer: D2,
        ) -> Result<Self::Value, D2::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_owned()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }
    }

    deserializer.deserialize_any(LenientText)
}
