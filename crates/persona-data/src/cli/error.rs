//! Error types for the `persona-gen` CLI.

use thiserror::Error;

use crate::error::{ExportError, FeedError, LocaleError, SettingsError};

/// Errors surfaced by the CLI parsing and generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// `--seed` and `--random-seed` were both supplied.
    #[error("--seed and --random-seed cannot be combined")]
    ConflictingSeedFlags,
    /// Defaults could not be loaded from the environment.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        #[source]
        source: SettingsError,
    },
    /// The region is not supported.
    #[error("{source}")]
    Locale {
        /// Underlying locale error.
        #[from]
        #[source]
        source: LocaleError,
    },
    /// A batch could not be generated.
    #[error("generation error: {source}")]
    Feed {
        /// Underlying feed error.
        #[from]
        #[source]
        source: FeedError,
    },
    /// The records could not be exported.
    #[error("export error: {source}")]
    Export {
        /// Underlying export error.
        #[from]
        #[source]
        source: ExportError,
    },
}
