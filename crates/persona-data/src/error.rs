//! Error types for the persona-data crate.
//!
//! One `thiserror` enum per concern: locale resolution, stream positioning,
//! pagination, export and settings. CLI errors live with the CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while resolving a region to its locale profile.
///
/// An unknown region is a configuration error. Generation never falls back to
/// another locale's tables, because the output stream is tied to the declared
/// region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The requested region has no locale module.
    #[error("unsupported region '{name}' (expected one of: USA, Russia, Ukraine)")]
    UnsupportedRegion {
        /// Region name as supplied by the caller.
        name: String,
    },
}

/// Errors that can occur while positioning the record stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Record indices are 1-based; zero is not a stream position.
    #[error("record indices start at 1, got start index {start}")]
    InvalidStartIndex {
        /// Start index that was rejected.
        start: u64,
    },

    /// The requested batch runs past the last representable index.
    #[error("batch of {count} records starting at {start} overflows the index range")]
    IndexOverflow {
        /// First index of the batch.
        start: u64,
        /// Number of records requested.
        count: usize,
    },
}

/// Errors surfaced by the paginated record feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The batch could not be generated.
    #[error("batch generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// A finished batch does not continue the accumulated index sequence.
    #[error("batch starting at index {actual} does not continue the feed (expected {expected})")]
    NonContiguousBatch {
        /// Index the feed expected next.
        expected: u64,
        /// First index of the rejected batch.
        actual: u64,
    },
}

/// Errors that can occur while exporting records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The requested export format is not supported.
    #[error("unsupported export format '{name}' (expected csv or jsonl)")]
    UnsupportedFormat {
        /// Format name as supplied by the caller.
        name: String,
    },

    /// CSV serialisation failed.
    #[error("failed to write CSV: {message}")]
    Csv {
        /// Description of the CSV error.
        message: String,
    },

    /// JSON serialisation failed.
    #[error("failed to write JSON lines: {message}")]
    Json {
        /// Description of the JSON error.
        message: String,
    },

    /// The export file could not be written.
    #[error("failed to write export file at '{path}': {message}")]
    Write {
        /// Path of the export file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors raised while loading generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A configuration source could not be read or merged.
    #[error("failed to load settings: {message}")]
    Load {
        /// Description of the configuration error.
        message: String,
    },
}
