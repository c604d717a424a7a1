//! Deterministic, region-aware fake personal data with typing errors.
//!
//! This crate generates believable user records (name, address, phone) for
//! the USA, Russia and Ukraine and corrupts them with keyboard-aware typing
//! mistakes, for exercising record-matching and deduplication systems.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Seeded record streams where record `i` depends only on
//!   `(region, seed, i)`, so pagination never shifts earlier records
//! - Per-locale keyboard adjacency tables for realistic substitutions
//! - Fractional error intensities (expected errors per field, up to 1000)
//! - A paginated feed (60 records, then pages of 10) that discards stale
//!   batches when the parameters change
//! - CSV and JSON Lines export
//!
//! # Example
//!
//! ```
//! use persona_data::{ErrorIntensity, GenerationParams, GenerationSeed, Region, generate_batch};
//!
//! let params = GenerationParams {
//!     region: Region::Usa,
//!     seed: GenerationSeed::new(42),
//!     error_intensity: ErrorIntensity::new(2, 250),
//! };
//!
//! let first_page = generate_batch(&params, 1, 60).expect("valid batch");
//! let next_page = generate_batch(&params, 61, 10).expect("valid batch");
//! let whole = generate_batch(&params, 1, 70).expect("valid batch");
//!
//! assert_eq!([first_page, next_page].concat(), whole);
//! ```

mod atomic_io;
mod batch;
pub mod cli;
mod config;
mod error;
mod export;
mod feed;
mod generator;
mod intensity;
mod locale;
mod misspelling;
mod record;
mod seed;
mod validation;

pub use batch::{
    GenerationParams, INITIAL_BATCH_SIZE, PAGE_SIZE, generate_batch, generate_clean_batch,
};
pub use config::GeneratorSettings;
pub use error::{ExportError, FeedError, GenerationError, LocaleError, SettingsError};
pub use export::{
    CSV_HEADERS, ExportFormat, export_to_file, render, write_csv, write_json_lines, write_records,
};
pub use feed::{BatchTicket, LoadOutcome, RecordFeed};
pub use generator::generate_user_data;
pub use intensity::{ErrorIntensity, MAX_ERROR_INTENSITY};
pub use locale::{LocaleProfile, Region};
pub use misspelling::{FieldCorruption, MisspellingEngine, TypingError};
pub use record::{CorruptedRecord, PersonFields, Record};
pub use seed::{
    GenerationSeed, MAX_SAFE_INTEGER, RecordStream, SeededRecord, StreamRng, generate_random_seed,
    generate_random_seed_with, reseed,
};
pub use validation::{normalize_error_intensity_input, normalize_seed_input};
