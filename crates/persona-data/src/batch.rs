//! Batch pipeline: reseed, generate clean tuples, corrupt, merge.

use std::iter::Take;

use tracing::debug;

use crate::error::GenerationError;
use crate::intensity::ErrorIntensity;
use crate::locale::Region;
use crate::misspelling::MisspellingEngine;
use crate::record::{CorruptedRecord, Record};
use crate::seed::{GenerationSeed, RecordStream, SeededRecord, reseed};

/// Number of records produced by a full regeneration.
pub const INITIAL_BATCH_SIZE: usize = 60;

/// Number of records added by each "load more".
pub const PAGE_SIZE: usize = 10;

/// The parameters that define an output stream.
///
/// Changing any of them invalidates every record generated so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GenerationParams {
    /// Region whose locale module produces and corrupts records.
    pub region: Region,
    /// Root of the deterministic stream.
    pub seed: GenerationSeed,
    /// Expected number of typing errors per field.
    pub error_intensity: ErrorIntensity,
}

/// Generates `count` corrupted records starting at `start_index`.
///
/// Each record's fields are corrupted with the generator reserved for its
/// index, so the output depends only on `params`, `start_index`, and `count`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidStartIndex`] for a start index of 0 and
/// [`GenerationError::IndexOverflow`] when the batch would run past
/// `u64::MAX`.
///
/// # Example
///
/// ```
/// use persona_data::{ErrorIntensity, GenerationParams, GenerationSeed, Region, generate_batch};
///
/// let params = GenerationParams {
///     region: Region::Russia,
///     seed: GenerationSeed::new(2026),
///     error_intensity: ErrorIntensity::new(1, 500),
/// };
/// let batch = generate_batch(&params, 1, 5).expect("valid batch");
///
/// assert_eq!(batch.len(), 5);
/// assert_eq!(batch, generate_batch(&params, 1, 5).expect("valid batch"));
/// ```
pub fn generate_batch(
    params: &GenerationParams,
    start_index: u64,
    count: usize,
) -> Result<Vec<CorruptedRecord>, GenerationError> {
    let stream = positioned_stream(params.region, params.seed, start_index, count)?;
    let engine = MisspellingEngine::new(params.region.profile());

    debug!(
        region = %params.region,
        seed = %params.seed,
        error_intensity = %params.error_intensity,
        start_index,
        count,
        "generating record batch"
    );

    Ok(stream
        .map(|seeded| {
            let SeededRecord {
                record,
                mut corruption_rng,
            } = seeded;
            let fields =
                engine.generate(&mut corruption_rng, params.error_intensity, &record.fields);
            CorruptedRecord::derive(&record, fields)
        })
        .collect())
}

/// Generates `count` clean records starting at `start_index`.
///
/// # Errors
///
/// Fails under the same conditions as [`generate_batch`].
pub fn generate_clean_batch(
    region: Region,
    seed: GenerationSeed,
    start_index: u64,
    count: usize,
) -> Result<Vec<Record>, GenerationError> {
    Ok(positioned_stream(region, seed, start_index, count)?
        .map(|seeded| seeded.record)
        .collect())
}

fn positioned_stream(
    region: Region,
    seed: GenerationSeed,
    start_index: u64,
    count: usize,
) -> Result<Take<RecordStream>, GenerationError> {
    let overflow = GenerationError::IndexOverflow {
        start: start_index,
        count,
    };
    let span = u64::try_from(count).map_err(|_| overflow.clone())?;
    let last = start_index.saturating_sub(1).checked_add(span);
    if last.is_none() {
        return Err(overflow);
    }
    Ok(reseed(region, seed, start_index)?.take(count))
}
