//! Seed controller: positions the deterministic record stream.
//!
//! Every record index owns an independent ChaCha stream keyed by the region
//! and seed, with the index as the stream number. Record *i* is therefore the
//! same whether it is reached in one large batch or after any number of
//! smaller ones, and repositioning the stream never depends on earlier calls.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use crate::generator::generate_user_data;
use crate::locale::Region;
use crate::record::Record;

/// Largest seed value, `2^53 - 1`, matching the range of exactly
/// representable integers in IEEE-754 doubles.
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Bit offset of the region tag inside a stream key.
const REGION_TAG_SHIFT: u32 = 56;

/// Bit marking the corruption stream inside a stream key.
const CORRUPTION_STREAM_BIT: u64 = 1 << 54;

/// Pseudo-random generator backing each record stream.
pub type StreamRng = ChaCha8Rng;

/// Root value of a deterministic output stream.
///
/// # Example
///
/// ```
/// use persona_data::{GenerationSeed, MAX_SAFE_INTEGER};
///
/// assert_eq!(GenerationSeed::new(42).get(), 42);
/// assert_eq!(GenerationSeed::new(u64::MAX).get(), MAX_SAFE_INTEGER);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u64", into = "u64")]
pub struct GenerationSeed(u64);

impl GenerationSeed {
    /// Builds a seed, clamping values above [`MAX_SAFE_INTEGER`].
    #[must_use]
    pub const fn new(value: u64) -> Self {
        if value > MAX_SAFE_INTEGER {
            Self(MAX_SAFE_INTEGER)
        } else {
            Self(value)
        }
    }

    /// Returns the seed value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for GenerationSeed {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<GenerationSeed> for u64 {
    fn from(seed: GenerationSeed) -> Self {
        seed.0
    }
}

impl fmt::Display for GenerationSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clean record paired with the generator reserved for corrupting it.
#[derive(Debug, Clone)]
pub struct SeededRecord {
    /// The clean record for this index.
    pub record: Record,
    /// Generator for this record's typing errors, independent of the clean
    /// tuple draws.
    pub corruption_rng: StreamRng,
}

/// Iterator over consecutive records of one `(region, seed)` stream.
///
/// Created by [`reseed`].
#[derive(Debug, Clone)]
pub struct RecordStream {
    region: Region,
    seed: GenerationSeed,
    next_index: Option<u64>,
}

impl RecordStream {
    /// Returns the region of the stream.
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Returns the seed of the stream.
    #[must_use]
    pub const fn seed(&self) -> GenerationSeed {
        self.seed
    }

    /// Returns the index the next record will carry, if any remain.
    #[must_use]
    pub const fn next_index(&self) -> Option<u64> {
        self.next_index
    }
}

impl Iterator for RecordStream {
    type Item = SeededRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index?;
        self.next_index = index.checked_add(1);
        Some(seeded_record(self.region, self.seed, index))
    }
}

/// Positions the stream so that the next record carries `start_index`.
///
/// The result depends only on the three arguments: reseeding at 61 after
/// generating 60 records yields exactly the records a single 70-record run
/// would have produced at indices 61 to 70.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidStartIndex`] when `start_index` is 0,
/// because record indices are 1-based.
///
/// # Example
///
/// ```
/// use persona_data::{GenerationSeed, Region, reseed};
///
/// let seed = GenerationSeed::new(7);
/// let all: Vec<_> = reseed(Region::Usa, seed, 1)
///     .expect("valid start")
///     .take(5)
///     .map(|seeded| seeded.record)
///     .collect();
/// let tail: Vec<_> = reseed(Region::Usa, seed, 4)
///     .expect("valid start")
///     .take(2)
///     .map(|seeded| seeded.record)
///     .collect();
///
/// assert_eq!(all.get(3..), Some(tail.as_slice()));
/// ```
pub fn reseed(
    region: Region,
    seed: GenerationSeed,
    start_index: u64,
) -> Result<RecordStream, GenerationError> {
    if start_index == 0 {
        return Err(GenerationError::InvalidStartIndex { start: start_index });
    }
    Ok(RecordStream {
        region,
        seed,
        next_index: Some(start_index),
    })
}

/// Draws a fresh seed uniformly from `[0, MAX_SAFE_INTEGER]`.
#[must_use]
pub fn generate_random_seed(region: Region) -> GenerationSeed {
    generate_random_seed_with(region, &mut rand::rng())
}

/// Draws a fresh seed from the supplied generator.
pub fn generate_random_seed_with<R: Rng + ?Sized>(region: Region, rng: &mut R) -> GenerationSeed {
    let seed = GenerationSeed::new(rng.random_range(0..=MAX_SAFE_INTEGER));
    debug!(%region, %seed, "drew random seed");
    seed
}

fn seeded_record(region: Region, seed: GenerationSeed, index: u64) -> SeededRecord {
    let mut clean_rng = stream_rng(stream_key(region, seed), index);
    let record = generate_user_data(region, &mut clean_rng, index);
    let corruption_rng = stream_rng(stream_key(region, seed) | CORRUPTION_STREAM_BIT, index);
    SeededRecord {
        record,
        corruption_rng,
    }
}

/// Packs the region above the 53 seed bits so distinct `(region, seed)`
/// pairs never share a key.
const fn stream_key(region: Region, seed: GenerationSeed) -> u64 {
    let tag: u64 = match region {
        Region::Usa => 1,
        Region::Russia => 2,
        Region::Ukraine => 3,
    };
    seed.get() | (tag << REGION_TAG_SHIFT)
}

fn stream_rng(key: u64, index: u64) -> StreamRng {
    let mut rng = StreamRng::seed_from_u64(key);
    rng.set_stream(index);
    rng
}
