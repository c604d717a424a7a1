//! Paginated record feed.
//!
//! The feed owns the accumulated record list and is its only writer. A full
//! regeneration replaces the list; "load more" appends the next page. Both go
//! through a [`BatchTicket`] so that the expensive generation step runs
//! outside the lock:
//!
//! 1. `begin_*` reserves the work under the lock and returns a ticket.
//! 2. [`BatchTicket::produce`] generates the records without holding the lock.
//! 3. [`RecordFeed::finish`] commits the records under the lock, unless the
//!    parameters changed in the meantime.
//!
//! Every regeneration bumps an epoch. Tickets from an older epoch are
//! discarded on `finish`, so the list never mixes records from different
//! `(region, seed, intensity)` triples. Only one batch may be in flight per
//! epoch; further load requests are refused until it lands.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::batch::{GenerationParams, INITIAL_BATCH_SIZE, PAGE_SIZE, generate_batch};
use crate::error::{FeedError, GenerationError};
use crate::record::CorruptedRecord;

/// Reserved work for one batch.
///
/// Obtain tickets from [`RecordFeed::begin_regenerate`] or
/// [`RecordFeed::begin_load_more`] and hand them back to
/// [`RecordFeed::finish`] or [`RecordFeed::cancel`].
#[derive(Debug, PartialEq, Eq)]
pub struct BatchTicket {
    epoch: u64,
    params: GenerationParams,
    start_index: u64,
    count: usize,
}

impl BatchTicket {
    /// Returns the parameters the batch will be generated with.
    #[must_use]
    pub const fn params(&self) -> GenerationParams {
        self.params
    }

    /// Returns the index of the first record in the batch.
    #[must_use]
    pub const fn start_index(&self) -> u64 {
        self.start_index
    }

    /// Returns the number of records in the batch.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Generates the reserved records.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the batch cannot be positioned.
    pub fn produce(&self) -> Result<Vec<CorruptedRecord>, GenerationError> {
        generate_batch(&self.params, self.start_index, self.count)
    }
}

/// What happened to a requested batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The batch was committed to the feed.
    Appended {
        /// Index of the first committed record.
        start_index: u64,
        /// Number of committed records.
        count: usize,
    },
    /// Another batch is in flight; the request was ignored.
    Busy,
    /// The parameters changed while the batch was produced; it was dropped.
    Discarded,
    /// The parameters already match the feed; nothing was regenerated.
    Unchanged,
}

#[derive(Debug)]
struct FeedState {
    params: GenerationParams,
    epoch: u64,
    records: Vec<CorruptedRecord>,
    in_flight: Option<u64>,
}

impl FeedState {
    fn next_index(&self) -> u64 {
        u64::try_from(self.records.len())
            .unwrap_or(u64::MAX)
            .saturating_add(1)
    }
}

/// The accumulated, paginated record list for one set of parameters.
///
/// # Example
///
/// ```
/// use persona_data::{GenerationParams, GenerationSeed, LoadOutcome, RecordFeed, Region};
///
/// let feed = RecordFeed::new(GenerationParams {
///     region: Region::Usa,
///     seed: GenerationSeed::new(42),
///     ..GenerationParams::default()
/// });
///
/// feed.load_more().expect("initial batch");
/// feed.load_more().expect("next page");
///
/// let indices: Vec<u64> = feed.records().iter().map(|r| r.index).collect();
/// assert_eq!(indices, (1..=70).collect::<Vec<_>>());
/// ```
#[derive(Debug)]
pub struct RecordFeed {
    state: Mutex<FeedState>,
}

impl RecordFeed {
    /// Creates an empty feed. The first load produces the initial batch.
    #[must_use]
    pub const fn new(params: GenerationParams) -> Self {
        Self {
            state: Mutex::new(FeedState {
                params,
                epoch: 0,
                records: Vec::new(),
                in_flight: None,
            }),
        }
    }

    /// Returns the parameters the feed currently represents.
    #[must_use]
    pub fn params(&self) -> GenerationParams {
        self.lock().params
    }

    /// Returns a snapshot of the accumulated records.
    #[must_use]
    pub fn records(&self) -> Vec<CorruptedRecord> {
        self.lock().records.clone()
    }

    /// Returns the number of accumulated records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// Returns `true` when no records have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Returns `true` while a batch for the current parameters is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        let state = self.lock();
        state.in_flight == Some(state.epoch)
    }

    /// Discards every record and reserves the initial batch for `params`.
    ///
    /// Any batch still in flight becomes stale and will be discarded.
    pub fn begin_regenerate(&self, params: GenerationParams) -> BatchTicket {
        let mut state = self.lock();
        state.epoch = state.epoch.wrapping_add(1);
        state.params = params;
        state.records.clear();
        state.in_flight = Some(state.epoch);

        info!(
            region = %params.region,
            seed = %params.seed,
            error_intensity = %params.error_intensity,
            epoch = state.epoch,
            "regenerating record feed"
        );

        BatchTicket {
            epoch: state.epoch,
            params,
            start_index: 1,
            count: INITIAL_BATCH_SIZE,
        }
    }

    /// Reserves the next page, or returns `None` while a batch is in flight.
    ///
    /// An empty feed reserves the initial batch instead of a single page.
    pub fn begin_load_more(&self) -> Option<BatchTicket> {
        let mut state = self.lock();
        if state.in_flight == Some(state.epoch) {
            debug!(epoch = state.epoch, "load ignored: batch already in flight");
            return None;
        }
        let count = if state.records.is_empty() {
            INITIAL_BATCH_SIZE
        } else {
            PAGE_SIZE
        };
        state.in_flight = Some(state.epoch);
        Some(BatchTicket {
            epoch: state.epoch,
            params: state.params,
            start_index: state.next_index(),
            count,
        })
    }

    /// Commits a produced batch.
    ///
    /// Returns [`LoadOutcome::Discarded`] when the feed was regenerated after
    /// the ticket was issued.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NonContiguousBatch`] when the batch does not start
    /// at the feed's next index.
    pub fn finish(
        &self,
        ticket: BatchTicket,
        batch: Vec<CorruptedRecord>,
    ) -> Result<LoadOutcome, FeedError> {
        let mut state = self.lock();
        if ticket.epoch != state.epoch {
            debug!(
                ticket_epoch = ticket.epoch,
                epoch = state.epoch,
                "discarding stale batch"
            );
            return Ok(LoadOutcome::Discarded);
        }
        state.in_flight = None;

        let expected = state.next_index();
        if let Some(first) = batch.first() {
            if first.index != expected {
                return Err(FeedError::NonContiguousBatch {
                    expected,
                    actual: first.index,
                });
            }
        }

        let count = batch.len();
        state.records.extend(batch);
        debug!(start_index = expected, count, total = state.records.len(), "batch appended");
        Ok(LoadOutcome::Appended {
            start_index: expected,
            count,
        })
    }

    /// Releases a ticket without committing anything.
    pub fn cancel(&self, ticket: BatchTicket) {
        let mut state = self.lock();
        if state.in_flight == Some(ticket.epoch) {
            state.in_flight = None;
        }
    }

    /// Replaces the feed with the initial batch for `params`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the batch cannot be generated or committed.
    pub fn regenerate(&self, params: GenerationParams) -> Result<LoadOutcome, FeedError> {
        let ticket = self.begin_regenerate(params);
        self.complete(ticket)
    }

    /// Regenerates only when `params` differ from the current parameters or
    /// the feed is still empty.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the batch cannot be generated or committed.
    pub fn apply_params(&self, params: GenerationParams) -> Result<LoadOutcome, FeedError> {
        {
            let state = self.lock();
            if state.params == params && !state.records.is_empty() {
                return Ok(LoadOutcome::Unchanged);
            }
        }
        self.regenerate(params)
    }

    /// Appends the next page, ignoring the request while a batch is in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the batch cannot be generated or committed.
    pub fn load_more(&self) -> Result<LoadOutcome, FeedError> {
        match self.begin_load_more() {
            Some(ticket) => self.complete(ticket),
            None => Ok(LoadOutcome::Busy),
        }
    }

    fn complete(&self, ticket: BatchTicket) -> Result<LoadOutcome, FeedError> {
        match ticket.produce() {
            Ok(batch) => self.finish(ticket, batch),
            Err(err) => {
                self.cancel(ticket);
                Err(FeedError::from(err))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        // Every critical section leaves the state consistent, so a panic in
        // another holder does not invalidate it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
