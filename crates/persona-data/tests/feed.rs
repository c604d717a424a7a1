//! Integration tests for the paginated record feed.
//!
//! These tests exercise the public API end to end: continuity of the stream
//! across pages, index monotonicity through regenerations, reproducible
//! corruption, and the in-flight gate under concurrent triggers.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::thread;

use persona_data::{
    ErrorIntensity, GenerationParams, GenerationSeed, INITIAL_BATCH_SIZE, LoadOutcome, PAGE_SIZE,
    RecordFeed, Region, generate_batch,
};
use rstest::rstest;

fn params(region: Region, seed: u64, intensity: ErrorIntensity) -> GenerationParams {
    GenerationParams {
        region,
        seed: GenerationSeed::new(seed),
        error_intensity: intensity,
    }
}

fn indices(feed: &RecordFeed) -> Vec<u64> {
    feed.records().iter().map(|record| record.index).collect()
}

#[rstest]
#[case(Region::Usa)]
#[case(Region::Russia)]
#[case(Region::Ukraine)]
fn sixty_plus_ten_equals_seventy(#[case] region: Region) {
    let p = params(region, 42, ErrorIntensity::new(2, 250));
    let feed = RecordFeed::new(p);

    feed.load_more().expect("initial batch");
    feed.load_more().expect("page");

    let single = generate_batch(&p, 1, INITIAL_BATCH_SIZE + PAGE_SIZE).expect("batch");
    assert_eq!(feed.records(), single);
}

#[test]
fn indices_restart_after_every_regeneration() {
    let feed = RecordFeed::new(params(Region::Usa, 1, ErrorIntensity::ZERO));

    for seed in 1..=3 {
        feed.regenerate(params(Region::Usa, seed, ErrorIntensity::ZERO))
            .expect("regenerate");
        for _ in 0..seed {
            feed.load_more().expect("page");
        }
        let expected_len = INITIAL_BATCH_SIZE + PAGE_SIZE * usize::try_from(seed).expect("fits");
        let expected: Vec<u64> =
            (1..=u64::try_from(expected_len).expect("fits")).collect();
        assert_eq!(indices(&feed), expected);
    }
}

#[rstest]
#[case(Region::Usa)]
#[case(Region::Russia)]
#[case(Region::Ukraine)]
fn corruption_is_reproducible(#[case] region: Region) {
    let p = params(region, 77, ErrorIntensity::from_whole(4));
    let first = RecordFeed::new(p);
    let second = RecordFeed::new(p);

    first.load_more().expect("batch");
    second.load_more().expect("batch");

    assert_eq!(first.records(), second.records());
}

#[test]
fn changing_region_changes_every_identifier() {
    let usa = generate_batch(&params(Region::Usa, 9, ErrorIntensity::ZERO), 1, 20).expect("batch");
    let ukraine =
        generate_batch(&params(Region::Ukraine, 9, ErrorIntensity::ZERO), 1, 20).expect("batch");

    for (left, right) in usa.iter().zip(&ukraine) {
        assert_ne!(left.identifier, right.identifier);
    }
}

#[test]
fn intensity_change_keeps_identifiers() {
    let light = generate_batch(&params(Region::Russia, 5, ErrorIntensity::ZERO), 1, 20)
        .expect("batch");
    let heavy = generate_batch(&params(Region::Russia, 5, ErrorIntensity::from_whole(10)), 1, 20)
        .expect("batch");

    for (left, right) in light.iter().zip(&heavy) {
        assert_eq!(left.identifier, right.identifier);
    }
}

#[test]
fn concurrent_pages_never_leave_gaps() {
    let feed = Arc::new(RecordFeed::new(params(
        Region::Ukraine,
        3,
        ErrorIntensity::new(1, 500),
    )));
    feed.load_more().expect("initial batch");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&feed);
            thread::spawn(move || {
                (0..10)
                    .map(|_| shared.load_more().expect("page"))
                    .filter(|outcome| matches!(outcome, LoadOutcome::Appended { .. }))
                    .count()
            })
        })
        .collect();
    let appended: usize = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker"))
        .sum();

    let expected_len = INITIAL_BATCH_SIZE + PAGE_SIZE * appended;
    assert_eq!(feed.len(), expected_len);
    assert_eq!(
        indices(&feed),
        (1..=u64::try_from(expected_len).expect("fits")).collect::<Vec<_>>()
    );
}

#[test]
fn regeneration_during_a_page_discards_it() {
    let feed = RecordFeed::new(params(Region::Usa, 10, ErrorIntensity::from_whole(1)));
    feed.load_more().expect("initial batch");

    let ticket = feed.begin_load_more().expect("ticket");
    assert!(feed.load_more().is_ok_and(|outcome| outcome == LoadOutcome::Busy));

    let replacement = params(Region::Russia, 10, ErrorIntensity::from_whole(1));
    feed.regenerate(replacement).expect("regenerate");

    let stale = ticket.produce().expect("stale page");
    assert_eq!(
        feed.finish(ticket, stale).expect("finish"),
        LoadOutcome::Discarded
    );
    assert_eq!(
        feed.records(),
        generate_batch(&replacement, 1, INITIAL_BATCH_SIZE).expect("batch")
    );
}
