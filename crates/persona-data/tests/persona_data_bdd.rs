//! Behavioural tests for persona record generation.
//!
//! These scenarios cover stream continuity across pages, regeneration when
//! parameters change, stale batch handling, lenient input normalisation and
//! the CLI export flow.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

mod test_support;

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use persona_data::cli::{CliError, ParseOutcome, Summary, execute, parse_args, resolve};
use persona_data::{
    ErrorIntensity, GenerationParams, GenerationSeed, GeneratorSettings, LoadOutcome, LocaleError,
    RecordFeed, Region, generate_batch, generate_clean_batch, normalize_error_intensity_input,
    normalize_seed_input,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::{read_export, remove_parent_dir, unique_temp_path};

#[derive(Default, ScenarioState)]
struct World {
    feed: Slot<Arc<RecordFeed>>,
    params: Slot<GenerationParams>,
    outcome: Slot<LoadOutcome>,
    seed: Slot<GenerationSeed>,
    intensity: Slot<ErrorIntensity>,
    export_path: Slot<Utf8PathBuf>,
    cli_result: Slot<Result<Summary, CliError>>,
}

impl World {
    fn feed(&self) -> Arc<RecordFeed> {
        self.feed.get().expect("feed should be set")
    }

    fn params(&self) -> GenerationParams {
        self.params.get().expect("params should be set")
    }

    fn change_seed(&self, seed: u64) -> GenerationParams {
        let params = GenerationParams {
            seed: GenerationSeed::new(seed),
            ..self.params()
        };
        self.params.set(params);
        params
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn empty_settings() -> GeneratorSettings {
    GeneratorSettings {
        region: None,
        seed: None,
        error_intensity: None,
        format: None,
    }
}

fn run_cli(args: &[&str]) -> Result<Summary, CliError> {
    let argv = args.iter().map(|arg| (*arg).to_owned());
    let ParseOutcome::Options(options) = parse_args(argv)? else {
        panic!("expected options");
    };
    let plan = resolve(&options, &empty_settings())?;
    execute(&plan, io::sink())
}

// ============================================================================
// Given steps
// ============================================================================

#[given("parameters for region \"{region}\", seed {seed:u64} and error intensity \"{intensity}\"")]
fn generation_parameters(world: &World, region: String, seed: u64, intensity: String) {
    let params = GenerationParams {
        region: region.parse().expect("known region"),
        seed: GenerationSeed::new(seed),
        error_intensity: normalize_error_intensity_input(&intensity),
    };
    world.params.set(params);
    world.feed.set(Arc::new(RecordFeed::new(params)));
}

#[given("an export destination")]
fn an_export_destination(world: &World) {
    let path = unique_temp_path("bdd-export", "people.csv").expect("temp path");
    world.export_path.set(path);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the feed loads the initial batch")]
fn the_feed_loads_the_initial_batch(world: &World) {
    let outcome = world.feed().load_more().expect("initial batch");
    assert_eq!(
        outcome,
        LoadOutcome::Appended {
            start_index: 1,
            count: 60
        }
    );
}

#[when("the feed loads more records {times:usize} times")]
fn the_feed_loads_more_records(world: &World, times: usize) {
    let feed = world.feed();
    for _ in 0..times {
        feed.load_more().expect("next page");
    }
}

#[when("the seed changes to {seed:u64}")]
fn the_seed_changes(world: &World, seed: u64) {
    let params = world.change_seed(seed);
    let outcome = world.feed().apply_params(params).expect("regenerate");
    world.outcome.set(outcome);
}

#[when("a page is requested but the seed changes to {seed:u64} before it lands")]
fn a_page_is_overtaken_by_a_seed_change(world: &World, seed: u64) {
    let feed = world.feed();
    let ticket = feed.begin_load_more().expect("page ticket");
    let stale = ticket.produce().expect("stale page");

    let params = world.change_seed(seed);
    feed.regenerate(params).expect("regenerate");

    let outcome = feed.finish(ticket, stale).expect("finish stale page");
    world.outcome.set(outcome);
}

#[when("the seed input \"{input}\" is normalised")]
fn the_seed_input_is_normalised(world: &World, input: String) {
    world.seed.set(normalize_seed_input(&input));
}

#[when("the error intensity input \"{input}\" is normalised")]
fn the_error_intensity_input_is_normalised(world: &World, input: String) {
    world.intensity.set(normalize_error_intensity_input(&input));
}

#[when("the CLI runs with seed {seed:u64} and {pages:usize} extra page")]
fn the_cli_runs_with_seed_and_pages(world: &World, seed: u64, pages: usize) {
    let path = world.export_path.get().expect("export path should be set");
    let result = run_cli(&[
        "--seed",
        &seed.to_string(),
        "--pages",
        &pages.to_string(),
        "--output",
        path.as_str(),
    ]);
    world.cli_result.set(result);
}

#[when("the CLI runs with region \"{region}\"")]
fn the_cli_runs_with_region(world: &World, region: String) {
    world.cli_result.set(run_cli(&["--region", &region]));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the feed holds {count:u64} records indexed from 1")]
fn the_feed_holds_records(world: &World, count: u64) {
    let indices: Vec<u64> = world
        .feed()
        .records()
        .iter()
        .map(|record| record.index)
        .collect();
    assert_eq!(indices, (1..=count).collect::<Vec<_>>());
}

#[then("the feed matches a single batch of {count:usize} records")]
fn the_feed_matches_a_single_batch(world: &World, count: usize) {
    let expected = generate_batch(&world.params(), 1, count).expect("batch");
    assert_eq!(world.feed().records(), expected);
}

#[then("the stale page is discarded")]
fn the_stale_page_is_discarded(world: &World) {
    assert_eq!(world.outcome.get(), Some(LoadOutcome::Discarded));
    assert_eq!(world.feed().params(), world.params());
}

#[then("every record matches the clean stream")]
fn every_record_matches_the_clean_stream(world: &World) {
    let params = world.params();
    let clean = generate_clean_batch(params.region, params.seed, 1, 60).expect("clean batch");
    let records = world.feed().records();

    assert_eq!(records.len(), clean.len());
    for (record, pristine) in records.iter().zip(&clean) {
        assert_eq!(record.identifier, pristine.identifier);
        assert_eq!(record.fields, pristine.fields);
    }
}

#[then("the seed is {expected:u64}")]
fn the_seed_is(world: &World, expected: u64) {
    let seed = world.seed.get().expect("seed should be set");
    assert_eq!(seed.get(), expected);
}

#[then("the error intensity is \"{expected}\"")]
fn the_error_intensity_is(world: &World, expected: String) {
    let intensity = world.intensity.get().expect("intensity should be set");
    assert_eq!(intensity.to_string(), expected);
}

#[then("the CLI reports success")]
fn the_cli_reports_success(world: &World) {
    let result = world.cli_result.get().expect("CLI result should be set");
    let summary = result.expect("CLI run should succeed");
    let path = world.export_path.get().expect("export path should be set");

    assert_eq!(summary.params.region, Region::Usa);
    assert_eq!(summary.output, Some(path));
}

#[then("the export file holds {rows:usize} CSV rows")]
fn the_export_file_holds_rows(world: &World, rows: usize) {
    let path = world.export_path.get().expect("export path should be set");
    let contents = read_export(&path).expect("read export");
    remove_parent_dir(&path);

    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Index,Identifier,Name,Address,Phone"));
    assert_eq!(lines.count(), rows);
}

#[then("the CLI reports an unsupported region")]
fn the_cli_reports_an_unsupported_region(world: &World) {
    let result = world.cli_result.get().expect("CLI result should be set");
    let err = result.expect_err("CLI run should fail");

    assert_eq!(
        err,
        CliError::Locale {
            source: LocaleError::UnsupportedRegion {
                name: "Atlantis".to_owned()
            }
        }
    );
    assert!(err.to_string().contains("expected one of: USA, Russia, Ukraine"));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(path = "tests/features/persona_data.feature", index = 0)]
fn paginated_records_continue_the_stream(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/persona_data.feature", index = 1)]
fn changing_the_seed_restarts_the_feed(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/persona_data.feature", index = 2)]
fn a_stale_page_is_discarded(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/persona_data.feature", index = 3)]
fn zero_intensity_returns_clean_records(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/persona_data.feature", index = 4)]
fn out_of_range_input_is_clamped(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/persona_data.feature", index = 5)]
fn the_cli_exports_csv_to_a_file(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/persona_data.feature", index = 6)]
fn the_cli_rejects_an_unknown_region(world: World) {
    drop(world);
}
