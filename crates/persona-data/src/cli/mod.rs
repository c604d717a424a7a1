//! CLI support for generating and exporting persona records.
//!
//! The `persona-gen` binary delegates to these functions so the whole flow,
//! from argument parsing to export, can be exercised in tests without
//! spawning a process.

mod error;

use std::fmt;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

pub use error::CliError;

use crate::batch::GenerationParams;
use crate::config::GeneratorSettings;
use crate::export::{ExportFormat, export_to_file, write_records};
use crate::feed::RecordFeed;
use crate::locale::Region;
use crate::seed::generate_random_seed;
use crate::validation::{normalize_error_intensity_input, normalize_seed_input};

/// Usage text printed for `-h` and `--help`.
pub const USAGE: &str = concat!(
    "Usage: persona-gen [options]\n",
    "\n",
    "Options:\n",
    "  --region <name>      USA, Russia or Ukraine (default: USA)\n",
    "  --seed <n>           Seed, 0 to 9007199254740991 (default: 0)\n",
    "  --random-seed        Draw a fresh seed instead of --seed\n",
    "  --errors <x>         Expected typing errors per field, 0 to 1000\n",
    "  --pages <n>          Pages of 10 loaded after the first 60 records\n",
    "  --format <fmt>       csv or jsonl (default: csv)\n",
    "  --output <path>      Write to a file instead of stdout\n",
    "  -h, --help           Print this help output\n",
    "\n",
    "Defaults may also be set with PERSONA_REGION, PERSONA_SEED,\n",
    "PERSONA_ERROR_INTENSITY and PERSONA_FORMAT.\n",
);

/// Parsed command-line options.
///
/// Seeds and error intensities are kept as typed; they are normalised
/// leniently when the options are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    region: Option<String>,
    seed: Option<String>,
    random_seed: bool,
    errors: Option<String>,
    pages: Option<usize>,
    format: Option<String>,
    output: Option<Utf8PathBuf>,
}

impl Options {
    /// Returns the output path, if records go to a file.
    #[must_use]
    pub fn output(&self) -> Option<&Utf8Path> {
        self.output.as_deref()
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// A fully resolved generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Parameters of the record stream.
    pub params: GenerationParams,
    /// Number of "load more" pages after the initial batch.
    pub pages: usize,
    /// Export encoding.
    pub format: ExportFormat,
    /// Destination file; `None` writes to the supplied writer.
    pub output: Option<Utf8PathBuf>,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Parameters the records were generated with.
    pub params: GenerationParams,
    /// Number of records exported.
    pub records: usize,
    /// Export encoding.
    pub format: ExportFormat,
    /// File the records were written to, if any.
    pub output: Option<Utf8PathBuf>,
}

/// Parses CLI arguments.
///
/// # Errors
///
/// Returns [`CliError`] for unknown flags, missing values, and page counts
/// that are not numbers.
///
/// # Example
///
/// ```
/// use persona_data::cli::{ParseOutcome, parse_args};
///
/// let args = ["--region", "Russia", "--seed", "42", "--pages", "2"].map(String::from);
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--region" => options.region = Some(next_value(&mut args, "--region")?),
            "--seed" => options.seed = Some(next_value(&mut args, "--seed")?),
            "--random-seed" => options.random_seed = true,
            "--errors" => options.errors = Some(next_value(&mut args, "--errors")?),
            "--pages" => {
                let value = next_value(&mut args, "--pages")?;
                options.pages = Some(parse_number(&value, "--pages")?);
            }
            "--format" => options.format = Some(next_value(&mut args, "--format")?),
            "--output" => {
                let value = next_value(&mut args, "--output")?;
                options.output = Some(Utf8PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Combines parsed flags with configured defaults.
///
/// Flags take precedence over `settings`.
///
/// # Errors
///
/// Returns [`CliError`] for an unknown region or format, or when both
/// `--seed` and `--random-seed` are supplied.
///
/// # Example
///
/// ```
/// use persona_data::cli::{ParseOutcome, parse_args, resolve};
/// use persona_data::{GeneratorSettings, Region};
///
/// let settings = GeneratorSettings {
///     region: Some("Ukraine".to_owned()),
///     seed: Some("7".to_owned()),
///     error_intensity: None,
///     format: None,
/// };
/// let args = ["--seed", "99"].map(String::from);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let plan = resolve(&options, &settings).expect("resolve");
/// assert_eq!(plan.params.region, Region::Ukraine);
/// assert_eq!(plan.params.seed.get(), 99);
/// ```
pub fn resolve(options: &Options, settings: &GeneratorSettings) -> Result<Plan, CliError> {
    let region = match options.region.as_deref() {
        Some(name) => name.parse::<Region>()?,
        None => settings.region()?,
    };
    let seed = match (options.random_seed, options.seed.as_deref()) {
        (true, Some(_)) => return Err(CliError::ConflictingSeedFlags),
        (true, None) => generate_random_seed(region),
        (false, Some(value)) => normalize_seed_input(value),
        (false, None) => settings.seed(),
    };
    let error_intensity = options
        .errors
        .as_deref()
        .map_or_else(|| settings.error_intensity(), normalize_error_intensity_input);
    let format = match options.format.as_deref() {
        Some(name) => name.parse::<ExportFormat>()?,
        None => settings.format()?,
    };

    Ok(Plan {
        params: GenerationParams {
            region,
            seed,
            error_intensity,
        },
        pages: options.pages.unwrap_or(0),
        format,
        output: options.output.clone(),
    })
}

/// Generates the planned records and exports them.
///
/// Records go to `plan.output` when set, otherwise to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when a batch cannot be generated or the export
/// fails.
pub fn execute<W: Write>(plan: &Plan, out: W) -> Result<Summary, CliError> {
    let feed = RecordFeed::new(plan.params);
    feed.regenerate(plan.params)?;
    for _ in 0..plan.pages {
        feed.load_more()?;
    }
    let records = feed.records();

    match plan.output.as_deref() {
        Some(path) => export_to_file(plan.format, &records, path)?,
        None => write_records(plan.format, &records, out)?,
    }

    info!(
        region = %plan.params.region,
        seed = %plan.params.seed,
        records = records.len(),
        "generation run complete"
    );

    Ok(Summary {
        params: plan.params,
        records: records.len(),
        format: plan.format,
        output: plan.output.clone(),
    })
}

/// Formats the success message emitted after a file export.
///
/// # Example
///
/// ```
/// use persona_data::cli::{Summary, success_message};
/// use persona_data::{ExportFormat, GenerationParams};
///
/// let summary = Summary {
///     params: GenerationParams::default(),
///     records: 70,
///     format: ExportFormat::Csv,
///     output: Some("people.csv".into()),
/// };
///
/// assert_eq!(
///     success_message(&summary),
///     "Exported 70 records (region=USA, seed=0, errors=0) as csv to people.csv"
/// );
/// ```
#[must_use]
pub fn success_message(summary: &Summary) -> String {
    let destination = summary
        .output
        .as_ref()
        .map_or_else(|| "stdout".to_owned(), ToString::to_string);
    format!(
        "Exported {} records ({}) as {} to {destination}",
        summary.records,
        ParamsDisplay(&summary.params),
        summary.format,
    )
}

struct ParamsDisplay<'a>(&'a GenerationParams);

impl fmt::Display for ParamsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region={}, seed={}, errors={}",
            self.0.region, self.0.seed, self.0.error_intensity
        )
    }
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
