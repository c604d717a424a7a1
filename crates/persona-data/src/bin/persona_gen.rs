//! Persona record generator CLI.
//!
//! This binary delegates to `persona_data::cli` for parsing, generation and
//! export, keeping the CLI behaviour testable without spawning a process.
//! Structured logs go to stderr; records go to stdout unless `--output` is
//! given.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use persona_data::GeneratorSettings;
use persona_data::cli::{
    CliError, ParseOutcome, USAGE, execute, parse_args, resolve, success_message,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_stdout(USAGE);
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let settings = GeneratorSettings::from_environment()?;
            let plan = resolve(&options, &settings)?;
            let summary = execute(&plan, io::stdout().lock())?;
            if summary.output.is_some() {
                write_stdout(&format!("{}\n", success_message(&summary)));
            }
            Ok(())
        }
    }
}

fn write_stdout(text: &str) {
    if let Err(err) = io::stdout().lock().write_all(text.as_bytes()) {
        drop(err);
    }
}
