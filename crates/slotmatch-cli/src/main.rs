mod cli;
mod telemetry;

use clap::Parser;
use slotmatch::{solve_file, MatchConfig, SlotmatchError};
use thiserror::Error;
use tracing::info;

use crate::cli::{Cli, OutputFormat};
use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    Slotmatch(#[from] SlotmatchError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("slotmatch: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let base = match &cli.config {
        Some(path) => MatchConfig::load(path).map_err(SlotmatchError::from)?,
        None => MatchConfig::default(),
    };
    let config = cli.apply(base);

    let solution = solve_file(&cli.input, &config)?;
    let roster = solution.roster();
    info!(
        event = "assigned",
        slots = roster.slot_count(),
        applicants = roster.applicant_count(),
        capacity = roster.capacity(),
    );

    match cli.format {
        OutputFormat::Text => print!("{}", solution.to_text()),
        OutputFormat::Json => println!("{}", solution.to_report().to_json()?),
    }
    Ok(())
}
