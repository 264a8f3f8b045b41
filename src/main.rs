mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::input::InputError;
use crate::input::raw::{MAX_YEAR, MIN_YEAR, load_raw};
use crate::input::state::{load_state, save_state};
use crate::model::record::RecordMap;
use crate::pipeline::reconcile::reconcile;
use crate::report::{RunSummary, write_reports};

#[derive(Debug, Parser)]
#[command(name = "combine-rank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reconcile a raw scrape file and refresh percentile annotations.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Raw observations CSV from the scraper (plain or .gz).
    #[arg(long)]
    raw: PathBuf,
    /// Output directory for reports and the updated state file.
    #[arg(long)]
    out: PathBuf,
    /// State file from a previous run; an absent file means empty prior state.
    #[arg(long)]
    state: Option<PathBuf>,
    /// Graduation years to keep, comma separated. Default keeps all.
    #[arg(long, value_delimiter = ',', value_parser = parse_year)]
    years: Vec<u16>,
    /// Skip the percentile grid report.
    #[arg(long)]
    no_grid: bool,
}

fn parse_year(s: &str) -> Result<u16, String> {
    match s.trim().parse::<u16>() {
        Ok(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => Ok(y),
        _ => Err(format!(
            "graduation year must be {MIN_YEAR}-{MAX_YEAR}, got {s:?}"
        )),
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let Command::Run(args) = cli.command;

    let mut records = load_prior_state(args.state.as_deref())?;
    let prior_count = records.len();

    let years = (!args.years.is_empty()).then_some(args.years.as_slice());
    let batch = load_raw(&args.raw, years)?;
    info!(
        "ingested {} observations from {} rows ({} rows rejected, {} cells rejected, {} rows filtered)",
        batch.observations.len(),
        batch.total_rows,
        batch.rejected_rows,
        batch.rejected_values,
        batch.filtered_rows
    );

    let stats = reconcile(&mut records, &batch.observations);
    info!(
        "merged: {} applied, {} superseded, {} new records ({} prior), {} cohorts recomputed",
        stats.applied, stats.superseded, stats.new_records, prior_count, stats.cohorts_recomputed
    );

    let summary = RunSummary {
        tool: "combine-rank",
        version: env!("CARGO_PKG_VERSION"),
        raw_rows: batch.total_rows,
        observations: batch.observations.len(),
        rejected_rows: batch.rejected_rows,
        rejected_values: batch.rejected_values,
        filtered_rows: batch.filtered_rows,
        applied: stats.applied,
        superseded: stats.superseded,
        new_records: stats.new_records,
        records_total: stats.records_total,
        cohorts_recomputed: stats.cohorts_recomputed,
    };
    write_reports(&records, &summary, &args.out, !args.no_grid)?;
    save_state(&args.out.join("state.json"), &records)?;
    info!(
        "wrote {} player-year rows to {}",
        stats.records_total,
        args.out.display()
    );

    Ok(())
}

fn load_prior_state(path: Option<&Path>) -> Result<RecordMap, RunError> {
    match path {
        Some(p) if p.is_file() => {
            let records = load_state(p)?;
            info!(
                "loaded {} prior records from {}",
                records.len(),
                p.display()
            );
            Ok(records)
        }
        Some(p) => {
            info!("state file {} not found; starting empty", p.display());
            Ok(RecordMap::new())
        }
        None => Ok(RecordMap::new()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
