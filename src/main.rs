use clap::Parser;
use log::info;
use std::path::PathBuf;

mod config;
mod schedule;
mod estimator;
mod output;
mod error;

use crate::config::CycleConfig;
use crate::error::CycleError;
use crate::schedule::DosingSchedule;

#[derive(Parser)]
#[command(name = "cycle_decay")]
#[command(about = "Compound half-life decay estimator for cycle charting")]
struct Cli {
    /// Cycle definition file path (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), CycleError> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = CycleConfig::from_file(&cli.config)?;
    info!(
        "Loaded cycle from {:?}: {} schedules, {} to {}",
        cli.config,
        config.schedules.len(),
        config.cycle.start,
        config.cycle.end
    );

    let schedules: Vec<DosingSchedule> = config
        .schedules
        .into_iter()
        .map(DosingSchedule::from)
        .collect();

    let series = estimator::compute_series(&schedules, config.cycle.start, config.cycle.end);
    info!("Computed {} compound series", series.len());

    std::fs::create_dir_all(&cli.output)?;
    output::save_series(&series, &cli.output)?;
    info!("Results saved to {:?}", cli.output);

    Ok(())
}
