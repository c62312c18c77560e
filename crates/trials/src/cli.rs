//! Command-line entry for randomized trials.
use crate::*;
use clap::Parser;
use pkm_core::TRIALS_COUNT;
use pkm_core::TRIALS_MAX_ITERATIONS;
use pkm_core::TRIALS_MIN_POINTS;
use std::path::PathBuf;

/// Run k-means repeatedly over a tab-delimited table with random centroid counts.
#[derive(Debug, Parser)]
#[command(name = "trials", version, about)]
pub struct Cli {
    /// Tab-delimited table: header line, two label columns, then measurements
    #[arg(short, long)]
    input: PathBuf,
    /// Directory that receives the cluster_number_<k>/ folders
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
    /// Number of independent fits
    #[arg(long, default_value_t = TRIALS_COUNT)]
    trials: usize,
    /// Clusters with fewer members are removed
    #[arg(long, default_value_t = TRIALS_MIN_POINTS)]
    min_points: usize,
    /// Refinement passes per fit
    #[arg(long, default_value_t = TRIALS_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

impl From<&Cli> for Trials {
    fn from(cli: &Cli) -> Self {
        Self {
            trials: cli.trials,
            floor: cli.min_points,
            t: cli.max_iterations,
            seed: cli.seed,
        }
    }
}

impl Cli {
    /// Parses process arguments and runs every trial.
    pub fn run() -> anyhow::Result<Vec<Trial>> {
        let cli = Self::parse();
        log::info!("{:<32}{:<32}", "reading table", cli.input.display());
        let table = Table::read(&cli.input)?;
        Trials::from(&cli).run(&table, &cli.output)
    }
}
