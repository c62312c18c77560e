//! Trials Binary
//!
//! Fits pruned k-means repeatedly over a tab-delimited table, drawing a
//! random centroid count for each run.
//!
//! Usage: trials --input <table> [--output <dir>] [--trials N] [--seed S]

fn main() {
    pkm_core::log();
    match pkm_trials::Cli::run() {
        Ok(trials) => log::info!("{:<32}{:<32}", "trials complete", trials.len()),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
