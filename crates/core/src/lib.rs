//! Core type aliases, traits, and constants for pruned k-means.
//!
//! This crate provides the foundational types and tunable parameters
//! shared by the clustering engine and the trials driver.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single coordinate of a feature vector.
pub type Coordinate = f64;
/// Distances, squared distances, and convergence measures.
pub type Energy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// K-MEANS CLUSTERING
// Defaults for a bare centroid count, before any caller overrides.
// ============================================================================
/// Default minimum cluster population; smaller clusters are pruned.
pub const KMEANS_MIN_POINTS: usize = 10;
/// Default Lloyd's algorithm iteration budget.
pub const KMEANS_MAX_ITERATIONS: usize = 500;

// ============================================================================
// RANDOMIZED TRIALS
// Each trial draws a centroid count from [TRIALS_MIN_CENTROIDS, floor(sqrt(n))].
// ============================================================================
/// Number of independent fits per driver run.
pub const TRIALS_COUNT: usize = 10;
/// Smallest centroid count a trial may draw.
pub const TRIALS_MIN_CENTROIDS: usize = 2;
/// Clusters with fewer members than this are pruned.
pub const TRIALS_MIN_POINTS: usize = 25;
/// Lloyd's algorithm iterations before giving up on convergence.
pub const TRIALS_MAX_ITERATIONS: usize = 100;

// ============================================================================
// OUTPUT LAYOUT
// ============================================================================
/// Per-trial directory prefix, suffixed with the trial's centroid count.
pub const OUTPUT_DIRECTORY_PREFIX: &str = "cluster_number_";
/// Per-cluster membership file prefix, suffixed with the cluster id.
pub const OUTPUT_CLUSTER_PREFIX: &str = "cluster";
/// Companion note written only when clusters were pruned.
pub const OUTPUT_REMOVED_NOTE: &str = "removed_cluster(s).txt";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
