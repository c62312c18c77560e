use crate::Directory;
use crate::Table;
use pkm_clustering::ClusterError;
use pkm_clustering::Config;
use pkm_clustering::Engine;
use pkm_clustering::Fit;
use pkm_core::TRIALS_COUNT;
use pkm_core::TRIALS_MAX_ITERATIONS;
use pkm_core::TRIALS_MIN_CENTROIDS;
use pkm_core::TRIALS_MIN_POINTS;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::ops::RangeInclusive;
use std::path::Path;

/// Repeated k-means fits with randomly drawn centroid counts.
///
/// Each trial draws `k` uniformly from `[2, floor(sqrt(n))]`, fits a fresh
/// engine with its own seed, and writes the result under
/// `cluster_number_<k>/`. The first failure aborts the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trials {
    /// Number of independent fits
    pub trials: usize,
    /// Minimum cluster population
    pub floor: usize,
    /// Iteration cap per fit
    pub t: usize,
    /// Driver seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
}

/// One completed trial.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub k: usize,
    pub seed: u64,
    pub fit: Fit,
}

impl Default for Trials {
    fn default() -> Self {
        Self {
            trials: TRIALS_COUNT,
            floor: TRIALS_MIN_POINTS,
            t: TRIALS_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl Trials {
    /// Centroid counts a dataset of `n` observations may draw from.
    pub fn range(n: usize) -> Result<RangeInclusive<usize>, ClusterError> {
        let hi = n.isqrt();
        if hi < TRIALS_MIN_CENTROIDS {
            return Err(ClusterError::InvalidConfiguration(format!(
                "{} observations allow at most {} centroids, need at least {}",
                n, hi, TRIALS_MIN_CENTROIDS
            )));
        }
        Ok(TRIALS_MIN_CENTROIDS..=hi)
    }

    /// Runs every trial over `table`, writing results beneath `root`.
    pub fn run(&self, table: &Table, root: &Path) -> anyhow::Result<Vec<Trial>> {
        let range = Self::range(table.len())?;
        let ref mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let mut results = Vec::with_capacity(self.trials);
        for _ in 0..self.trials {
            let k = rng.random_range(range.clone());
            let seed = rng.random::<u64>();
            log::info!("{:<32}{:<32}", "running kmeans", format!("{} centroids", k));
            let config = Config::new(k, self.floor, self.t)?;
            let fit = Engine::seeded(config, seed).fit(table.dataset());
            log::info!("{:<32}{:<32}", "kmeans result", fit);
            fit.emit(&mut Directory::new(root, table, k))?;
            results.push(Trial { k, seed, fit });
        }
        Ok(results)
    }
}
