use super::*;
use pkm_core::KMEANS_MAX_ITERATIONS;
use pkm_core::KMEANS_MIN_POINTS;

/// Validated hyperparameters for a single [`Engine`].
///
/// Fields are private so that every `Config` in existence has passed
/// [`Config::new`]: at least one centroid and at least one iteration.
/// A minimum population of zero disables pruning entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    num_centroids: usize,
    min_num_points: usize,
    max_iterations: usize,
}

impl Config {
    pub fn new(
        num_centroids: usize,
        min_num_points: usize,
        max_iterations: usize,
    ) -> Result<Self, ClusterError> {
        if num_centroids == 0 {
            return Err(ClusterError::InvalidConfiguration(
                "centroid count must be positive".to_string(),
            ));
        }
        if max_iterations == 0 {
            return Err(ClusterError::InvalidConfiguration(
                "iteration cap must be positive".to_string(),
            ));
        }
        Ok(Self {
            num_centroids,
            min_num_points,
            max_iterations,
        })
    }
    /// Target cluster count before pruning.
    pub fn k(&self) -> usize {
        self.num_centroids
    }
    /// Minimum members a cluster needs to survive recomputation.
    pub fn floor(&self) -> usize {
        self.min_num_points
    }
    /// Upper bound on refinement passes.
    pub fn t(&self) -> usize {
        self.max_iterations
    }
}

/// A bare centroid count, with default pruning floor and iteration budget.
impl TryFrom<usize> for Config {
    type Error = ClusterError;
    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k, KMEANS_MIN_POINTS, KMEANS_MAX_ITERATIONS)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "k={} floor={} t={}",
            self.num_centroids, self.min_num_points, self.max_iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_centroids() {
        assert!(matches!(
            Config::new(0, 0, 10),
            Err(ClusterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert!(matches!(
            Config::new(3, 0, 0),
            Err(ClusterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_floor_is_valid() {
        let config = Config::new(3, 0, 1).unwrap();
        assert_eq!(config.k(), 3);
        assert_eq!(config.floor(), 0);
        assert_eq!(config.t(), 1);
    }

    #[test]
    fn bare_count_takes_defaults() {
        let config = Config::try_from(4).unwrap();
        assert_eq!(config.k(), 4);
        assert_eq!(config.floor(), KMEANS_MIN_POINTS);
        assert_eq!(config.t(), KMEANS_MAX_ITERATIONS);
        assert!(Config::try_from(0).is_err());
    }
}
