use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Lloyd's k-means driver with minimum-population pruning.
///
/// Owns its configuration and an injected random source. Each call to
/// [`Engine::fit`] is self-contained: fresh centroids, a fresh removal
/// count, and no state carried over from earlier fits on the same engine.
///
/// # Lifecycle
///
/// 1. **Initializing** — sample `k` observations uniformly, with replacement
/// 2. **Assigning** — assign, recompute, prune, compare with previous centroids
/// 3. **Converged** — centroids did not move, or none survived pruning
/// 4. **IterationLimitReached** — budget exhausted; output is still usable
///
/// A final assignment pass always runs after the loop so the returned
/// membership matches the returned centroids.
pub struct Engine<R = SmallRng> {
    config: Config,
    rng: R,
}

impl Engine<SmallRng> {
    /// Engine whose initialization is reproducible from `seed`.
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    /// Assigns every observation to its nearest centroid. Empty when
    /// `centroids` is empty.
    pub fn assign(dataset: &Dataset, centroids: &[Point]) -> Assignment {
        Layer::new(dataset, centroids.to_vec(), 0).assign()
    }

    /// Means of the clusters with at least `floor` members, plus the
    /// number of clusters dropped for falling short.
    pub fn recompute(
        assignment: &Assignment,
        dataset: &Dataset,
        floor: usize,
    ) -> (Vec<Point>, usize) {
        Layer::new(dataset, Vec::new(), floor).recompute(assignment)
    }
}

impl<R: Rng> Engine<R> {
    pub fn new(config: Config, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Picks `k` starting centroids independently and uniformly from the
    /// dataset. Duplicates are possible and left as they are.
    pub fn initialize(&mut self, dataset: &Dataset) -> Vec<Point> {
        (0..self.config.k())
            .map(|_| self.rng.random_range(0..dataset.len()))
            .map(|i| dataset.point(i).clone())
            .collect()
    }

    /// Runs a full fit from randomly sampled centroids.
    pub fn fit(&mut self, dataset: &Dataset) -> Fit {
        log::debug!("{:<32}{:<32}", "kmeans initializing", self.config);
        let kmeans = self.initialize(dataset);
        self.refine(dataset, kmeans)
    }

    /// Runs the refinement loop from caller-chosen starting centroids.
    pub fn refine(&self, dataset: &Dataset, kmeans: Vec<Point>) -> Fit {
        let mut layer = Layer::new(dataset, kmeans, self.config.floor());
        let mut removed = 0;
        let mut iterations = 0;
        let mut termination = Termination::IterationLimitReached;
        while iterations < self.config.t() {
            iterations += 1;
            let ref assignment = layer.assign();
            let (kmeans, pruned) = layer.recompute(assignment);
            let drift = layer.drift(&kmeans);
            removed += pruned;
            layer.shift(kmeans);
            log::debug!(
                "{:<32}{:<32}",
                format!("kmeans iteration {}", iterations),
                format!("{} centroids, {} pruned", layer.kmeans().len(), pruned)
            );
            if layer.kmeans().is_empty() || drift == Some(0.) {
                termination = Termination::Converged;
                break;
            }
        }
        let assignment = layer.assign();
        let rms = layer.rms(&assignment);
        let fit = Fit {
            centroids: layer.into_kmeans(),
            assignment,
            removed,
            floor: self.config.floor(),
            iterations,
            termination,
            rms,
        };
        log::debug!("{:<32}{:<32}", "kmeans finished", fit);
        fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::collections::BTreeSet;

    fn square() -> Dataset {
        Dataset::try_from(vec![
            vec![0., 0.],
            vec![0., 1.],
            vec![10., 10.],
            vec![10., 11.],
        ])
        .unwrap()
    }

    fn groups(fit: &Fit) -> BTreeSet<Vec<usize>> {
        fit.assignment()
            .iter()
            .map(|(_, members)| members.to_vec())
            .collect()
    }

    /// Whether sampled centroids straddle both halves of `square()`.
    fn straddles(kmeans: &[Point]) -> bool {
        kmeans
            .iter()
            .map(|c| c.coordinates()[0] > 5.)
            .collect::<BTreeSet<_>>()
            .len()
            == 2
    }

    #[test]
    fn initialize_samples_dataset_points() {
        let data = square();
        let mut engine = Engine::seeded(Config::new(7, 0, 10).unwrap(), 0);
        let kmeans = engine.initialize(&data);
        assert_eq!(kmeans.len(), 7);
        assert!(kmeans.iter().all(|c| data.points().contains(c)));
    }

    #[test]
    fn same_seed_same_fit() {
        let data = square();
        let config = Config::new(2, 0, 10).unwrap();
        let a = Engine::seeded(config, 42).fit(&data);
        let b = Engine::seeded(config, 42).fit(&data);
        assert_eq!(a, b);
    }

    #[test]
    fn separated_pairs_converge() {
        let data = square();
        let config = Config::new(2, 0, 10).unwrap();
        let mut twos = 0;
        for seed in 0..64 {
            let fit = Engine::seeded(config, seed).fit(&data);
            assert!(fit.converged());
            assert!(fit.iterations() < 10);
            assert_eq!(fit.removed(), 0);
            if fit.centroids().len() == 2 {
                twos += 1;
                let expected = [vec![0, 1], vec![2, 3]].into_iter().collect::<BTreeSet<_>>();
                assert_eq!(groups(&fit), expected);
                assert!(fit.centroids().contains(&Point::from(vec![0., 0.5])));
                assert!(fit.centroids().contains(&Point::from(vec![10., 10.5])));
            }
        }
        assert!(twos > 0);
    }

    #[test]
    fn refine_from_chosen_centroids() {
        let data = square();
        let engine = Engine::seeded(Config::new(2, 0, 10).unwrap(), 0);
        let fit = engine.refine(&data, vec![data.point(0).clone(), data.point(1).clone()]);
        assert!(fit.converged());
        assert_eq!(
            fit.centroids(),
            &[Point::from(vec![0., 0.5]), Point::from(vec![10., 10.5])]
        );
        assert_eq!(fit.assignment().members(0), Some(&[0, 1][..]));
        assert_eq!(fit.assignment().members(1), Some(&[2, 3][..]));
        assert_eq!(fit.rms(), 0.5);
    }

    #[test]
    fn undersized_pairs_are_all_pruned() {
        let data = square();
        let config = Config::new(2, 3, 10).unwrap();
        let mut checked = 0;
        for seed in 0..64 {
            let kmeans = Engine::seeded(config, seed).initialize(&data);
            if !straddles(&kmeans) {
                continue;
            }
            checked += 1;
            let fit = Engine::seeded(config, seed).fit(&data);
            assert_eq!(fit.removed(), 2);
            assert!(fit.assignment().is_empty());
            assert!(fit.centroids().is_empty());
            assert!(fit.converged());
            assert_eq!(fit.iterations(), 1);
            assert_eq!(fit.rms(), 0.);
        }
        assert!(checked > 0);
    }

    #[test]
    fn iteration_limit_is_not_an_error() {
        let data = square();
        let engine = Engine::seeded(Config::new(2, 0, 1).unwrap(), 0);
        let fit = engine.refine(&data, vec![data.point(0).clone(), data.point(1).clone()]);
        assert_eq!(fit.termination(), Termination::IterationLimitReached);
        assert_eq!(fit.iterations(), 1);
        assert_eq!(fit.assignment().population(), 4);
    }

    #[test]
    fn refits_start_from_zero_removed() {
        let data = square();
        let config = Config::new(2, 3, 10).unwrap();
        let mut engine = Engine::seeded(config, 7);
        let first = engine.refine(&data, vec![data.point(0).clone(), data.point(2).clone()]);
        assert_eq!(first.removed(), 2);
        let second = engine.refine(&data, vec![data.point(0).clone(), data.point(0).clone()]);
        assert_eq!(second.removed(), 0);
        assert_eq!(second.assignment().population(), 4);
        let third = engine.fit(&data);
        assert!(third.removed() <= 2);
    }

    #[test]
    fn removed_accumulates_across_iterations() {
        let data = Dataset::try_from(vec![
            vec![0.],
            vec![6.],
            vec![7.],
            vec![9.],
            vec![9.],
            vec![10.],
        ])
        .unwrap();
        let engine = Engine::seeded(Config::new(3, 2, 10).unwrap(), 0);
        let kmeans = vec![data.point(1).clone(), data.point(2).clone(), data.point(5).clone()];
        // [7] is pruned on pass 1, [0] on pass 3
        let fit = engine.refine(&data, kmeans);
        assert!(fit.converged());
        assert_eq!(fit.removed(), 2);
        assert_eq!(fit.iterations(), 5);
        assert_eq!(fit.centroids().len(), 1);
        assert_eq!(fit.assignment().members(0), Some(&[0, 1, 2, 3, 4, 5][..]));
    }

    #[test]
    fn recompute_tolerates_empty_member_lists() {
        let data = square();
        let empty = BTreeMap::<usize, Vec<usize>>::from([(0, vec![])]);
        let assignment = Assignment::from(empty);
        let (kmeans, removed) = Engine::recompute(&assignment, &data, 0);
        assert_eq!(removed, 0);
        assert!(kmeans.is_empty());
    }

    #[test]
    fn static_assign_and_recompute() {
        let data = square();
        let centroids = [Point::from(vec![0., 0.]), Point::from(vec![10., 10.])];
        let assignment = Engine::assign(&data, &centroids);
        assert_eq!(assignment, Engine::assign(&data, &centroids));
        let (kmeans, removed) = Engine::recompute(&assignment, &data, 0);
        assert_eq!(removed, 0);
        assert_eq!(kmeans.len(), 2);
        let (kmeans, removed) = Engine::recompute(&assignment, &data, 3);
        assert_eq!(removed, 2);
        assert!(kmeans.is_empty());
        assert!(Engine::assign(&data, &kmeans).is_empty());
    }
}
