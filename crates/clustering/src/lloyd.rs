use super::*;
use pkm_core::Energy;

/// Lloyd's k-means with minimum-population pruning.
///
/// Implementors supply the dataset, the current centroids, and the pruning
/// floor. The default methods carry the algorithm itself:
///
/// - `neighbor()` — nearest centroid for one observation, O(K)
/// - `assign()` — nearest centroid for every observation, O(N × K)
/// - `recompute()` — mean of each surviving cluster, dropping small ones
/// - `drift()` — total squared movement between two centroid lists
/// - `rms()` — root-mean-square distance of assigned points to their centroid
pub trait Lloyd {
    /// Returns the observations to cluster.
    fn points(&self) -> &[Point];
    /// Returns current centroid positions.
    fn kmeans(&self) -> &[Point];
    /// Minimum population a cluster needs to survive recomputation.
    fn floor(&self) -> usize;

    /// Gets observation by index.
    fn point(&self, i: usize) -> &Point {
        &self.points()[i]
    }
    /// Gets centroid by index.
    fn kmean(&self, j: usize) -> &Point {
        &self.kmeans()[j]
    }
    /// Comparison distance. Squared L2 has the same arg-min as L2.
    fn distance(&self, a: &Point, b: &Point) -> Energy {
        a.squared(b)
    }

    /// Finds the nearest centroid to observation `i`.
    ///
    /// Only a strictly smaller distance displaces the current best, so the
    /// lowest-indexed centroid wins ties. `None` when no centroids remain.
    fn neighbor(&self, i: usize) -> Option<(usize, Energy)> {
        let x = self.point(i);
        self.kmeans()
            .iter()
            .enumerate()
            .map(|(j, c)| (j, self.distance(c, x)))
            .inspect(|(_, d)| debug_assert!(d.is_finite()))
            .fold(None, |best, (j, d)| match best {
                Some((_, b)) if b <= d => best,
                _ => Some((j, d)),
            })
    }

    /// Assigns every observation to its nearest centroid.
    fn assign(&self) -> Assignment {
        (0..self.points().len())
            .filter_map(|i| self.neighbor(i).map(|(j, _)| (j, i)))
            .collect::<Assignment>()
    }

    /// Computes the next centroid list from an assignment.
    ///
    /// Clusters below the floor are counted and dropped; the rest are
    /// replaced by the mean of their members, in ascending cluster order.
    /// Empty member lists are not clusters and are skipped uncounted.
    /// Returns the surviving centroids and the number of clusters dropped.
    fn recompute(&self, assignment: &Assignment) -> (Vec<Point>, usize) {
        let mut pruned = 0;
        let mut kmeans = Vec::with_capacity(assignment.len());
        for (j, members) in assignment.iter() {
            let Some(&first) = members.first() else {
                continue;
            };
            if members.len() < self.floor() {
                log::trace!("{:<32}{:<32}", "pruning cluster", j);
                pruned += 1;
            } else {
                let dimension = self.point(first).dimension();
                let mean = members
                    .iter()
                    .map(|&i| self.point(i))
                    .fold(Mean::empty(dimension), Mean::absorb);
                kmeans.push(Point::from(mean));
            }
        }
        (kmeans, pruned)
    }

    /// Sum of squared coordinate differences between current and `news`,
    /// position by position. `None` when the centroid count changed.
    fn drift(&self, news: &[Point]) -> Option<Energy> {
        if news.len() != self.kmeans().len() {
            return None;
        }
        Some(
            news.iter()
                .zip(self.kmeans())
                .map(|(new, old)| new.squared(old))
                .sum::<Energy>(),
        )
    }

    /// Root-mean-square distance from each assigned observation to its
    /// centroid. Zero when nothing is assigned.
    fn rms(&self, assignment: &Assignment) -> Energy {
        let n = assignment.population();
        if n == 0 {
            return 0.;
        }
        let total = assignment
            .iter()
            .flat_map(|(j, members)| members.iter().map(move |&i| (j, i)))
            .map(|(j, i)| self.point(i).squared(self.kmean(j)))
            .sum::<Energy>();
        (total / n as Energy).sqrt()
    }
}
