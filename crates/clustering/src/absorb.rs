use super::*;
use pkm_core::Coordinate;

/// Trait for centroid computation via incremental aggregation.
///
/// The "absorb" pattern lets a centroid be built as a fold over its
/// members without collecting them first:
///
/// ```ignore
/// members.iter().map(|&i| dataset.point(i)).fold(Mean::empty(d), Mean::absorb)
/// ```
pub trait Absorb<P> {
    /// Combines this accumulator with one more sample.
    fn absorb(self, other: &P) -> Self;
}

/// Running coordinate-wise sum and population of absorbed points.
///
/// Converting into a [`Point`] divides by the population, which yields the
/// arithmetic mean. Only non-empty clusters are ever averaged, so the
/// population is positive whenever that conversion happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Mean {
    sum: Vec<Coordinate>,
    n: usize,
}

impl Mean {
    /// Zero sum over `dimension` coordinates.
    pub fn empty(dimension: usize) -> Self {
        Self {
            sum: vec![0.; dimension],
            n: 0,
        }
    }
    /// Number of absorbed points.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Absorb<Point> for Mean {
    fn absorb(mut self, other: &Point) -> Self {
        debug_assert_eq!(self.sum.len(), other.dimension());
        self.sum
            .iter_mut()
            .zip(other.coordinates())
            .for_each(|(s, x)| *s += x);
        self.n += 1;
        self
    }
}

impl From<Mean> for Point {
    fn from(mean: Mean) -> Self {
        debug_assert!(mean.n > 0, "averaging an empty cluster");
        let n = mean.n as Coordinate;
        Point::from(mean.sum.into_iter().map(|s| s / n).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_members() {
        let points = [
            Point::from(vec![0., 0.]),
            Point::from(vec![0., 1.]),
            Point::from(vec![3., 2.]),
        ];
        let mean = points.iter().fold(Mean::empty(2), Mean::absorb);
        assert_eq!(mean.n(), 3);
        assert_eq!(Point::from(mean), Point::from(vec![1., 1.]));
    }

    #[test]
    fn mean_of_one_is_itself() {
        let p = Point::from(vec![2.5, -1., 7.]);
        let mean = Mean::empty(3).absorb(&p);
        assert_eq!(Point::from(mean), p);
    }
}
