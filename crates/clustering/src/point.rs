use pkm_core::Coordinate;
use pkm_core::Energy;

/// A fixed-length feature vector: one observation, or one centroid.
///
/// Points carry no identity of their own. Observations are identified by
/// their index in a [`Dataset`](crate::Dataset), centroids by their position
/// in the current centroid list.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(Vec<Coordinate>);

impl Point {
    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }
    /// Squared Euclidean distance. Preserves the arg-min of [`Point::distance`]
    /// without the square root, so assignment compares these directly.
    pub fn squared(&self, other: &Self) -> Energy {
        debug_assert_eq!(self.dimension(), other.dimension());
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(x, y)| x - y)
            .map(|d| d * d)
            .sum::<Energy>()
    }
    /// Euclidean (L2) distance.
    pub fn distance(&self, other: &Self) -> Energy {
        self.squared(other).sqrt()
    }
}

impl From<Vec<Coordinate>> for Point {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }
}
impl From<Point> for Vec<Coordinate> {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", x)?;
        }
        write!(f, "]")
    }
}
