use super::*;
use pkm_core::Coordinate;

/// An ordered, validated collection of feature vectors.
///
/// Positions `0..n` are the stable identity of each observation. The only
/// way to obtain a `Dataset` is through [`TryFrom`], which rejects empty
/// input, zero-length vectors, ragged rows, and non-finite coordinates.
/// The engine borrows a dataset immutably, so one dataset can back any
/// number of independent fits.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
    dimension: usize,
}

impl Dataset {
    /// Number of observations. Always positive.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Shared length of every vector.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn point(&self, i: usize) -> &Point {
        &self.points[i]
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl TryFrom<Vec<Point>> for Dataset {
    type Error = ClusterError;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        let dimension = points
            .first()
            .map(Point::dimension)
            .ok_or_else(|| ClusterError::InvalidDataset("no observations".to_string()))?;
        if dimension == 0 {
            return Err(ClusterError::InvalidDataset(
                "observations have no coordinates".to_string(),
            ));
        }
        for (i, point) in points.iter().enumerate() {
            if point.dimension() != dimension {
                return Err(ClusterError::InvalidDataset(format!(
                    "row {} has {} coordinates, expected {}",
                    i,
                    point.dimension(),
                    dimension
                )));
            }
            if let Some(j) = point.coordinates().iter().position(|x| !x.is_finite()) {
                return Err(ClusterError::InvalidDataset(format!(
                    "row {} column {} is not a finite number",
                    i, j
                )));
            }
        }
        Ok(Self { points, dimension })
    }
}

impl TryFrom<Vec<Vec<Coordinate>>> for Dataset {
    type Error = ClusterError;
    fn try_from(rows: Vec<Vec<Coordinate>>) -> Result<Self, Self::Error> {
        Self::try_from(rows.into_iter().map(Point::from).collect::<Vec<_>>())
    }
}
