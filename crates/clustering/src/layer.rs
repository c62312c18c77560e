//! Mutable state of a single fit.

use super::*;

/// Borrowed dataset plus the centroids currently being refined.
///
/// A layer lives for exactly one fit. It owns its centroid list and
/// borrows the dataset read-only, so concurrent fits over the same
/// dataset never share mutable state.
pub struct Layer<'a> {
    /// Observations, indexed by dataset position
    points: &'a Dataset,
    /// Centroids surviving the last recomputation
    kmeans: Vec<Point>,
    /// Minimum cluster population
    floor: usize,
}

impl<'a> Layer<'a> {
    pub fn new(points: &'a Dataset, kmeans: Vec<Point>, floor: usize) -> Self {
        debug_assert!(kmeans.iter().all(|c| c.dimension() == points.dimension()));
        Self {
            points,
            kmeans,
            floor,
        }
    }
    /// Replaces the centroid list after a recomputation.
    pub fn shift(&mut self, kmeans: Vec<Point>) {
        self.kmeans = kmeans;
    }
    /// Hands back the centroid list.
    pub fn into_kmeans(self) -> Vec<Point> {
        self.kmeans
    }
}

impl Lloyd for Layer<'_> {
    fn points(&self) -> &[Point] {
        self.points.points()
    }
    fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
    fn floor(&self) -> usize {
        self.floor
    }
}
