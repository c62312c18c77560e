use std::collections::BTreeMap;

/// Destination for the membership lists produced by a fit.
///
/// The engine never touches storage itself; callers decide where results
/// go by handing a sink to [`Fit::emit`](crate::Fit::emit).
pub trait Sink {
    type Error;
    /// Records the members of one surviving cluster.
    fn write(&mut self, cluster: usize, members: &[usize]) -> Result<(), Self::Error>;
    /// Records that `removed` clusters fell below `floor` members.
    /// Only called when at least one cluster was removed.
    fn note(&mut self, removed: usize, floor: usize) -> Result<(), Self::Error>;
}

/// In-memory sink, useful for inspection and testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    pub clusters: BTreeMap<usize, Vec<usize>>,
    pub notes: Vec<(usize, usize)>,
}

impl Sink for Memory {
    type Error = std::convert::Infallible;
    fn write(&mut self, cluster: usize, members: &[usize]) -> Result<(), Self::Error> {
        self.clusters
            .entry(cluster)
            .or_default()
            .extend_from_slice(members);
        Ok(())
    }
    fn note(&mut self, removed: usize, floor: usize) -> Result<(), Self::Error> {
        self.notes.push((removed, floor));
        Ok(())
    }
}
