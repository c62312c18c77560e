use super::*;
use pkm_core::Energy;

/// How a fit's refinement loop stopped. Neither outcome is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Two consecutive centroid lists were identical, or none survived.
    Converged,
    /// The iteration budget ran out first.
    IterationLimitReached,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::IterationLimitReached => write!(f, "iteration limit reached"),
        }
    }
}

/// Outcome of one [`Engine::fit`](crate::Engine::fit).
///
/// The assignment always reflects the final centroid positions: it comes
/// from a trailing assignment pass run after the loop stops. Keys index
/// into [`Fit::centroids`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub(crate) centroids: Vec<Point>,
    pub(crate) assignment: Assignment,
    pub(crate) removed: usize,
    pub(crate) floor: usize,
    pub(crate) iterations: usize,
    pub(crate) termination: Termination,
    pub(crate) rms: Energy,
}

impl Fit {
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
    /// Clusters pruned over the whole fit.
    pub fn removed(&self) -> usize {
        self.removed
    }
    /// Pruning floor the fit ran with.
    pub fn floor(&self) -> usize {
        self.floor
    }
    /// Refinement passes executed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn termination(&self) -> Termination {
        self.termination
    }
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
    /// Root-mean-square distance of assigned observations to their centroid.
    pub fn rms(&self) -> Energy {
        self.rms
    }

    /// Writes every surviving cluster to `sink`, then a removal note if
    /// anything was pruned. Stops at the first sink error.
    pub fn emit<S: Sink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for (j, members) in self.assignment.iter() {
            sink.write(j, members)?;
        }
        if self.removed > 0 {
            sink.note(self.removed, self.floor)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Fit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} clusters, {} removed, {} after {} iterations, rms {:.4}",
            self.assignment.len(),
            self.removed,
            self.termination,
            self.iterations,
            self.rms
        )
    }
}
