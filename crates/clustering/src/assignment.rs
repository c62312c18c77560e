use std::collections::BTreeMap;

/// Mapping from centroid position to the dataset indices nearest to it.
///
/// Rebuilt from scratch on every assignment pass. Only centroids that
/// attracted at least one member appear as keys, so every member list is
/// non-empty. Keys iterate in ascending order and member lists preserve
/// dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(BTreeMap<usize, Vec<usize>>);

impl Assignment {
    /// Appends dataset index `i` to cluster `j`, creating the cluster on first use.
    pub fn insert(&mut self, j: usize, i: usize) {
        self.0.entry(j).or_default().push(i);
    }
    /// Members of cluster `j`, if it attracted any.
    pub fn members(&self, j: usize) -> Option<&[usize]> {
        self.0.get(&j).map(Vec::as_slice)
    }
    /// Number of non-empty clusters.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Total number of assigned dataset indices.
    pub fn population(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.0.iter().map(|(j, members)| (*j, members.as_slice()))
    }
    /// Cluster label per dataset index, `None` where no centroid claimed it.
    pub fn labels(&self, n: usize) -> Vec<Option<usize>> {
        let mut labels = vec![None; n];
        for (j, members) in self.iter() {
            for &i in members {
                labels[i] = Some(j);
            }
        }
        labels
    }
}

/// Collects `(cluster, index)` pairs in the order they are produced.
impl FromIterator<(usize, usize)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut assignment = Self::default();
        for (j, i) in iter {
            assignment.insert(j, i);
        }
        assignment
    }
}

impl From<Assignment> for BTreeMap<usize, Vec<usize>> {
    fn from(assignment: Assignment) -> Self {
        assignment.0
    }
}
impl From<BTreeMap<usize, Vec<usize>>> for Assignment {
    fn from(map: BTreeMap<usize, Vec<usize>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_creates_then_appends() {
        let mut assignment = Assignment::default();
        assignment.insert(3, 0);
        assignment.insert(1, 1);
        assignment.insert(3, 2);
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.population(), 3);
        assert_eq!(assignment.members(3), Some(&[0, 2][..]));
        assert_eq!(assignment.members(1), Some(&[1][..]));
        assert_eq!(assignment.members(0), None);
        assert_eq!(
            assignment.iter().map(|(j, _)| j).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn labels_leave_unclaimed_indices_empty() {
        let assignment = [(0, 0), (2, 2)].into_iter().collect::<Assignment>();
        assert_eq!(assignment.labels(4), vec![Some(0), None, Some(2), None]);
    }
}
