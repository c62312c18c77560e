use crate::Table;
use anyhow::Context;
use pkm_clustering::Sink;
use pkm_core::OUTPUT_CLUSTER_PREFIX;
use pkm_core::OUTPUT_DIRECTORY_PREFIX;
use pkm_core::OUTPUT_REMOVED_NOTE;
use std::io::Write;
use std::path::PathBuf;

/// Filesystem sink for one trial.
///
/// Layout under `root`, for a trial run with `k` centroids:
///
/// ```text
/// cluster_number_<k>/cluster<j>.txt        one sample name per line
/// cluster_number_<k>/removed_cluster(s).txt  only if clusters were pruned
/// ```
///
/// Files are appended to, never truncated, so trials that draw the same
/// `k` accumulate into the same directory.
pub struct Directory<'a> {
    root: PathBuf,
    table: &'a Table,
    k: usize,
}

impl<'a> Directory<'a> {
    pub fn new(root: impl Into<PathBuf>, table: &'a Table, k: usize) -> Self {
        Self {
            root: root.into(),
            table,
            k,
        }
    }
    /// Directory holding this trial's files.
    pub fn folder(&self) -> PathBuf {
        self.root.join(format!("{}{}", OUTPUT_DIRECTORY_PREFIX, self.k))
    }
    fn append(&self, file: &str, text: &str) -> anyhow::Result<()> {
        let folder = self.folder();
        std::fs::create_dir_all(&folder)
            .with_context(|| format!("creating {}", folder.display()))?;
        let path = folder.join(file);
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut f| f.write_all(text.as_bytes()))
            .with_context(|| format!("appending to {}", path.display()))
    }
}

impl Sink for Directory<'_> {
    type Error = anyhow::Error;
    fn write(&mut self, cluster: usize, members: &[usize]) -> Result<(), Self::Error> {
        let text = members
            .iter()
            .map(|&i| format!("{}\n", self.table.name(i)))
            .collect::<String>();
        self.append(&format!("{}{}.txt", OUTPUT_CLUSTER_PREFIX, cluster), &text)
    }
    fn note(&mut self, removed: usize, floor: usize) -> Result<(), Self::Error> {
        self.append(
            OUTPUT_REMOVED_NOTE,
            &format!(
                "Removed {} cluster(s) as there were less than {} elements.\n",
                removed, floor
            ),
        )
    }
}
