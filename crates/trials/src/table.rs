use anyhow::Context;
use pkm_clustering::ClusterError;
use pkm_clustering::Dataset;
use pkm_core::Coordinate;
use std::path::Path;
use std::str::FromStr;

/// Leading label columns on every row; measurements follow.
const LABELS: usize = 2;

/// A tab-delimited measurement table.
///
/// The first line is a header and is skipped. Every other non-blank line
/// holds two label columns followed by numeric measurements. The second
/// label names the sample and is what gets written to output files.
#[derive(Debug, Clone)]
pub struct Table {
    names: Vec<String>,
    dataset: Dataset,
}

impl Table {
    /// Reads and parses a table from disk.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let table = text
            .parse::<Self>()
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!(
            "{:<32}{:<32}",
            "loaded table",
            format!("{} rows x {} columns", table.len(), table.dataset.dimension())
        );
        Ok(table)
    }
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
    /// Sample name of row `i`.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromStr for Table {
    type Err = ClusterError;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut names = Vec::new();
        let mut rows = Vec::new();
        for (n, line) in text.lines().enumerate().skip(1) {
            let line = line.trim_matches(|c: char| c == '\t' || c == '\r' || c == '\n');
            if line.trim().is_empty() {
                continue;
            }
            let cells = line.split('\t').collect::<Vec<&str>>();
            if cells.len() <= LABELS {
                return Err(ClusterError::InvalidDataset(format!(
                    "line {} has no measurements",
                    n + 1
                )));
            }
            let row = cells[LABELS..]
                .iter()
                .enumerate()
                .map(|(j, cell)| {
                    cell.trim().parse::<Coordinate>().map_err(|_| {
                        ClusterError::InvalidDataset(format!(
                            "line {} column {} is not a number: {:?}",
                            n + 1,
                            j + LABELS + 1,
                            cell
                        ))
                    })
                })
                .collect::<Result<Vec<Coordinate>, ClusterError>>()?;
            names.push(cells[1].to_string());
            rows.push(row);
        }
        let dataset = Dataset::try_from(rows)?;
        Ok(Self { names, dataset })
    }
}
