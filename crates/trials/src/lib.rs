//! Randomized k-means trials over tab-delimited measurement tables.
//!
//! Reads a table, runs several fits with randomly drawn centroid counts,
//! and writes each fit's membership lists beneath `cluster_number_<k>/`.
//!
//! - [`Table`] — Header-skipping TSV reader with sample names
//! - [`Directory`] — Filesystem [`Sink`](pkm_clustering::Sink) for one trial
//! - [`Trials`] — The repetition loop
//! - [`Cli`] — Argument parsing for the `trials` binary
mod cli;
mod directory;
mod table;
mod trials;

pub use cli::*;
pub use directory::*;
pub use table::*;
pub use trials::*;
