//! Lloyd's k-means with minimum-population cluster pruning.
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`common`] — scalar aliases, tunables, logging
//! - [`clustering`] — the engine, its data model, and the [`clustering::Sink`] seam
//! - [`trials`] — table reader, directory sink, and the randomized trials driver
pub use pkm_clustering as clustering;
pub use pkm_core as common;
pub use pkm_trials as trials;
