//! Lloyd's k-means clustering with minimum-population pruning.
//!
//! Partitions a dataset of fixed-length feature vectors into at most `k`
//! groups. After every recomputation, clusters with fewer members than a
//! configured floor are dropped outright; their members simply go to
//! whichever surviving centroid is nearest on the next pass. A floor of
//! zero reproduces textbook k-means.
//!
//! ## Core Types
//!
//! - [`Dataset`] — Validated, rectangular, finite observations
//! - [`Point`] — A feature vector or centroid
//! - [`Assignment`] — Centroid position → member indices
//! - [`Fit`] — Final centroids, membership, and removal count
//!
//! ## Algorithms
//!
//! - [`Lloyd`] — Assign / recompute / prune / drift as trait defaults
//! - [`Engine`] — Seeded initialization and the convergence loop
//! - [`Absorb`] — Incremental centroid means
//!
//! ## Output
//!
//! - [`Sink`] — Where membership lists go, decided by the caller
mod absorb;
mod assignment;
mod config;
mod dataset;
mod engine;
mod error;
mod fit;
mod layer;
mod lloyd;
mod point;
mod sink;

pub use absorb::*;
pub use assignment::*;
pub use config::*;
pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use fit::*;
pub use layer::*;
pub use lloyd::*;
pub use point::*;
pub use sink::*;
pub use tests::*;
