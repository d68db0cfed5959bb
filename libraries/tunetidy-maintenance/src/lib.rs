//! Tunetidy Maintenance
//!
//! Full-tree maintenance passes for a music library:
//!
//! - `dedup`: delete later occurrences of an already-seen dedup key
//! - `organize`: move files into year-named folders of a destination root
//! - `prune`: remove directories left empty, bottom-up
//! - `pipeline`: run the three passes over an explicit configuration
//!
//! Every pass is a single synchronous filesystem walk. No single file's
//! failure aborts a pass; per-file outcomes are absorbed into the report the
//! pass returns, and only an invalid root fails the whole operation. Each
//! pass assumes exclusive access to the tree it walks for its duration.

#![forbid(unsafe_code)]

mod dedup;
mod error;
mod organize;
mod pipeline;
mod prune;
mod types;
mod walk;

pub use dedup::Deduplicator;
pub use error::{MaintenanceError, Result};
pub use organize::Organizer;
pub use pipeline::MaintenancePipeline;
pub use prune::prune_empty;
pub use types::{
    DedupReport, FileFailure, MaintenanceConfig, MaintenanceSummary, MovedFile, OrganizeReport,
    PruneReport,
};
