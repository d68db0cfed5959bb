//! Configuration and pass report types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directories a full pipeline run operates on
///
/// Passed explicitly into the pipeline; path discovery (prompts, flags) is
/// the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceConfig {
    /// Tree deduplicated and then drained by reorganization
    pub source_dir: PathBuf,

    /// Root receiving the year-named folders
    pub dest_dir: PathBuf,

    /// Tree swept for empty directories after the moves
    pub cleanup_dir: PathBuf,
}

/// A per-file failure absorbed during a pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// File or directory the operation failed on
    pub path: PathBuf,

    /// Why it failed
    pub reason: String,
}

impl FileFailure {
    pub(crate) fn new(path: PathBuf, reason: impl ToString) -> Self {
        Self {
            path,
            reason: reason.to_string(),
        }
    }
}

/// Outcome of one deduplication pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DedupReport {
    /// First-seen file per dedup key, in traversal order
    pub survivors: Vec<PathBuf>,

    /// Later occurrences that were deleted
    pub deleted: Vec<PathBuf>,

    /// Candidates left untouched because extraction returned nothing
    pub skipped: usize,

    /// Duplicates whose deletion failed; the files remain in place
    pub failures: Vec<FileFailure>,
}

impl DedupReport {
    /// Total files the pass made a decision about
    pub fn processed(&self) -> usize {
        self.survivors.len() + self.deleted.len() + self.skipped + self.failures.len()
    }
}

/// A completed move into a year bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovedFile {
    /// Original location
    pub from: PathBuf,

    /// Location inside the destination year folder
    pub to: PathBuf,
}

/// Outcome of one reorganization pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeReport {
    /// Files moved into year buckets
    pub moved: Vec<MovedFile>,

    /// Candidates left untouched because extraction returned nothing
    pub skipped: usize,

    /// Moves that failed (collision or I/O); the sources remain in place
    pub failures: Vec<FileFailure>,
}

/// Outcome of one pruning pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PruneReport {
    /// Directories removed, children before parents
    pub removed: Vec<PathBuf>,

    /// Directories that were empty but could not be removed
    pub failures: Vec<FileFailure>,
}

/// Aggregated outcome of a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceSummary {
    /// Deduplication over the source tree
    pub dedup: DedupReport,

    /// Reorganization from source into destination
    pub organize: OrganizeReport,

    /// Pruning over the cleanup tree
    pub prune: PruneReport,
}
