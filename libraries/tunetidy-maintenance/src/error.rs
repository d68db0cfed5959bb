//! Error types for the maintenance passes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `MaintenanceError`
pub type Result<T> = std::result::Result<T, MaintenanceError>;

/// Errors that abort a whole pass
///
/// Per-file trouble inside a pass (delete, move or prune failures) is
/// recorded as a [`crate::FileFailure`] in the pass report instead; only an
/// unusable root path is unrecoverable.
#[derive(Debug, Error)]
pub enum MaintenanceError {
    /// Root path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
