/// Metadata-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Not the supported audio container
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// External repair tool failed or could not be invoked
    #[error("Repair failed for {path}: {reason}")]
    RepairFailed {
        /// File the rebuild was attempted on
        path: PathBuf,
        /// Tool stderr or spawn error
        reason: String,
    },

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}
