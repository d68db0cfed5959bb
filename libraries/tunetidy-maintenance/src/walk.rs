//! Shared traversal helpers

use crate::error::{MaintenanceError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension carried by files of the supported container
pub(crate) const SUPPORTED_EXTENSION: &str = "mp3";

/// Fail fast when a caller-supplied root is unusable
pub(crate) fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(MaintenanceError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(MaintenanceError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Whether the file name carries the supported extension
pub(crate) fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SUPPORTED_EXTENSION))
        .unwrap_or(false)
}

/// Enumerate candidate files under `root`, in traversal order
///
/// Unreadable entries are logged and skipped; the walk continues.
pub(crate) fn audio_candidates(root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file() && has_supported_extension(path) {
                    candidates.push(path.to_path_buf());
                }
            }
            Err(e) => {
                tracing::warn!("Error accessing entry under {}: {}", root.display(), e);
            }
        }
    }

    candidates
}
