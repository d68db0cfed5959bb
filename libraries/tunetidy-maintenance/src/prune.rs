//! Empty-directory pruning

use crate::error::Result;
use crate::types::{FileFailure, PruneReport};
use crate::walk;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Removal function the pass routes directory deletions through
type RemoveDirFn = fn(&Path) -> io::Result<()>;

/// Remove directories left with no files and no subdirectories
///
/// The walk is bottom-up (children visited before their parent), so a parent
/// emptied by removals earlier in the same pass is itself removed. Emptiness
/// is judged at the moment of visitation. The root itself is never removed.
/// Removal failures are recorded and the directory is left in place.
pub fn prune_empty(root: &Path) -> Result<PruneReport> {
    prune_with(root, remove_dir)
}

fn prune_with(root: &Path, remove: RemoveDirFn) -> Result<PruneReport> {
    walk::validate_root(root)?;

    let mut report = PruneReport::default();

    for entry in WalkDir::new(root).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error accessing entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_dir() || entry.path() == root {
            continue;
        }

        let path = entry.path();
        match is_empty_dir(path) {
            Ok(true) => match remove(path) {
                Ok(()) => {
                    tracing::debug!("Removed empty folder {}", path.display());
                    report.removed.push(path.to_path_buf());
                }
                Err(e) => {
                    tracing::warn!("Could not remove {}: {}", path.display(), e);
                    report.failures.push(FileFailure::new(path.to_path_buf(), e));
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                report.failures.push(FileFailure::new(path.to_path_buf(), e));
            }
        }
    }

    Ok(report)
}

fn remove_dir(path: &Path) -> io::Result<()> {
    fs::remove_dir(path)
}

fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
