//! Duplicate detection and removal

use crate::error::Result;
use crate::types::{DedupReport, FileFailure};
use crate::walk;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tunetidy_core::{DedupKey, TrackProbe};

/// Removal function a deduplicator routes deletions through
type RemoveFn = fn(&Path) -> io::Result<()>;

/// One-pass duplicate remover over a directory tree
///
/// Two files are duplicates when their extracted (size, duration, title,
/// artist) keys are equal; year and path are deliberately excluded. The
/// first file encountered in traversal order survives, later occurrences
/// are deleted. The key map lives only for the duration of one call.
pub struct Deduplicator<P> {
    probe: P,
    remove: RemoveFn,
}

impl<P: TrackProbe> Deduplicator<P> {
    /// Create a deduplicator over the given probe backend
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            remove: delete_file,
        }
    }

    #[cfg(test)]
    fn with_remove_fn(probe: P, remove: RemoveFn) -> Self {
        Self { probe, remove }
    }

    /// Delete later occurrences of every already-seen dedup key under `root`
    ///
    /// Files the probe cannot extract (non-audio, unreadable) are left
    /// untouched and counted as skipped. Deletion failures are recorded and
    /// the file stays in place; nothing short of an invalid root aborts the
    /// walk. Running twice over an unchanged tree is a no-op the second
    /// time.
    pub fn deduplicate(&self, root: &Path) -> Result<DedupReport> {
        walk::validate_root(root)?;

        let mut seen: HashMap<DedupKey, PathBuf> = HashMap::new();
        let mut report = DedupReport::default();

        for path in walk::audio_candidates(root) {
            let Some(attributes) = self.probe.extract(&path) else {
                report.skipped += 1;
                continue;
            };

            let key = attributes.dedup_key();
            if let Some(survivor) = seen.get(&key) {
                tracing::debug!(
                    "Duplicate of {}: deleting {}",
                    survivor.display(),
                    path.display()
                );
                match (self.remove)(&path) {
                    Ok(()) => report.deleted.push(path),
                    Err(e) => {
                        tracing::warn!("Could not delete {}: {}", path.display(), e);
                        report.failures.push(FileFailure::new(path, e));
                    }
                }
            } else {
                seen.insert(key, path.clone());
                report.survivors.push(path);
            }
        }

        tracing::debug!(
            "Dedup pass over {}: {} survivors, {} deleted, {} skipped, {} failures",
            root.display(),
            report.survivors.len(),
            report.deleted.len(),
            report.skipped,
            report.failures.len()
        );

        Ok(report)
    }
}

fn delete_file(path: &Path) -> io::Result<()> {
    make_writable(path);
    fs::remove_file(path)
}

/// Clear the read-only attribute so a delete cannot fail on permission bits
/// alone; a no-op where the file is already writable or unreadable
fn make_writable(path: &Path) {
    match fs::metadata(path) {
        Ok(meta) => {
            let mut permissions = meta.permissions();
            if permissions.readonly() {
                permissions.set_readonly(false);
                if let Err(e) = fs::set_permissions(path, permissions) {
                    tracing::warn!("Could not make {} writable: {}", path.display(), e);
                }
            }
        }
        Err(e) => tracing::warn!("Could not stat {}: {}", path.display(), e),
    }
}
