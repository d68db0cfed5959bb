//! Year-based reorganization

use crate::error::Result;
use crate::types::{FileFailure, MovedFile, OrganizeReport};
use crate::walk;
use std::fs;
use std::io;
use std::path::Path;
use tunetidy_core::TrackProbe;

/// Moves files into year-named folders of a destination root
///
/// Each qualifying file lands in `dest/<YYYY>/` when its year tag is a
/// 4-digit string, otherwise in `dest/Unknown Year/`, keeping its original
/// filename. Buckets are created lazily.
pub struct Organizer<P> {
    probe: P,
}

impl<P: TrackProbe> Organizer<P> {
    /// Create an organizer over the given probe backend
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Move every qualifying file under `source` into a year bucket of `dest`
    ///
    /// A destination-name collision is a reported failure: the source file
    /// stays where it is, never silently overwritten and never retried under
    /// a renamed target. Files the probe cannot extract are left untouched
    /// and counted as skipped.
    pub fn reorganize_by_year(&self, source: &Path, dest: &Path) -> Result<OrganizeReport> {
        walk::validate_root(source)?;

        let mut report = OrganizeReport::default();

        for path in walk::audio_candidates(source) {
            let Some(attributes) = self.probe.extract(&path) else {
                report.skipped += 1;
                continue;
            };

            let bucket = dest.join(attributes.year_bucket());
            if let Err(e) = fs::create_dir_all(&bucket) {
                tracing::warn!("Could not create {}: {}", bucket.display(), e);
                report.failures.push(FileFailure::new(path, e));
                continue;
            }

            // Walk yields real files, so a file name is always present
            let Some(file_name) = path.file_name() else {
                continue;
            };
            let target = bucket.join(file_name);

            if target.exists() {
                tracing::warn!(
                    "Destination {} already exists, leaving {} in place",
                    target.display(),
                    path.display()
                );
                let reason = format!("destination exists: {}", target.display());
                report.failures.push(FileFailure::new(path, reason));
                continue;
            }

            tracing::debug!("Moving {} to {}", path.display(), bucket.display());
            match move_file(&path, &target) {
                Ok(()) => report.moved.push(MovedFile {
                    from: path,
                    to: target,
                }),
                Err(e) => {
                    tracing::warn!("Could not move {}: {}", path.display(), e);
                    report.failures.push(FileFailure::new(path, e));
                }
            }
        }

        Ok(report)
    }
}

/// Rename, with a copy-and-remove fallback for cross-device moves
///
/// The file must never end up in two places: when the post-copy removal of
/// the source fails, the fresh copy is taken back out.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(
                "Rename of {} failed ({}), trying copy",
                from.display(),
                rename_err
            );
            fs::copy(from, to)?;
            if let Err(remove_err) = fs::remove_file(from) {
                let _ = fs::remove_file(to);
                return Err(remove_err);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn move_file_renames() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("a.mp3");
        let to = temp.path().join("b.mp3");
        fs::write(&from, b"payload").unwrap();

        move_file(&from, &to).unwrap();
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"payload");
    }

    #[test]
    fn move_file_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("missing.mp3");
        let to = temp.path().join("b.mp3");
        assert!(move_file(&from, &to).is_err());
        assert!(!to.exists());
    }
}
