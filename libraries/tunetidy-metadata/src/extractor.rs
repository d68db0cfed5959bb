//! Attribute extraction from audio files

use crate::classifier;
use crate::error::{MetadataError, Result};
use crate::repair::RepairEngine;
use lofty::{Accessor, AudioFile, TaggedFileExt};
use std::fs;
use std::path::{Path, PathBuf};
use tunetidy_core::{AudioAttributes, TrackProbe, UNKNOWN};

/// Default [`TrackProbe`] backend: lofty tag reading over content-classified
/// files, with ffmpeg recovery for unreadable containers
///
/// A parse failure (distinct from a merely absent tag) never fails the
/// caller: the file is handed to the repair engine targeting a `_fixed`
/// sibling and the extraction reports `None`. The caller re-scans later if
/// it wants the repaired file's attributes.
#[derive(Debug, Clone, Default)]
pub struct TrackExtractor {
    repair: RepairEngine,
}

impl TrackExtractor {
    /// Create an extractor with the default repair engine (`ffmpeg` on PATH)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor using a specific repair engine
    pub fn with_repair(repair: RepairEngine) -> Self {
        Self { repair }
    }

    /// Read the attributes of a file, failing loudly
    ///
    /// Unlike [`TrackProbe::extract`] this surfaces what went wrong instead
    /// of absorbing it, and attempts no recovery. Missing individual tags
    /// still default to `"Unknown"` rather than failing the read.
    pub fn read(&self, path: &Path) -> Result<AudioAttributes> {
        if !path.exists() {
            return Err(MetadataError::FileNotFound(path.display().to_string()));
        }

        if !self.is_audio_file(path) {
            return Err(MetadataError::UnsupportedFormat(path.display().to_string()));
        }

        let size = fs::metadata(path)?.len();
        let tagged_file = lofty::read_from_path(path)?;

        let duration_secs = tagged_file.properties().duration().as_secs() as u32;

        // Prefer the primary tag (ID3v2 for MP3), fall back to whatever is present
        let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

        let title = tag
            .and_then(|t| t.title().map(|s| s.to_string()))
            .unwrap_or_else(|| UNKNOWN.to_string());
        let artist = tag
            .and_then(|t| t.artist().map(|s| s.to_string()))
            .unwrap_or_else(|| UNKNOWN.to_string());
        let year = tag
            .and_then(|t| t.year().map(|y| y.to_string()))
            .unwrap_or_else(|| UNKNOWN.to_string());

        Ok(AudioAttributes {
            size,
            duration_secs,
            title,
            artist,
            year,
        })
    }
}

impl TrackProbe for TrackExtractor {
    fn is_audio_file(&self, path: &Path) -> bool {
        classifier::is_mpeg_audio(path)
    }

    fn extract(&self, path: &Path) -> Option<AudioAttributes> {
        match self.read(path) {
            Ok(attributes) => Some(attributes),
            Err(MetadataError::UnsupportedFormat(_)) => {
                tracing::debug!("Skipping non-MPEG file: {}", path.display());
                None
            }
            Err(MetadataError::Lofty(e)) => {
                tracing::warn!("Unreadable metadata in {}: {}", path.display(), e);
                let fixed = repaired_sibling(path);
                if let Err(repair_err) = self.repair.repair(path, Some(&fixed)) {
                    tracing::warn!("{}", repair_err);
                }
                None
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Sibling path a repaired copy is written to: `name.mp3` -> `name_fixed.mp3`
pub fn repaired_sibling(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("repaired");

    let file_name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_fixed.{}", stem, ext),
        None => format!("{}_fixed", stem),
    };

    path.with_file_name(file_name)
}
