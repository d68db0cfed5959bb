//! Capability trait for file classification and attribute extraction

use crate::types::AudioAttributes;
use std::path::Path;

/// Classification and metadata extraction over a single file
///
/// The maintenance engines are generic over this trait, so any backend that
/// can (1) detect the supported container from file content and (2) read tag
/// and duration information from it is substitutable. Both operations absorb
/// their own failures: classification fails closed, extraction reports
/// unavailability as `None` rather than raising.
pub trait TrackProbe {
    /// Whether the file content is the supported audio container
    ///
    /// Decided from actual bytes, not the file name. Any read or detection
    /// error yields `false`.
    fn is_audio_file(&self, path: &Path) -> bool;

    /// Read the attributes of a classified file
    ///
    /// Returns `None` when the file is not the supported container or its
    /// metadata cannot be read. Missing individual tags never fail the whole
    /// extraction.
    fn extract(&self, path: &Path) -> Option<AudioAttributes>;
}

impl<T: TrackProbe + ?Sized> TrackProbe for &T {
    fn is_audio_file(&self, path: &Path) -> bool {
        (**self).is_audio_file(path)
    }

    fn extract(&self, path: &Path) -> Option<AudioAttributes> {
        (**self).extract(path)
    }
}
