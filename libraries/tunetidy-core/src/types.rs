//! Domain types for the maintenance pipeline

use serde::{Deserialize, Serialize};

/// Placeholder value for tag fields that are absent or unreadable
pub const UNKNOWN: &str = "Unknown";

/// Destination folder name for files without a usable 4-digit year
pub const UNKNOWN_YEAR_DIR: &str = "Unknown Year";

/// Attributes of a classified audio file
///
/// Computed per walk step from the file on disk; the filesystem is the sole
/// store, so a record is never carried across passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAttributes {
    /// File size in bytes
    pub size: u64,

    /// Stream duration in whole seconds
    pub duration_secs: u32,

    /// Track title, `"Unknown"` when the tag is absent
    pub title: String,

    /// Artist name, `"Unknown"` when the tag is absent
    pub artist: String,

    /// Release year as tagged (expected 4-digit), `"Unknown"` when absent
    pub year: String,
}

impl AudioAttributes {
    /// Key used to identify duplicates
    pub fn dedup_key(&self) -> DedupKey {
        DedupKey {
            size: self.size,
            duration_secs: self.duration_secs,
            title: self.title.clone(),
            artist: self.artist.clone(),
        }
    }

    /// Destination folder name for year-based reorganization
    ///
    /// Exactly four ASCII digits map to that year; anything else maps to
    /// [`UNKNOWN_YEAR_DIR`].
    pub fn year_bucket(&self) -> &str {
        if self.year.len() == 4 && self.year.bytes().all(|b| b.is_ascii_digit()) {
            &self.year
        } else {
            UNKNOWN_YEAR_DIR
        }
    }
}

/// Identity key for duplicate detection
///
/// Deliberately excludes year and path, so files differing only in those
/// fields collapse to one survivor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DedupKey {
    /// File size in bytes
    pub size: u64,

    /// Stream duration in whole seconds
    pub duration_secs: u32,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,
}
