//! Content-based file classification
//!
//! Detection works from the file's leading bytes, so extensionless or
//! mislabeled files are judged by what they actually contain.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// MIME type of the single supported container
pub const MPEG_AUDIO_MIME: &str = "audio/mpeg";

/// Leading bytes read for magic-number detection
const SNIFF_LEN: usize = 64;

/// Check whether the file content is MPEG audio
///
/// Fails closed: any open, read or detection error logs a warning and
/// returns `false`, never an error to the caller.
pub fn is_mpeg_audio(path: &Path) -> bool {
    match sniff_mime(path) {
        Ok(Some(mime)) => mime == MPEG_AUDIO_MIME,
        Ok(None) => false,
        Err(e) => {
            tracing::warn!("Could not classify {}: {}", path.display(), e);
            false
        }
    }
}

/// Detect the MIME type from a bounded prefix of the file
fn sniff_mime(path: &Path) -> io::Result<Option<&'static str>> {
    let mut file = File::open(path)?;
    let mut buffer = [0u8; SNIFF_LEN];
    let bytes_read = file.read(&mut buffer)?;
    Ok(infer::get(&buffer[..bytes_read]).map(|kind| kind.mime_type()))
}
