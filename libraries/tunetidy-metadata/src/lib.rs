//! Tunetidy Metadata
//!
//! Content classification, attribute extraction and container repair for the
//! tunetidy maintenance pipeline.
//!
//! This crate provides:
//! - Content-based MP3 detection (magic bytes, not file extensions)
//! - Tag and duration extraction via lofty
//! - Lossless container rebuild of unreadable files through ffmpeg
//!
//! The [`TrackExtractor`] ties the three together as the default
//! [`tunetidy_core::TrackProbe`] backend: a file whose tags cannot be parsed
//! is handed to the [`RepairEngine`] targeting a `_fixed` sibling, and the
//! extraction reports unavailability instead of failing the caller.

#![forbid(unsafe_code)]

mod classifier;
mod error;
mod extractor;
mod repair;

pub use classifier::{is_mpeg_audio, MPEG_AUDIO_MIME};
pub use error::{MetadataError, Result};
pub use extractor::{repaired_sibling, TrackExtractor};
pub use repair::RepairEngine;
