//! Tunetidy Core
//!
//! Shared types and capability traits for the tunetidy maintenance pipeline.
//!
//! This crate defines:
//! - **Domain Types**: `AudioAttributes`, `DedupKey`
//! - **Core Traits**: `TrackProbe` (file classification + attribute extraction)
//!
//! Attributes are recomputed on demand from the filesystem; nothing here
//! caches state across walks.

#![forbid(unsafe_code)]

pub mod probe;
pub mod types;

pub use probe::TrackProbe;
pub use types::{AudioAttributes, DedupKey, UNKNOWN, UNKNOWN_YEAR_DIR};
