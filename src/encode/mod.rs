//! Frame sinks.
//!
//! Sinks receive frames in order from a [`crate::FrameGenerator`]. The video sink appends
//! to a container; the snapshot sink overwrites a single image file.

/// `ffmpeg`-based video sink.
pub mod ffmpeg;
/// Sink trait and the in-memory sink.
pub mod sink;
/// Single overwritten PNG file sink.
pub mod temp_file;

use std::path::PathBuf;

/// Append `suffix` to an extension-less output path.
pub fn with_suffix(base: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{base}{suffix}"))
}
