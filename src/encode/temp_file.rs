use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{RtxError, RtxResult};
use crate::render::frame::{Frame, PixelLayout};

/// Suffix appended to the configured output path.
pub const TEMP_SUFFIX: &str = ".temp.png";

/// Sink that keeps only the latest frame, as a PNG at a fixed path.
///
/// Meant for hosts that cannot keep a video encoder open and instead poll one image file.
/// Every pushed frame overwrites the previous one.
#[derive(Debug)]
pub struct TempFileSink {
    path: PathBuf,
    cfg: Option<SinkConfig>,
    written: u64,
}

impl TempFileSink {
    /// Write to exactly `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cfg: None,
            written: 0,
        }
    }

    /// Write to `<base>.temp.png`.
    pub fn for_base_path(base: &str) -> Self {
        Self::new(super::with_suffix(base, TEMP_SUFFIX))
    }

    /// Output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output file path as UTF-16 code units, for hosts with wide-character file APIs.
    pub fn wide_path(&self) -> Vec<u16> {
        self.path.to_string_lossy().encode_utf16().collect()
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for TempFileSink {
    fn begin(&mut self, cfg: SinkConfig) -> RtxResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(RtxError::validation(
                "temp file sink width/height must be non-zero",
            ));
        }
        ensure_parent_dir(&self.path)?;
        self.cfg = Some(cfg);
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, _idx: u64, frame: &Frame) -> RtxResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| RtxError::encode("temp file sink not started"))?;
        if !frame.has_size(cfg.width, cfg.height) {
            return Err(RtxError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let color = match frame.layout {
            PixelLayout::Rgb8 => image::ColorType::Rgb8,
            PixelLayout::Gray8 => image::ColorType::L8,
        };
        image::save_buffer_with_format(
            &self.path,
            &frame.data,
            frame.width,
            frame.height,
            color,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", self.path.display()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> RtxResult<()> {
        self.cfg = None;
        Ok(())
    }

    fn target(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/temp_file.rs"]
mod tests;
