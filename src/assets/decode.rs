use std::path::Path;

use anyhow::Context;

use crate::foundation::error::RtxResult;
use crate::render::frame::Frame;

/// Decode encoded image bytes into an RGB frame. Alpha is discarded.
pub fn decode_image(bytes: &[u8]) -> RtxResult<Frame> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(Frame::from(dyn_img.to_rgb8()))
}

/// Load the source image at `path` as an RGB frame.
#[tracing::instrument]
pub fn load_source_image(path: &Path) -> RtxResult<Frame> {
    let dyn_img =
        image::open(path).with_context(|| format!("open source image '{}'", path.display()))?;
    let frame = Frame::from(dyn_img.to_rgb8());
    tracing::debug!(width = frame.width, height = frame.height, "loaded source image");
    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
