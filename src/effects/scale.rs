use image::imageops::{self, FilterType};

use crate::foundation::error::{RtxError, RtxResult};
use crate::render::frame::{Frame, PixelLayout};

/// Resample `src` to `width` x `height` with a triangle filter.
///
/// Frames already at the target size are returned as an identical copy.
pub fn resize(src: &Frame, width: u32, height: u32) -> RtxResult<Frame> {
    if width == 0 || height == 0 {
        return Err(RtxError::validation("resize target must be non-zero"));
    }
    if src.has_size(width, height) {
        return Ok(src.clone());
    }
    let mismatch = || RtxError::validation("frame data does not match its dimensions");
    let out = match src.layout {
        PixelLayout::Rgb8 => {
            let img = image::RgbImage::from_raw(src.width, src.height, src.data.clone())
                .ok_or_else(mismatch)?;
            Frame::from(imageops::resize(&img, width, height, FilterType::Triangle))
        }
        PixelLayout::Gray8 => {
            let img = image::GrayImage::from_raw(src.width, src.height, src.data.clone())
                .ok_or_else(mismatch)?;
            Frame::from(imageops::resize(&img, width, height, FilterType::Triangle))
        }
    };
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scale.rs"]
mod tests;
