use std::f32::consts::TAU;

use crate::config::warp::WarpPoint;
use crate::foundation::error::{RtxError, RtxResult};
use crate::render::frame::{Frame, PixelBuffer};

/// Peak fraction of the attraction field applied at the crest of a loop.
pub const WARP_STRENGTH: f32 = 0.15;
/// Gaussian falloff radius as a fraction of the shorter frame side.
pub const WARP_SIGMA_FRACTION: f32 = 0.25;

/// Per-pixel attraction towards the warp points, computed once per session.
///
/// For output pixel `p` the field stores `sum_i k(|c_i - p|) * (c_i - p)` with
/// `k(r) = exp(-r^2 / (2 sigma^2))`. A frame at loop phase `t` samples the source at
/// `p + s(t) * field(p)` where `s(t) = WARP_STRENGTH * sin(2 pi t)`.
#[derive(Clone, Debug)]
pub struct WarpField {
    width: u32,
    height: u32,
    offsets: Vec<[f32; 2]>,
}

impl WarpField {
    /// Precompute the field for a `width` x `height` frame.
    pub fn new(width: u32, height: u32, points: &[WarpPoint]) -> Self {
        let sigma = WARP_SIGMA_FRACTION * (width.min(height) as f32);
        let inv_two_sigma_sq = if sigma > 0.0 {
            1.0 / (2.0 * sigma * sigma)
        } else {
            0.0
        };

        let mut offsets = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                let mut acc = [0.0f32; 2];
                for c in points {
                    let dx = c.x as f32 - x as f32;
                    let dy = c.y as f32 - y as f32;
                    let k = (-(dx * dx + dy * dy) * inv_two_sigma_sq).exp();
                    acc[0] += k * dx;
                    acc[1] += k * dy;
                }
                offsets.push(acc);
            }
        }
        Self {
            width,
            height,
            offsets,
        }
    }

    /// Displacement scale at loop phase `t`.
    pub fn amplitude(t: f32) -> f32 {
        WARP_STRENGTH * (TAU * t).sin()
    }

    /// Field vector at `(x, y)` before amplitude scaling.
    pub fn offset(&self, x: u32, y: u32) -> [f32; 2] {
        self.offsets[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Warp `src` (which must match the field size) at loop phase `t`.
    pub fn apply(&self, src: &Frame, t: f32) -> RtxResult<Frame> {
        if !src.has_size(self.width, self.height) {
            return Err(RtxError::validation(format!(
                "warp field is {}x{} but frame is {}x{}",
                self.width, self.height, src.width, src.height
            )));
        }
        let s = Self::amplitude(t);
        if s == 0.0 || self.offsets.iter().all(|o| *o == [0.0, 0.0]) {
            return Ok(src.clone());
        }

        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;
        let mut out = src.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let [dx, dy] = self.offset(x, y);
                let sx = (x as f32 + s * dx).round().clamp(0.0, max_x) as u32;
                let sy = (y as f32 + s * dy).round().clamp(0.0, max_y) as u32;
                out.pixel_mut(x, y).copy_from_slice(src.pixel(sx, sy));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/warp.rs"]
mod tests;
