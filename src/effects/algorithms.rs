//! Per-frame transforms selected by [`Algorithm`].
//!
//! Every transform is a function of the loop phase `t` in `[0, 1)`, so frame `k` of a loop
//! and frame `k` of the next loop are identical and the video loops seamlessly.

use std::f32::consts::TAU;

use crate::config::algorithm::Algorithm;
use crate::config::warp::WarpPoint;
use crate::effects::color::{HsvPlanes, grayscale};
use crate::effects::scale::resize;
use crate::effects::warp::WarpField;
use crate::foundation::error::RtxResult;
use crate::foundation::math::{lerp_u8, to_u8_sat};
use crate::render::frame::Frame;

/// Brightness the compensating gain aims for.
pub const TARGET_BRIGHTNESS: f64 = 0.5;
/// Gain bounds for [`Algorithm::BrightnessCompensate`].
pub const GAIN_RANGE: (f64, f64) = (0.5, 2.0);

/// Source derivatives at output resolution, prepared once per session.
#[derive(Clone, Debug)]
pub struct Canvas {
    /// Source scaled to the output size, RGB.
    pub color: Frame,
    /// Grayscale of `color`.
    pub gray: Frame,
    /// HSV planes of `color`.
    pub hsv: HsvPlanes,
    /// Warp field for the configured points.
    pub warp: WarpField,
}

impl Canvas {
    /// Scale `source` to `width` x `height` and derive the working planes.
    pub fn prepare(
        source: &Frame,
        width: u32,
        height: u32,
        points: &[WarpPoint],
    ) -> RtxResult<Self> {
        let color = resize(&source.to_rgb(), width, height)?;
        let gray = grayscale(&color);
        let hsv = HsvPlanes::from_rgb(&color);
        Ok(Self {
            color,
            gray,
            hsv,
            warp: WarpField::new(width, height, points),
        })
    }

    /// Produce the frame for `algorithm` at loop phase `t`.
    ///
    /// `brightness` is the source brightness metric, used by the compensating variant.
    pub fn render(&self, algorithm: Algorithm, brightness: f64, t: f32) -> RtxResult<Frame> {
        match algorithm {
            Algorithm::CorgiLegacy => self.warp.apply(&self.color, t),
            Algorithm::BrightnessCompensate => {
                let warped = self.warp.apply(&self.color, t)?;
                Ok(apply_gain(warped, brightness_gain(brightness)))
            }
            Algorithm::CorgiHsv => {
                let shifted = self.hsv.rotate_hue(360.0 * t).to_rgb()?;
                self.warp.apply(&shifted, t)
            }
            Algorithm::BlendS => {
                let blended = blend(&self.color, &self.gray, blend_mix(t));
                self.warp.apply(&blended, t)
            }
        }
    }
}

/// Gain that moves `brightness` to [`TARGET_BRIGHTNESS`], clamped to [`GAIN_RANGE`].
pub fn brightness_gain(brightness: f64) -> f64 {
    if brightness <= 0.0 || !brightness.is_finite() {
        return GAIN_RANGE.1;
    }
    (TARGET_BRIGHTNESS / brightness).clamp(GAIN_RANGE.0, GAIN_RANGE.1)
}

/// Gray weight of the blend at phase `t`: 0 at the loop start, 1 at mid-loop.
pub fn blend_mix(t: f32) -> f32 {
    0.5 - 0.5 * (TAU * t).cos()
}

fn apply_gain(mut frame: Frame, gain: f64) -> Frame {
    let gain = gain as f32;
    for v in &mut frame.data {
        *v = to_u8_sat(f32::from(*v) * gain);
    }
    frame
}

fn blend(color: &Frame, gray: &Frame, mix: f32) -> Frame {
    let data = color
        .data
        .chunks_exact(3)
        .zip(&gray.data)
        .flat_map(|(c, &g)| {
            [
                lerp_u8(c[0], g, mix),
                lerp_u8(c[1], g, mix),
                lerp_u8(c[2], g, mix),
            ]
        })
        .collect();
    Frame {
        width: color.width,
        height: color.height,
        layout: color.layout,
        data,
    }
}

/// Loop phase of frame `index` for loops of `frames_per_loop` frames.
pub fn loop_phase(index: u64, frames_per_loop: u64) -> f32 {
    if frames_per_loop == 0 {
        return 0.0;
    }
    ((index % frames_per_loop) as f64 / frames_per_loop as f64) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/effects/algorithms.rs"]
mod tests;
