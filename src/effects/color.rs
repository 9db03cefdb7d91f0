use crate::foundation::error::{RtxError, RtxResult};
use crate::foundation::math::{luma_u8, to_u8_sat};
use crate::render::frame::{Frame, PixelBuffer, PixelLayout};

/// BT.601 grayscale copy of `src`.
pub fn grayscale(src: &impl PixelBuffer) -> Frame {
    let (w, h) = (src.width(), src.height());
    let mut data = Vec::with_capacity((w as usize) * (h as usize));
    for y in 0..h {
        for x in 0..w {
            data.push(luma_at(src, x, y));
        }
    }
    Frame {
        width: w,
        height: h,
        layout: PixelLayout::Gray8,
        data,
    }
}

/// Mean luma of `src` normalized to `[0, 1]`.
///
/// Sum of per-pixel luma divided by `pixel_count * 255`. Empty buffers report `0`.
pub fn brightness(src: &impl PixelBuffer) -> f64 {
    let count = src.pixel_count();
    if count == 0 {
        return 0.0;
    }
    let mut total = 0u64;
    for y in 0..src.height() {
        for x in 0..src.width() {
            total += u64::from(luma_at(src, x, y));
        }
    }
    (total as f64) / ((count as f64) * 255.0)
}

fn luma_at(src: &impl PixelBuffer, x: u32, y: u32) -> u8 {
    let p = src.pixel(x, y);
    match src.layout() {
        PixelLayout::Gray8 => p[0],
        PixelLayout::Rgb8 => luma_u8(p[0], p[1], p[2]),
    }
}

/// Planar HSV representation: hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct HsvPlanes {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Hue plane, degrees.
    pub hue: Vec<f32>,
    /// Saturation plane.
    pub saturation: Vec<f32>,
    /// Value plane.
    pub value: Vec<f32>,
}

impl HsvPlanes {
    /// Convert any pixel buffer; gray input yields zero hue and saturation.
    pub fn from_rgb(src: &impl PixelBuffer) -> Self {
        let n = src.pixel_count() as usize;
        let mut out = Self {
            width: src.width(),
            height: src.height(),
            hue: Vec::with_capacity(n),
            saturation: Vec::with_capacity(n),
            value: Vec::with_capacity(n),
        };
        for y in 0..src.height() {
            for x in 0..src.width() {
                let [h, s, v] = rgb_to_hsv(src.rgb(x, y));
                out.hue.push(h);
                out.saturation.push(s);
                out.value.push(v);
            }
        }
        out
    }

    /// Back to an RGB frame.
    pub fn to_rgb(&self) -> RtxResult<Frame> {
        let n = (self.width as usize) * (self.height as usize);
        if self.hue.len() != n || self.saturation.len() != n || self.value.len() != n {
            return Err(RtxError::validation("hsv planes do not match their dimensions"));
        }
        let data = self
            .hue
            .iter()
            .zip(&self.saturation)
            .zip(&self.value)
            .flat_map(|((&h, &s), &v)| hsv_to_rgb([h, s, v]))
            .collect();
        Frame::new(self.width, self.height, PixelLayout::Rgb8, data)
    }

    /// Copy with every hue shifted by `degrees`, wrapped into `[0, 360)`.
    pub fn rotate_hue(&self, degrees: f32) -> Self {
        Self {
            hue: self
                .hue
                .iter()
                .map(|&h| (h + degrees).rem_euclid(360.0))
                .collect(),
            ..self.clone()
        }
    }
}

/// 8-bit RGB to `[h, s, v]`.
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [f32; 3] {
    let (r, g, b) = (f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max <= 0.0 { 0.0 } else { delta / max };
    [h, s, max]
}

/// `[h, s, v]` to 8-bit RGB.
pub fn hsv_to_rgb([h, s, v]: [f32; 3]) -> [u8; 3] {
    let c = v * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    [
        to_u8_sat((r + m) * 255.0),
        to_u8_sat((g + m) * 255.0),
        to_u8_sat((b + m) * 255.0),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
