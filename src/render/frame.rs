use crate::foundation::error::{RtxError, RtxResult};

/// Channel layout of a [`Frame`]. Both layouts are 8 bits per channel, tightly packed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// One luma channel.
    Gray8,
    /// Red, green, blue.
    Rgb8,
}

impl PixelLayout {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Gray8 => 1,
            PixelLayout::Rgb8 => 3,
        }
    }
}

/// Read access to a row-major 8-bit image.
///
/// Derivations and per-frame transforms only go through this trait, so they work with any
/// container that can hand out pixel slices.
pub trait PixelBuffer {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Channel layout.
    fn layout(&self) -> PixelLayout;
    /// Channels of the pixel at `(x, y)`. Panics when out of bounds.
    fn pixel(&self, x: u32, y: u32) -> &[u8];

    /// Pixel as RGB, replicating luma for gray buffers.
    fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let p = self.pixel(x, y);
        match self.layout() {
            PixelLayout::Gray8 => [p[0], p[0], p[0]],
            PixelLayout::Rgb8 => [p[0], p[1], p[2]],
        }
    }

    /// Number of pixels.
    fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

/// An owned image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel layout of `data`.
    pub layout: PixelLayout,
    /// Pixel bytes, row-major.
    pub data: Vec<u8>,
}

impl Frame {
    /// Wrap `data`, checking that it holds exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> RtxResult<Self> {
        let frame = Self {
            width,
            height,
            layout,
            data,
        };
        frame.check()?;
        Ok(frame)
    }

    /// Check that the frame is non-empty and `data` matches its size and layout.
    ///
    /// The fields are public, so frames built by hand or converted from an empty `image`
    /// buffer can violate this.
    pub fn check(&self) -> RtxResult<()> {
        let (width, height, layout) = (self.width, self.height, self.layout);
        if width == 0 || height == 0 {
            return Err(RtxError::validation("frame width/height must be non-zero"));
        }
        let expected = buffer_len(width, height, layout)?;
        if self.data.len() != expected {
            return Err(RtxError::validation(format!(
                "frame data size mismatch: got {} bytes, expected {expected} for {width}x{height} {layout:?}",
                self.data.len()
            )));
        }
        Ok(())
    }

    /// A frame with every pixel set to `px` (`px.len()` must match the layout).
    pub fn filled(width: u32, height: u32, layout: PixelLayout, px: &[u8]) -> RtxResult<Self> {
        if px.len() != layout.channels() {
            return Err(RtxError::validation(
                "fill pixel does not match the frame layout",
            ));
        }
        let n = (width as usize) * (height as usize);
        Self::new(width, height, layout, px.repeat(n))
    }

    /// Build an RGB frame pixel by pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> [u8; 3],
    ) -> RtxResult<Self> {
        let mut data = Vec::with_capacity(buffer_len(width, height, PixelLayout::Rgb8)?);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, PixelLayout::Rgb8, data)
    }

    /// Mutable channels of the pixel at `(x, y)`.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let c = self.layout.channels();
        let i = self.offset(x, y);
        &mut self.data[i..i + c]
    }

    /// Copy as RGB; RGB frames are cloned unchanged.
    pub fn to_rgb(&self) -> Frame {
        match self.layout {
            PixelLayout::Rgb8 => self.clone(),
            PixelLayout::Gray8 => Frame {
                width: self.width,
                height: self.height,
                layout: PixelLayout::Rgb8,
                data: self.data.iter().flat_map(|&v| [v, v, v]).collect(),
            },
        }
    }

    /// Return `true` when the frame is `width` x `height`.
    pub fn has_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        ((y as usize) * (self.width as usize) + (x as usize)) * self.layout.channels()
    }
}

impl PixelBuffer for Frame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn layout(&self) -> PixelLayout {
        self.layout
    }

    fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.layout.channels();
        let i = self.offset(x, y);
        &self.data[i..i + c]
    }
}

impl From<image::RgbImage> for Frame {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Frame {
            width,
            height,
            layout: PixelLayout::Rgb8,
            data: img.into_raw(),
        }
    }
}

impl From<image::GrayImage> for Frame {
    fn from(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Frame {
            width,
            height,
            layout: PixelLayout::Gray8,
            data: img.into_raw(),
        }
    }
}

impl Frame {
    /// View as an `image` buffer of the matching color type.
    pub fn to_dynamic(&self) -> RtxResult<image::DynamicImage> {
        let mismatch = || RtxError::validation("frame data does not match its dimensions");
        Ok(match self.layout {
            PixelLayout::Rgb8 => image::DynamicImage::ImageRgb8(
                image::RgbImage::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(mismatch)?,
            ),
            PixelLayout::Gray8 => image::DynamicImage::ImageLuma8(
                image::GrayImage::from_raw(self.width, self.height, self.data.clone())
                    .ok_or_else(mismatch)?,
            ),
        })
    }
}

fn buffer_len(width: u32, height: u32, layout: PixelLayout) -> RtxResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(layout.channels()))
        .ok_or_else(|| RtxError::validation("frame buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
