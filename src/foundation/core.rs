use serde::{Deserialize, Serialize};

/// Output frame dimensions in pixels, `width` then `height`.
///
/// Components are signed so that out-of-range user input can be represented and rejected by
/// validation rather than silently wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Dims {
    /// Create a dimension pair without validating it.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Return `true` when both components are strictly positive.
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Return `true` when `(x, y)` lies inside `[0, width) x [0, height)`.
    pub fn contains(self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Unsigned view for pixel buffers. `None` unless both components are positive.
    pub fn to_u32(self) -> Option<(u32, u32)> {
        if !self.is_positive() {
            return None;
        }
        Some((self.width as u32, self.height as u32))
    }
}

impl Default for Dims {
    fn default() -> Self {
        Self::new(480, 480)
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Frame counter pair returned by every frame-advance call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Frames produced by explicit advance calls so far.
    pub rendered: u64,
    /// Frames required for the complete video.
    pub total: u64,
}

impl Progress {
    /// Return `true` once every frame has been rendered.
    pub fn is_complete(self) -> bool {
        self.rendered >= self.total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
