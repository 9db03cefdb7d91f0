//! Pixel containers shared by effects, sinks and sessions.

/// Owned frames and the [`frame::PixelBuffer`] accessor trait.
pub mod frame;
