//! CPU image derivations and per-frame transforms.

/// The four per-frame transforms.
pub mod algorithms;
/// Grayscale, HSV and brightness derivations.
pub mod color;
/// Resizing to the output dimensions.
pub mod scale;
/// Point-driven geometric warp.
pub mod warp;
