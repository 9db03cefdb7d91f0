//! Source image loading.

/// Decoding encoded images into [`crate::Frame`]s.
pub mod decode;
