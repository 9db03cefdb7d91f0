//! Output configuration, algorithm selection and warp locations.

/// The four named per-frame transforms.
pub mod algorithm;
/// Render configuration payload and warp-location management.
pub mod gpu;
/// Output parameters, validation and presentation tables.
pub mod output;
/// Warp point type and its text encoding.
pub mod warp;
