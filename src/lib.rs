//! rtxloop turns one still image into a short looping video.
//!
//! The flow is:
//!
//! - Build and validate a [`GpuConfig`] (output parameters plus warp locations)
//! - Load the source image into a [`Frame`]
//! - Open a [`FrameGenerator`] and call [`FrameGenerator::next_frame`] until the returned
//!   [`Progress`] is complete
//!
//! Frames go to a [`FrameSink`]: an `ffmpeg`-encoded video, a single overwritten PNG for
//! hosts that poll an image, or memory.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Source image loading.
pub mod assets;
/// Output configuration, algorithms and warp locations.
pub mod config;
/// CPU derivations and per-frame transforms.
pub mod effects;
/// Frame sinks.
pub mod encode;
/// Pixel containers.
pub mod render;
/// Render sessions.
pub mod session;

pub use crate::foundation::core::{Dims, Progress};
pub use crate::foundation::error::{RtxError, RtxResult};

pub use crate::assets::decode::{decode_image, load_source_image};
pub use crate::config::algorithm::Algorithm;
pub use crate::config::gpu::GpuConfig;
pub use crate::config::output::{
    CONFIG_CONSTRAINTS, CONFIG_DESCRIPTIONS, CONFIG_NAMES, ConfigField, ConfigViolation,
    MAX_DIMENSION, OutputConfig,
};
pub use crate::config::warp::{
    MIN_WARP_ANCHORS, WarpPoint, corner_anchors, format_warp_locations, parse_warp_locations,
};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::temp_file::TempFileSink;
pub use crate::render::frame::{Frame, PixelBuffer, PixelLayout};
pub use crate::session::frame_generator::{FrameGenerator, SessionMode, SessionState};
