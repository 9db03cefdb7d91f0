//! Render sessions: one source image, one output, frame by frame.

/// The frame generator state machine.
pub mod frame_generator;
