use std::path::Path;

use crate::foundation::error::RtxResult;
use crate::render::frame::Frame;

/// Parameters handed to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: u32,
}

/// Destination for rendered frames.
///
/// Ordering contract: `begin` once, then `push_frame` with strictly increasing indices
/// starting at 0, then `end` once.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> RtxResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: u64, frame: &Frame) -> RtxResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> RtxResult<()>;

    /// File the sink writes to, if any.
    fn target(&self) -> Option<&Path> {
        None
    }
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn begin(&mut self, cfg: SinkConfig) -> RtxResult<()> {
        (**self).begin(cfg)
    }

    fn push_frame(&mut self, idx: u64, frame: &Frame) -> RtxResult<()> {
        (**self).push_frame(idx, frame)
    }

    fn end(&mut self) -> RtxResult<()> {
        (**self).end()
    }

    fn target(&self) -> Option<&Path> {
        (**self).target()
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, Frame)>,
    end_calls: usize,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(u64, Frame)] {
        &self.frames
    }

    /// How many times `end` was called.
    pub fn end_calls(&self) -> usize {
        self.end_calls
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> RtxResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &Frame) -> RtxResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> RtxResult<()> {
        self.end_calls += 1;
        Ok(())
    }
}
