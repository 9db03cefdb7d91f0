use std::borrow::Cow;

use crate::config::gpu::GpuConfig;
use crate::effects::algorithms::{Canvas, loop_phase};
use crate::effects::color::{HsvPlanes, brightness, grayscale};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::temp_file::TempFileSink;
use crate::foundation::core::Progress;
use crate::foundation::error::{RtxError, RtxResult};
use crate::render::frame::Frame;

/// What each frame-advance call produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// Apply the configured algorithm and append to a video.
    Video,
    /// Alternate colour and grayscale source frames, for hosts that poll a single image.
    Snapshot,
}

/// Lifecycle of a [`FrameGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// The sink is open and frames may be advanced.
    Rendering,
    /// The sink has been released.
    Closed,
}

/// Renders a looping video from one source image.
///
/// Construction derives everything the per-frame transforms need, opens the sink and writes
/// the source (scaled to the output size) as frame 0. Each [`FrameGenerator::next_frame`]
/// call then appends exactly one frame until `total` frames have been produced.
///
/// The configuration is cloned at construction; editing the caller's copy afterwards does
/// not affect the session. Not reentrant: all mutation goes through `&mut self`.
pub struct FrameGenerator<S: FrameSink = Box<dyn FrameSink>> {
    config: GpuConfig,
    mode: SessionMode,
    state: SessionState,

    source: Frame,
    gray: Frame,
    hsv: HsvPlanes,
    brightness: f64,
    canvas: Canvas,

    rendered: u64,
    total: u64,
    frames_per_loop: u64,

    sink: S,
}

impl FrameGenerator {
    /// Open a session whose sink is chosen by `mode`: a video file for
    /// [`SessionMode::Video`], a single overwritten PNG for [`SessionMode::Snapshot`].
    pub fn open(source: &Frame, config: &GpuConfig, mode: SessionMode) -> RtxResult<Self> {
        let base = config.output.path.as_str();
        let sink: Box<dyn FrameSink> = match mode {
            SessionMode::Video => {
                Box::new(FfmpegSink::new(FfmpegSinkOpts::for_base_path(base)))
            }
            SessionMode::Snapshot => Box::new(TempFileSink::for_base_path(base)),
        };
        Self::with_sink(source, config, mode, sink)
    }
}

impl FrameGenerator<FfmpegSink> {
    /// Video session writing `<path>.avi` through `ffmpeg`.
    pub fn open_video(source: &Frame, config: &GpuConfig) -> RtxResult<Self> {
        let sink = FfmpegSink::new(FfmpegSinkOpts::for_base_path(&config.output.path));
        Self::with_sink(source, config, SessionMode::Video, sink)
    }
}

impl FrameGenerator<TempFileSink> {
    /// Snapshot session overwriting `<path>.temp.png` on every frame.
    pub fn open_snapshot(source: &Frame, config: &GpuConfig) -> RtxResult<Self> {
        let sink = TempFileSink::for_base_path(&config.output.path);
        Self::with_sink(source, config, SessionMode::Snapshot, sink)
    }
}

impl<S: FrameSink> FrameGenerator<S> {
    /// Build a session around an arbitrary sink.
    ///
    /// Fails with [`RtxError::Config`] when the output configuration is invalid, with
    /// [`RtxError::Validation`] when `source` is empty or malformed, and with the sink's error
    /// when it cannot be opened or rejects the first frame.
    #[tracing::instrument(skip_all, fields(mode = ?mode, dims = %config.output.dims))]
    pub fn with_sink(
        source: &Frame,
        config: &GpuConfig,
        mode: SessionMode,
        mut sink: S,
    ) -> RtxResult<Self> {
        config.output.validate()?;
        source.check()?;
        let mut config = config.clone();
        if config.validate_warp_locations() {
            tracing::debug!(
                warp = %config.warp_locations_as_str(),
                "normalized warp locations of session snapshot"
            );
        }
        let (width, height) = config
            .output
            .dims
            .to_u32()
            .ok_or_else(|| RtxError::validation("output dims must be positive"))?;
        let fps = u32::try_from(config.output.fps)
            .map_err(|_| RtxError::validation("output fps must be positive"))?;

        let source = source.to_rgb();
        let gray = grayscale(&source);
        let hsv = HsvPlanes::from_rgb(&source);
        let brightness = brightness(&source);
        let canvas = Canvas::prepare(&source, width, height, &config.warp_locations)?;

        sink.begin(SinkConfig { width, height, fps })?;
        if let Err(err) = sink.push_frame(0, &canvas.color) {
            if let Err(end_err) = sink.end() {
                tracing::warn!(%end_err, "failed to release sink after first-frame error");
            }
            return Err(err);
        }

        let frames_per_loop = config.output.frames_per_loop();
        let total = config.output.total_frames();
        tracing::info!(
            algorithm = %config.output.algorithm,
            brightness,
            total,
            target = ?sink.target(),
            "render session opened"
        );

        Ok(Self {
            config,
            mode,
            state: SessionState::Rendering,
            source,
            gray,
            hsv,
            brightness,
            canvas,
            rendered: 0,
            total,
            frames_per_loop,
            sink,
        })
    }

    /// Produce and write the next frame.
    ///
    /// Returns the updated counters. Once `total` frames exist, or after
    /// [`FrameGenerator::close`], further calls fail without touching the sink. If the
    /// sink rejects a frame the counter is not advanced.
    #[tracing::instrument(level = "trace", skip(self), fields(frame = self.rendered + 1))]
    pub fn next_frame(&mut self) -> RtxResult<Progress> {
        if self.state == SessionState::Closed {
            return Err(RtxError::evaluation("render session is closed"));
        }
        if self.rendered >= self.total {
            return Err(RtxError::evaluation(format!(
                "all {} frames have already been rendered",
                self.total
            )));
        }

        let idx = self.rendered + 1;
        let frame: Cow<'_, Frame> = match self.mode {
            SessionMode::Video => {
                let t = loop_phase(idx, self.frames_per_loop);
                Cow::Owned(
                    self.canvas
                        .render(self.config.output.algorithm, self.brightness, t)?,
                )
            }
            SessionMode::Snapshot => {
                if idx % 2 == 1 {
                    Cow::Borrowed(&self.canvas.color)
                } else {
                    Cow::Borrowed(&self.canvas.gray)
                }
            }
        };
        self.sink.push_frame(idx, &frame)?;
        self.rendered = idx;
        Ok(self.progress())
    }

    /// Advance until every frame is written, then close the sink.
    ///
    /// `on_progress` sees the counters after each frame.
    pub fn render_all(&mut self, mut on_progress: impl FnMut(Progress)) -> RtxResult<Progress> {
        while !self.is_complete() {
            let progress = self.next_frame()?;
            on_progress(progress);
        }
        self.close()?;
        Ok(self.progress())
    }

    /// Release the sink. Later calls are no-ops.
    ///
    /// Output already written stays on disk, truncated if the loop did not finish.
    pub fn close(&mut self) -> RtxResult<()> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        self.state = SessionState::Closed;
        tracing::debug!(rendered = self.rendered, total = self.total, "closing render session");
        self.sink.end()
    }

    /// Frames rendered so far and the total.
    pub fn progress(&self) -> Progress {
        Progress {
            rendered: self.rendered,
            total: self.total,
        }
    }

    /// Return `true` once `total` frames have been rendered.
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Output mode chosen at construction.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The session's private copy of the configuration.
    pub fn config(&self) -> &GpuConfig {
        &self.config
    }

    /// Copy of the source image, at its original size.
    pub fn source(&self) -> &Frame {
        &self.source
    }

    /// Grayscale derivative of the source.
    pub fn grayscale(&self) -> &Frame {
        &self.gray
    }

    /// HSV planes of the source.
    pub fn hsv(&self) -> &HsvPlanes {
        &self.hsv
    }

    /// Mean source luma in `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Source derivatives at output resolution.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Frames per loop, `floor(fps * length)`.
    pub fn frames_per_loop(&self) -> u64 {
        self.frames_per_loop
    }

    /// The sink frames are written to.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: FrameSink> Drop for FrameGenerator<S> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(%err, "failed to close render session");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_generator.rs"]
mod tests;
