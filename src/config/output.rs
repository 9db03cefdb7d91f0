use serde::{Deserialize, Serialize};

use crate::config::algorithm::Algorithm;
use crate::foundation::core::Dims;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: i32 = 8192;

/// Field names in canonical order, indexed by [`ConfigField::index`].
pub static CONFIG_NAMES: [&str; 6] = [
    "Output Video Path",
    "Output Video Resolution",
    "Output Video FPS",
    "Output Video Length Per Loop",
    "Number of Loops",
    "Algorithm",
];

/// Field descriptions, parallel to [`CONFIG_NAMES`].
pub static CONFIG_DESCRIPTIONS: [&str; 6] = [
    "The path to the output video file, without extension.",
    "The resolution of the output video file.",
    "The FPS of the output video file.",
    "The length of each loop in the output video file, in seconds.",
    "The number of loops to be made in the output video file.",
    "The algorithm to be used in rendering.",
];

/// Validation hints for the five validated fields, parallel to [`CONFIG_NAMES`].
pub static CONFIG_CONSTRAINTS: [&str; 5] = [
    "Path must not be empty!",
    "Dimension must be between 1 and 8192 pixels on both axes",
    "FPS must be at least 1",
    "Length must be at least 1 seconds",
    "Number of loops must be at least 1",
];

/// Output configuration fields in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// [`OutputConfig::path`].
    Path,
    /// [`OutputConfig::dims`].
    Dims,
    /// [`OutputConfig::fps`].
    Fps,
    /// [`OutputConfig::length`].
    Length,
    /// [`OutputConfig::loops`].
    Loops,
    /// [`OutputConfig::algorithm`].
    Algorithm,
}

impl ConfigField {
    /// All fields in canonical order.
    pub const ALL: [ConfigField; 6] = [
        ConfigField::Path,
        ConfigField::Dims,
        ConfigField::Fps,
        ConfigField::Length,
        ConfigField::Loops,
        ConfigField::Algorithm,
    ];

    /// Ordinal into the presentation tables.
    pub fn index(self) -> usize {
        match self {
            ConfigField::Path => 0,
            ConfigField::Dims => 1,
            ConfigField::Fps => 2,
            ConfigField::Length => 3,
            ConfigField::Loops => 4,
            ConfigField::Algorithm => 5,
        }
    }

    /// Display name from [`CONFIG_NAMES`].
    pub fn name(self) -> &'static str {
        CONFIG_NAMES[self.index()]
    }

    /// Description from [`CONFIG_DESCRIPTIONS`].
    pub fn description(self) -> &'static str {
        CONFIG_DESCRIPTIONS[self.index()]
    }

    /// Validation hint from [`CONFIG_CONSTRAINTS`]; the algorithm field has none.
    pub fn constraint(self) -> Option<&'static str> {
        CONFIG_CONSTRAINTS.get(self.index()).copied()
    }
}

/// First constraint violated by an [`OutputConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}: {message}", .field.name())]
pub struct ConfigViolation {
    /// Offending field.
    pub field: ConfigField,
    /// Human-readable constraint text.
    pub message: &'static str,
}

impl ConfigViolation {
    fn of(field: ConfigField) -> Self {
        Self {
            field,
            message: field.constraint().unwrap_or("invalid value"),
        }
    }
}

/// Parameters of the rendered video.
///
/// Field order matches [`ConfigField::ALL`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output path without extension; sinks append their own suffix.
    pub path: String,
    /// Output frame size.
    pub dims: Dims,
    /// Frames per second.
    pub fps: i32,
    /// Length of one loop in seconds.
    pub length: f64,
    /// Number of loop repetitions.
    pub loops: i32,
    /// Per-frame transform.
    pub algorithm: Algorithm,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            dims: Dims::default(),
            fps: 30,
            length: 5.5,
            loops: 6,
            algorithm: Algorithm::default(),
        }
    }
}

impl OutputConfig {
    /// Check every field in canonical order and report the first violation.
    pub fn validate(&self) -> Result<(), ConfigViolation> {
        if self.path.trim().is_empty() {
            return Err(ConfigViolation::of(ConfigField::Path));
        }
        let in_range = |v: i32| (1..=MAX_DIMENSION).contains(&v);
        if !in_range(self.dims.width) || !in_range(self.dims.height) {
            return Err(ConfigViolation::of(ConfigField::Dims));
        }
        if self.fps < 1 {
            return Err(ConfigViolation::of(ConfigField::Fps));
        }
        // NaN fails this comparison as well.
        if !(self.length >= 1.0 && self.length.is_finite()) {
            return Err(ConfigViolation::of(ConfigField::Length));
        }
        if self.loops < 1 {
            return Err(ConfigViolation::of(ConfigField::Loops));
        }
        Ok(())
    }

    /// Replace `dims` unless either component is non-positive.
    ///
    /// Warp locations validated against the old dimensions must be re-validated afterwards.
    pub fn set_dims(&mut self, dims: Dims) -> bool {
        if !dims.is_positive() {
            return false;
        }
        self.dims = dims;
        true
    }

    /// Frames in one loop, `floor(fps * length)`.
    pub fn frames_per_loop(&self) -> u64 {
        (f64::from(self.fps.max(0)) * self.length).floor().max(0.0) as u64
    }

    /// Frames in the whole video, `frames_per_loop * loops`.
    pub fn total_frames(&self) -> u64 {
        self.frames_per_loop()
            .saturating_mul(u64::try_from(self.loops).unwrap_or(0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/output.rs"]
mod tests;
