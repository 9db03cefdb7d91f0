use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::config::output::OutputConfig;
use crate::config::warp::{
    MIN_WARP_ANCHORS, WarpPoint, corner_anchors, format_warp_locations, parse_warp_locations,
};
use crate::foundation::core::Dims;
use crate::foundation::error::{RtxError, RtxResult};

/// Everything a render session needs besides the source pixels.
///
/// Despite the name nothing here touches a GPU; the name is kept for the on-disk format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuConfig {
    /// Path of the source image.
    pub input_path: String,
    /// Output parameters.
    pub output: OutputConfig,
    /// Ordered warp vertices, relative to `output.dims`.
    pub warp_locations: Vec<WarpPoint>,
}

impl Default for GpuConfig {
    fn default() -> Self {
        let output = OutputConfig::default();
        Self {
            input_path: String::new(),
            warp_locations: corner_anchors(output.dims),
            output,
        }
    }
}

impl GpuConfig {
    /// Default configuration with the corner anchors of the default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json_str(s: &str) -> RtxResult<Self> {
        serde_json::from_str(s).map_err(|e| RtxError::serde(e.to_string()))
    }

    /// Read and parse a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> RtxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> RtxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RtxError::serde(e.to_string()))
    }

    /// Change the output dimensions; see [`OutputConfig::set_dims`].
    ///
    /// Existing warp points are left as-is. Call [`GpuConfig::validate_warp_locations`]
    /// afterwards to drop points that fell outside the new frame.
    pub fn set_output_dims(&mut self, dims: Dims) -> bool {
        self.output.set_dims(dims)
    }

    /// Replace the warp list from its text encoding.
    ///
    /// On a parse error the current list is kept and `false` is returned.
    pub fn set_warp_locations_str(&mut self, text: &str) -> bool {
        match parse_warp_locations(text) {
            Ok(points) => {
                self.warp_locations = points;
                true
            }
            Err(err) => {
                tracing::debug!(%err, "rejected warp locations");
                false
            }
        }
    }

    /// Replace the warp list. Bounds are enforced by the next validation pass.
    pub fn set_warp_locations(&mut self, points: Vec<WarpPoint>) -> bool {
        self.warp_locations = points;
        true
    }

    /// Drop points outside the output frame and restore missing corner anchors.
    ///
    /// Anchors are only appended when fewer than [`MIN_WARP_ANCHORS`] points survive.
    /// Returns `true` if the list changed.
    pub fn validate_warp_locations(&mut self) -> bool {
        let dims = self.output.dims;
        let before = self.warp_locations.len();
        self.warp_locations.retain(|p| dims.contains(p.x, p.y));
        let mut changed = self.warp_locations.len() != before;

        if self.warp_locations.len() < MIN_WARP_ANCHORS {
            for anchor in corner_anchors(dims) {
                if !self.warp_locations.contains(&anchor) {
                    self.warp_locations.push(anchor);
                    changed = true;
                }
            }
        }

        if changed {
            tracing::debug!(
                dims = %dims,
                points = self.warp_locations.len(),
                "normalized warp locations"
            );
        }
        changed
    }

    /// Replace the warp list with the corner anchors of the current dimensions.
    pub fn reset_warp_locations(&mut self) {
        self.warp_locations = corner_anchors(self.output.dims);
    }

    /// Text encoding of the warp list.
    pub fn warp_locations_as_str(&self) -> String {
        format_warp_locations(&self.warp_locations)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/gpu.rs"]
mod tests;
