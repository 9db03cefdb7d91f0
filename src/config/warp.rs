//! Warp points and their text encoding.
//!
//! A list is written as `x,y` pairs joined by `;`, e.g. `0,0;479,0;240,120`. Whitespace
//! around tokens is ignored and an empty string is the empty list.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Dims;
use crate::foundation::error::{RtxError, RtxResult};

/// Separator between points.
pub const POINT_DELIMITER: char = ';';
/// Separator between the two coordinates of a point.
pub const PAIR_DELIMITER: char = ',';
/// Fewer surviving points than this triggers re-insertion of the corner anchors.
pub const MIN_WARP_ANCHORS: usize = 4;

/// One warp vertex in output-frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct WarpPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl WarpPoint {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for WarpPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<WarpPoint> for (i32, i32) {
    fn from(p: WarpPoint) -> Self {
        (p.x, p.y)
    }
}

/// Corner anchors of `dims`: top-left, top-right, bottom-right, bottom-left.
pub fn corner_anchors(dims: Dims) -> Vec<WarpPoint> {
    if !dims.is_positive() {
        return Vec::new();
    }
    let (r, b) = (dims.width - 1, dims.height - 1);
    vec![
        WarpPoint::new(0, 0),
        WarpPoint::new(r, 0),
        WarpPoint::new(r, b),
        WarpPoint::new(0, b),
    ]
}

/// Parse a point list. Fails on the first malformed segment.
pub fn parse_warp_locations(text: &str) -> RtxResult<Vec<WarpPoint>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(POINT_DELIMITER)
        .map(parse_point)
        .collect::<RtxResult<Vec<_>>>()
}

fn parse_point(segment: &str) -> RtxResult<WarpPoint> {
    let mut coords = segment.split(PAIR_DELIMITER);
    let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
        return Err(RtxError::validation(format!(
            "warp point \"{}\" must be written as x{PAIR_DELIMITER}y",
            segment.trim()
        )));
    };
    let coord = |s: &str| {
        s.trim().parse::<i32>().map_err(|e| {
            RtxError::validation(format!(
                "warp point \"{}\" has an invalid coordinate: {e}",
                segment.trim()
            ))
        })
    };
    Ok(WarpPoint::new(coord(x)?, coord(y)?))
}

/// Format a point list so that [`parse_warp_locations`] reproduces it.
pub fn format_warp_locations(points: &[WarpPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{}{PAIR_DELIMITER}{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(&POINT_DELIMITER.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/config/warp.rs"]
mod tests;
