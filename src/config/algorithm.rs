use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::RtxError;

/// Per-frame visual transform selected by the output configuration.
///
/// Variants carry no payload; behavior lives in [`crate::effects::algorithms`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Warp of the full-colour source.
    CorgiLegacy,
    /// [`Algorithm::CorgiLegacy`] with a gain pulling mean brightness towards mid-grey.
    BrightnessCompensate,
    /// Hue rotation in HSV space followed by the warp.
    CorgiHsv,
    /// Cosine crossfade between colour and grayscale followed by the warp.
    #[default]
    BlendS,
}

impl Algorithm {
    /// All variants in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::CorgiLegacy,
        Algorithm::BrightnessCompensate,
        Algorithm::CorgiHsv,
        Algorithm::BlendS,
    ];

    /// Human-readable name shown by front ends.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::CorgiLegacy => "Corgi Legacy",
            Algorithm::BrightnessCompensate => "Corgi Legacy with Brightness Compensate",
            Algorithm::CorgiHsv => "Corgi HSV",
            Algorithm::BlendS => "Blend S",
        }
    }

    /// Stable machine key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::CorgiLegacy => "corgi-legacy",
            Algorithm::BrightnessCompensate => "brightness-compensate",
            Algorithm::CorgiHsv => "corgi-hsv",
            Algorithm::BlendS => "blend-s",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = RtxError;

    /// Accepts either the machine key or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s) || a.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let keys: Vec<&str> = Algorithm::ALL.iter().map(|a| a.key()).collect();
                RtxError::validation(format!(
                    "unknown algorithm \"{s}\" (expected one of: {})",
                    keys.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/algorithm.rs"]
mod tests;
