//! Playback speed state.

use serde::{Deserialize, Serialize};

/// Sweep speed multiplier options.
///
/// Cycles 1x → 2x → 4x → 8x → 1x.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedMultiplier {
    #[default]
    #[serde(rename = "1x")]
    Normal,
    #[serde(rename = "2x")]
    Double,
    #[serde(rename = "4x")]
    Quadruple,
    #[serde(rename = "8x")]
    Octuple,
}

impl SpeedMultiplier {
    pub fn label(&self) -> &'static str {
        match self {
            SpeedMultiplier::Normal => "1x",
            SpeedMultiplier::Double => "2x",
            SpeedMultiplier::Quadruple => "4x",
            SpeedMultiplier::Octuple => "8x",
        }
    }

    pub fn all() -> &'static [SpeedMultiplier] {
        &[
            SpeedMultiplier::Normal,
            SpeedMultiplier::Double,
            SpeedMultiplier::Quadruple,
            SpeedMultiplier::Octuple,
        ]
    }

    pub fn factor(&self) -> u32 {
        match self {
            SpeedMultiplier::Normal => 1,
            SpeedMultiplier::Double => 2,
            SpeedMultiplier::Quadruple => 4,
            SpeedMultiplier::Octuple => 8,
        }
    }

    /// The next multiplier in the cycle.
    pub fn next(&self) -> SpeedMultiplier {
        match self {
            SpeedMultiplier::Normal => SpeedMultiplier::Double,
            SpeedMultiplier::Double => SpeedMultiplier::Quadruple,
            SpeedMultiplier::Quadruple => SpeedMultiplier::Octuple,
            SpeedMultiplier::Octuple => SpeedMultiplier::Normal,
        }
    }
}
