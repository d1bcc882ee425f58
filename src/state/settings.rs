//! Startup settings for the animator.
//!
//! Settings are read once from a JSON file named by `VCP_ANIMATOR_SETTINGS`.
//! They are never written back.

use super::playback::SpeedMultiplier;
use super::vcp::VcpName;
use serde::{Deserialize, Serialize};

/// Initial selections and canvas layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Pattern selected at startup, if any.
    pub initial_vcp: Option<VcpName>,
    /// Speed multiplier at startup.
    pub initial_speed: SpeedMultiplier,
    /// Distance between range rings, in canvas range units.
    pub range_ring_step: u32,
    /// Outermost range ring.
    pub max_range: u32,
    /// Target of the "More Info" link.
    pub more_info_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_vcp: None,
            initial_speed: SpeedMultiplier::Normal,
            range_ring_step: 50,
            max_range: 250,
            more_info_url: "https://docs.google.com/spreadsheets/d/1gJOoY1DBSZMOYpcr7YDRyP_9xr7K7DVnPmAeFoB9Hfg/edit?gid=0#gid=0".to_string(),
        }
    }
}

impl AppSettings {
    /// Environment variable naming the settings file.
    pub const ENV_VAR: &'static str = "VCP_ANIMATOR_SETTINGS";

    /// Most range rings drawn on the canvas.
    pub const MAX_RING_COUNT: u32 = 20;

    /// Creates new settings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by [`Self::ENV_VAR`].
    pub fn load() -> Self {
        let path = match std::env::var(Self::ENV_VAR) {
            Ok(p) => p,
            Err(_) => return Self::default(),
        };

        let json = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to read settings from {}: {}", path, e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Failed to parse settings: {}", e);
                Self::default()
            }
        }
    }

    /// Range ring radii from the innermost ring outwards.
    pub fn range_rings(&self) -> Vec<u32> {
        let step = self.range_ring_step.max(1) as usize;
        (step..=self.max_range as usize)
            .step_by(step)
            .take(Self::MAX_RING_COUNT as usize)
            .map(|r| r as u32)
            .collect()
    }

    fn sanitized(mut self) -> Self {
        let ring_count = self
            .max_range
            .checked_div(self.range_ring_step)
            .unwrap_or(0);
        if ring_count == 0 || ring_count > Self::MAX_RING_COUNT {
            log::warn!(
                "Ignoring range ring layout of {} rings, expected 1 to {}",
                ring_count,
                Self::MAX_RING_COUNT
            );
            let defaults = Self::default();
            self.range_ring_step = defaults.range_ring_step;
            self.max_range = defaults.max_range;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::new();
        assert_eq!(settings.initial_vcp, None);
        assert_eq!(settings.initial_speed, SpeedMultiplier::Normal);
        assert_eq!(settings.range_rings(), vec![50, 100, 150, 200, 250]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            AppSettings::from_json(r#"{"initial_vcp": "VCP 212", "initial_speed": "4x"}"#)
                .unwrap();
        assert_eq!(settings.initial_vcp, Some(VcpName::Vcp212));
        assert_eq!(settings.initial_speed, SpeedMultiplier::Quadruple);
        assert_eq!(settings.max_range, 250);
    }

    #[test]
    fn test_rejects_unknown_pattern() {
        assert!(AppSettings::from_json(r#"{"initial_vcp": "VCP 99"}"#).is_err());
    }

    #[test]
    fn test_sanitize_zero_step() {
        let settings = AppSettings {
            range_ring_step: 0,
            ..AppSettings::default()
        }
        .sanitized();
        assert_eq!(settings.range_ring_step, 50);
    }

    #[test]
    fn test_sanitize_dense_rings() {
        let settings = AppSettings {
            range_ring_step: 1,
            max_range: 4_000_000_000,
            ..AppSettings::default()
        };
        assert_eq!(
            settings.range_rings().len(),
            AppSettings::MAX_RING_COUNT as usize
        );

        let settings = settings.sanitized();
        assert_eq!(settings.range_ring_step, 50);
        assert_eq!(settings.max_range, 250);

        // exactly at the bound is kept
        let settings = AppSettings {
            range_ring_step: 10,
            max_range: 200,
            ..AppSettings::default()
        }
        .sanitized();
        assert_eq!(settings.range_rings().len(), 20);
    }
}
