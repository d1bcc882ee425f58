//! Volume Coverage Pattern (VCP) definitions.
//!
//! Contains the scan tables for the four patterns the animator can play.
//! Speeds and ranges are calibrated against the RDA scan tables and are
//! reproduced literally.

use super::inserts::SailsChoice;
use super::scan_step::ScanStep;
use serde::{Deserialize, Serialize};

/// Names of the patterns available in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcpName {
    #[serde(rename = "VCP 12")]
    Vcp12,
    #[serde(rename = "VCP 35")]
    Vcp35,
    #[serde(rename = "VCP 212")]
    Vcp212,
    #[serde(rename = "VCP 215")]
    Vcp215,
}

impl VcpName {
    pub fn all() -> &'static [VcpName] {
        &[VcpName::Vcp12, VcpName::Vcp35, VcpName::Vcp212, VcpName::Vcp215]
    }

    pub fn label(&self) -> &'static str {
        match self {
            VcpName::Vcp12 => "VCP 12",
            VcpName::Vcp35 => "VCP 35",
            VcpName::Vcp212 => "VCP 212",
            VcpName::Vcp215 => "VCP 215",
        }
    }

    /// Parse a display label such as "VCP 212".
    pub fn from_label(label: &str) -> Option<VcpName> {
        Self::all().iter().copied().find(|vcp| vcp.label() == label)
    }

    /// Whether MRLE rescans may be inserted into this pattern.
    pub fn supports_mrle(&self) -> bool {
        matches!(self, VcpName::Vcp12 | VcpName::Vcp212)
    }

    /// SAILS options offered for this pattern.
    pub fn sails_choices(&self) -> &'static [SailsChoice] {
        match self {
            VcpName::Vcp35 => &[SailsChoice::None, SailsChoice::Sails1],
            _ => SailsChoice::all(),
        }
    }
}

/// Definition of a Volume Coverage Pattern
#[derive(Clone, Debug)]
pub struct VcpDefinition {
    /// VCP number (e.g., 215, 35)
    pub number: u16,
    /// Short name for the VCP
    pub name: &'static str,
    /// Description of when this VCP is used
    pub description: &'static str,
    /// Ordered scan steps
    pub steps: &'static [ScanStep],
}

/// VCP 212 - Precipitation Mode (faster)
/// 17 steps, split cuts from 1.8° through 6.4°
static VCP_212_STEPS: &[ScanStep] = &[
    ScanStep::z("0.5°", -0.35, 250.0),
    ScanStep::v("0.5°", -0.29, 74.0),
    ScanStep::z("0.9°", -0.35, 250.0),
    ScanStep::v("0.9°", -0.29, 74.0),
    ScanStep::z("1.3°", -0.38, 231.0),
    ScanStep::v("1.3°", -0.29, 74.0),
    ScanStep::zv("1.8°", -0.43, 208.0, 80.0),
    ScanStep::zv("2.4°", -0.46, 181.0, 80.0),
    ScanStep::zv("3.1°", -0.46, 158.0, 80.0),
    ScanStep::zv("4.0°", -0.46, 134.0, 80.0),
    ScanStep::zv("5.1°", -0.46, 113.0, 80.0),
    ScanStep::zv("6.4°", -0.46, 94.0, 80.0),
    ScanStep::v("8.0°", -0.5, 74.0),
    ScanStep::v("10.0°", -0.5, 68.0),
    ScanStep::v("12.5°", -0.5, 63.0),
    ScanStep::v("15.6°", -0.5, 63.0),
    ScanStep::v("19.5°", -0.5, 63.0),
];

static VCP_212: VcpDefinition = VcpDefinition {
    number: 212,
    name: "Precip Fast",
    description: "Precipitation Mode (Fast) - 17 cuts through 19.5°",
    steps: VCP_212_STEPS,
};

/// VCP 35 - Clear Air Mode
/// 12 steps, slow rotation for sensitivity, no high-elevation tail
static VCP_35_STEPS: &[ScanStep] = &[
    ScanStep::z("0.5°", -0.08, 250.0),
    ScanStep::v("0.5°", -0.26, 80.0),
    ScanStep::z("0.9°", -0.08, 250.0),
    ScanStep::v("0.9°", -0.26, 80.0),
    ScanStep::z("1.3°", -0.09, 231.0),
    ScanStep::v("1.3°", -0.26, 80.0),
    ScanStep::zv("1.8°", -0.26, 208.0, 80.0),
    ScanStep::zv("2.4°", -0.30, 181.0, 80.0),
    ScanStep::zv("3.1°", -0.29, 158.0, 80.0),
    ScanStep::zv("4.0°", -0.30, 134.0, 80.0),
    ScanStep::zv("5.1°", -0.30, 134.0, 80.0),
    ScanStep::zv("6.4°", -0.30, 134.0, 80.0),
];

static VCP_35: VcpDefinition = VcpDefinition {
    number: 35,
    name: "Clear Air",
    description: "Clear Air Mode - 12 cuts through 6.4°",
    steps: VCP_35_STEPS,
};

/// VCP 215 - Precipitation Mode (most common)
/// 18 steps, six velocity-only cuts above 6.4°
static VCP_215_STEPS: &[ScanStep] = &[
    ScanStep::z("0.5°", -0.19, 250.0),
    ScanStep::v("0.5°", -0.29, 74.0),
    ScanStep::z("0.9°", -0.22, 250.0),
    ScanStep::v("0.9°", -0.29, 74.0),
    ScanStep::z("1.3°", -0.26, 231.0),
    ScanStep::v("1.3°", -0.29, 74.0),
    ScanStep::zv("1.8°", -0.29, 208.0, 80.0),
    ScanStep::zv("2.4°", -0.33, 181.0, 80.0),
    ScanStep::zv("3.1°", -0.33, 158.0, 80.0),
    ScanStep::zv("4.0°", -0.33, 134.0, 80.0),
    ScanStep::zv("5.1°", -0.33, 134.0, 80.0),
    ScanStep::zv("6.4°", -0.33, 134.0, 80.0),
    ScanStep::v("8.0°", -0.43, 63.0),
    ScanStep::v("10.0°", -0.43, 63.0),
    ScanStep::v("12.0°", -0.43, 63.0),
    ScanStep::v("14.0°", -0.43, 63.0),
    ScanStep::v("16.7°", -0.43, 63.0),
    ScanStep::v("19.5°", -0.43, 63.0),
];

static VCP_215: VcpDefinition = VcpDefinition {
    number: 215,
    name: "Precipitation",
    description: "Precipitation Mode - 18 cuts through 19.5°",
    steps: VCP_215_STEPS,
};

/// VCP 12 - Precipitation Mode (severe weather)
/// 17 steps, five velocity-only cuts above 6.4°
static VCP_12_STEPS: &[ScanStep] = &[
    ScanStep::z("0.5°", -0.35, 250.0),
    ScanStep::v("0.5°", -0.40, 80.0),
    ScanStep::z("0.9°", -0.35, 250.0),
    ScanStep::v("0.9°", -0.40, 80.0),
    ScanStep::z("1.3°", -0.38, 231.0),
    ScanStep::v("1.3°", -0.40, 80.0),
    ScanStep::zv("1.8°", -0.43, 208.0, 80.0),
    ScanStep::zv("2.4°", -0.43, 181.0, 80.0),
    ScanStep::zv("3.1°", -0.43, 158.0, 80.0),
    ScanStep::zv("4.0°", -0.46, 134.0, 80.0),
    ScanStep::zv("5.1°", -0.43, 134.0, 80.0),
    ScanStep::zv("6.4°", -0.43, 134.0, 80.0),
    ScanStep::v("8.0°", -0.46, 74.0),
    ScanStep::v("10.0°", -0.46, 68.0),
    ScanStep::v("12.5°", -0.46, 63.0),
    ScanStep::v("15.6°", -0.46, 63.0),
    ScanStep::v("19.5°", -0.46, 63.0),
];

static VCP_12: VcpDefinition = VcpDefinition {
    number: 12,
    name: "Severe Precip",
    description: "Precipitation Mode (Severe) - 17 cuts through 19.5°",
    steps: VCP_12_STEPS,
};

/// Get the VCP definition for a given pattern
pub fn get_vcp_definition(vcp: VcpName) -> &'static VcpDefinition {
    match vcp {
        VcpName::Vcp12 => &VCP_12,
        VcpName::Vcp35 => &VCP_35,
        VcpName::Vcp212 => &VCP_212,
        VcpName::Vcp215 => &VCP_215,
    }
}

/// Fresh copy of a pattern's steps; callers own the result outright.
pub fn base_pattern(vcp: VcpName) -> Vec<ScanStep> {
    get_vcp_definition(vcp).steps.to_vec()
}

/// Look up a pattern by display label. Unknown labels yield an empty pattern.
pub fn base_pattern_by_label(label: &str) -> Vec<ScanStep> {
    VcpName::from_label(label)
        .map(base_pattern)
        .unwrap_or_default()
}
