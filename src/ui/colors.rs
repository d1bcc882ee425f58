//! Centralized color constants for the UI.
//!
//! This module provides consistent colors across the panels and the canvas.

use eframe::egui::Color32;
use radar_vcp_animator::state::StepLabel;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for readout labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Emphasized color for the running state.
    pub const ACTIVE: Color32 = Color32::from_rgb(100, 180, 255);
    /// Warning text in the status line.
    pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);
}

/// Fill colors for the beam cones, one per product.
pub mod product {
    use super::Color32;

    /// Reflectivity.
    pub const Z: Color32 = Color32::from_rgb(0x73, 0x94, 0xBA);
    /// Velocity.
    pub const V: Color32 = Color32::from_rgb(0xD3, 0x94, 0x94);
    /// Split cut. Split cuts paint as separate Z and V cones, so this only
    /// appears in text.
    pub const ZV: Color32 = Color32::from_rgb(0x80, 0x5C, 0x92);
}

/// Colors for the radar canvas.
pub mod canvas {
    use super::Color32;

    /// Background color.
    pub const BACKGROUND: Color32 = Color32::WHITE;
    /// Range rings.
    pub const RING: Color32 = Color32::GRAY;
    /// Range ring labels and readouts.
    pub const TEXT: Color32 = Color32::BLACK;
    /// Center marker (radar site).
    pub const CENTER_MARKER: Color32 = Color32::BLACK;
}

pub fn product_color(label: StepLabel) -> Color32 {
    match label {
        StepLabel::Z => product::Z,
        StepLabel::V => product::V,
        StepLabel::ZV => product::ZV,
    }
}
