//! Pattern data and selection state.
//!
//! This module holds the plain data the sweep machine works on: scan step
//! descriptors, the pattern catalog, the supplemental insert logic, and the
//! speed and startup settings.

pub mod inserts;
mod playback;
pub mod scan_step;
mod settings;
pub mod vcp;

pub use inserts::{apply_inserts, find_last_step_with_angle, MrleChoice, SailsChoice};
pub use playback::SpeedMultiplier;
pub use scan_step::{ConeRange, ScanStep, StepLabel};
pub use settings::AppSettings;
pub use vcp::{base_pattern, base_pattern_by_label, get_vcp_definition, VcpDefinition, VcpName};
