//! UI modules for the VCP animator.
//!
//! The UI is split into distinct panels:
//! - Top bar: Pattern title, current step, and status
//! - Right panel: Pattern, insert, speed and run controls
//! - Central canvas: Range rings and beam cones

mod canvas;
mod colors;
mod control_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use control_panel::render_control_panel;
pub use top_bar::render_top_bar;
