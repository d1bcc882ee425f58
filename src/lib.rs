//! Radar VCP Animator - an animated view of NEXRAD volume coverage patterns.
//!
//! The library holds the animation core: the pattern catalog, the SAILS and
//! MRLE insert logic, and the sweep state machine. The desktop front end in
//! `main.rs` only forwards user events and paints what the core reports.

pub mod error;
pub mod state;
pub mod sweep;

pub use error::SweepError;
