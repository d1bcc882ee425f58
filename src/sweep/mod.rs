//! Sweep animation: the state machine, its tick clock, and the controls
//! boundary used by the view.

mod controller;
mod machine;
mod scheduler;

pub use controller::{SelectionAffordance, SweepController};
pub use machine::{
    Cone, Phase, SweepMachine, SweepState, TickOutcome, DUAL_CONE_OFFSET, END_ANGLE,
    INCREMENT_SCALE, START_ANGLE,
};
pub use scheduler::{FrameScheduler, ManualScheduler, Scheduler, TICK_PERIOD};
