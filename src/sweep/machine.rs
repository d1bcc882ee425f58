//! Sweep state machine.
//!
//! Owns the active pattern sequence and drives the beam through it one tick
//! at a time. Every step is a full 360° traversal that starts at 90° and
//! ends once the angle reaches -270°, after which the next step is loaded.
//! One pass through the sequence stops the animation.

use crate::error::SweepError;
use crate::state::{
    apply_inserts, base_pattern, ConeRange, MrleChoice, SailsChoice, ScanStep, SpeedMultiplier,
    StepLabel, VcpName,
};

/// Angle at which every step begins.
pub const START_ANGLE: f64 = 90.0;
/// A step is complete once the angle reaches this value.
pub const END_ANGLE: f64 = -270.0;
/// Degrees swept per tick per unit of step speed.
pub const INCREMENT_SCALE: f64 = 5.0;
/// Angular bias of the Z and V cones of a split cut from the beam angle.
pub const DUAL_CONE_OFFSET: f64 = 4.0;

/// Coarse state of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No pattern chosen yet.
    Idle,
    /// Pattern loaded, not animating.
    Stopped,
    /// Actively sweeping.
    Running,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The machine was not running; nothing changed.
    Inactive,
    /// The beam moved within the current step.
    Swept,
    /// The current step completed and the given step was loaded.
    StepAdvanced(usize),
    /// The last step completed; the index wrapped to 0 and the run stopped.
    SequenceCompleted,
    /// Running without a valid step; the run was stopped.
    Halted,
}

/// A wedge to paint for the current beam position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cone {
    /// Center angle in degrees, counter-clockwise from east.
    pub center: f64,
    pub half_width: f64,
    pub radius: f64,
    /// `Z` or `V`; split cuts are painted as two cones.
    pub product: StepLabel,
}

/// Mutable animation state.
#[derive(Clone, Debug)]
pub struct SweepState {
    /// Active sequence, rebuilt on every selection change.
    pub sequence: Vec<ScanStep>,
    /// Index into `sequence` of the step being swept.
    pub step_index: usize,
    /// Beam angle in degrees.
    pub angle: f64,
    pub speed: SpeedMultiplier,
    pub running: bool,
    pub selected_vcp: Option<VcpName>,
    pub sails: SailsChoice,
    pub mrle: MrleChoice,
}

impl Default for SweepState {
    fn default() -> Self {
        Self {
            sequence: Vec::new(),
            step_index: 0,
            angle: START_ANGLE,
            speed: SpeedMultiplier::Normal,
            running: false,
            selected_vcp: None,
            sails: SailsChoice::None,
            mrle: MrleChoice::None,
        }
    }
}

/// Drives a [`SweepState`] through the selection and tick transitions.
pub struct SweepMachine {
    state: SweepState,
    catalog: fn(VcpName) -> Vec<ScanStep>,
}

impl Default for SweepMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepMachine {
    /// Create a machine backed by the built-in pattern catalog.
    pub fn new() -> Self {
        Self::with_catalog(base_pattern)
    }

    /// Create a machine that looks base patterns up through `catalog`.
    pub fn with_catalog(catalog: fn(VcpName) -> Vec<ScanStep>) -> Self {
        Self {
            state: SweepState::default(),
            catalog,
        }
    }

    pub fn state(&self) -> &SweepState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match (self.state.selected_vcp, self.state.running) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Stopped,
            (Some(_), true) => Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Choose a pattern. Clears both insert selections and stops any run.
    pub fn select_vcp(&mut self, vcp: VcpName) {
        log::info!("Selected {}", vcp.label());
        self.state.selected_vcp = Some(vcp);
        self.state.sails = SailsChoice::None;
        self.state.mrle = MrleChoice::None;
        self.rebuild();
    }

    /// Choose a SAILS option. A non-`None` choice clears MRLE.
    ///
    /// Ignored while no pattern is selected.
    pub fn select_sails(&mut self, choice: SailsChoice) {
        if self.state.selected_vcp.is_none() {
            log::warn!("Ignoring {}: no VCP selected", choice.label());
            return;
        }

        self.state.sails = choice;
        if !choice.is_none() {
            self.state.mrle = MrleChoice::None;
        }
        self.rebuild();
    }

    /// Choose an MRLE option. A non-`None` choice clears SAILS.
    ///
    /// Ignored while no pattern is selected, and rejected for patterns that
    /// do not support MRLE.
    pub fn select_mrle(&mut self, choice: MrleChoice) {
        let Some(vcp) = self.state.selected_vcp else {
            log::warn!("Ignoring {}: no VCP selected", choice.label());
            return;
        };
        if !choice.is_none() && !vcp.supports_mrle() {
            log::warn!("{} does not support {}", vcp.label(), choice.label());
            return;
        }

        self.state.mrle = choice;
        if !choice.is_none() {
            self.state.sails = SailsChoice::None;
        }
        self.rebuild();
    }

    /// Start or stop the animation, returning the new running flag.
    ///
    /// Starting always restarts from the first step. Stopping keeps the
    /// current step and angle.
    pub fn toggle_run(&mut self) -> Result<bool, SweepError> {
        if self.state.selected_vcp.is_none() {
            log::warn!("{}", SweepError::NoVcpSelected);
            return Err(SweepError::NoVcpSelected);
        }

        if self.state.running {
            self.state.running = false;
            log::info!(
                "Stopped at step {} ({:.1}°)",
                self.state.step_index,
                self.state.angle
            );
            return Ok(false);
        }

        if self.state.sequence.is_empty() {
            self.state.running = false;
            log::warn!("{}", SweepError::EmptySequence);
            return Err(SweepError::EmptySequence);
        }

        self.state.step_index = 0;
        self.state.angle = START_ANGLE;
        self.state.running = true;
        log::info!("Running {} steps", self.state.sequence.len());
        Ok(true)
    }

    /// Advance the beam by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::Inactive;
        }

        let Some(increment) = self.increment() else {
            log::warn!(
                "No step at index {} of {}, stopping",
                self.state.step_index,
                self.state.sequence.len()
            );
            self.state.running = false;
            self.state.step_index = 0;
            self.state.angle = START_ANGLE;
            return TickOutcome::Halted;
        };

        self.state.angle -= increment;
        if self.state.angle > END_ANGLE {
            return TickOutcome::Swept;
        }

        self.state.angle = START_ANGLE;
        self.state.step_index += 1;

        if self.state.step_index >= self.state.sequence.len() {
            self.state.step_index = 0;
            self.state.running = false;
            log::info!("Sequence complete");
            return TickOutcome::SequenceCompleted;
        }

        log::debug!(
            "Step {}: {} {}",
            self.state.step_index,
            self.state.sequence[self.state.step_index].label().label(),
            self.state.sequence[self.state.step_index].elevation()
        );
        TickOutcome::StepAdvanced(self.state.step_index)
    }

    /// Move to the next speed multiplier. Step and angle are untouched.
    pub fn cycle_speed(&mut self) -> SpeedMultiplier {
        self.state.speed = self.state.speed.next();
        log::debug!("Speed {}", self.state.speed.label());
        self.state.speed
    }

    /// Set the multiplier directly (used for startup settings).
    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.state.speed = speed;
    }

    pub fn current_step(&self) -> Option<&ScanStep> {
        self.state.sequence.get(self.state.step_index)
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn cone_half_width(&self) -> Option<f64> {
        self.current_step().map(|step| step.cone_width() / 2.0)
    }

    pub fn current_label(&self) -> Option<StepLabel> {
        self.current_step().map(|step| step.label())
    }

    pub fn current_elevation_text(&self) -> Option<&'static str> {
        self.current_step().map(|step| step.elevation())
    }

    pub fn render_geometry(&self) -> Option<ConeRange> {
        self.current_step().map(|step| step.range())
    }

    /// Signed speed of the current step scaled by the multiplier.
    pub fn effective_speed(&self) -> Option<f64> {
        self.current_step()
            .map(|step| step.speed() * f64::from(self.state.speed.factor()))
    }

    /// Degrees the beam moves on the next tick.
    pub fn increment(&self) -> Option<f64> {
        self.effective_speed()
            .map(|speed| speed.abs() * INCREMENT_SCALE)
    }

    /// Cones to paint at the current angle.
    pub fn cones(&self) -> Vec<Cone> {
        let Some(step) = self.current_step() else {
            return Vec::new();
        };
        let half_width = step.cone_width() / 2.0;
        let angle = self.state.angle;

        match step.range() {
            ConeRange::Single { range } => vec![Cone {
                center: angle,
                half_width,
                radius: range,
                product: step.label(),
            }],
            ConeRange::Dual { range_z, range_v } => vec![
                Cone {
                    center: angle - DUAL_CONE_OFFSET,
                    half_width,
                    radius: range_z,
                    product: StepLabel::Z,
                },
                Cone {
                    center: angle + DUAL_CONE_OFFSET,
                    half_width,
                    radius: range_v,
                    product: StepLabel::V,
                },
            ],
        }
    }

    /// Fraction (0.0 - 1.0) of the current step's traversal completed.
    pub fn step_progress(&self) -> f64 {
        ((START_ANGLE - self.state.angle) / (START_ANGLE - END_ANGLE)).clamp(0.0, 1.0)
    }

    /// Fraction (0.0 - 1.0) of the sequence completed.
    pub fn sequence_progress(&self) -> f64 {
        let len = self.state.sequence.len();
        if len == 0 {
            return 0.0;
        }
        ((self.state.step_index as f64 + self.step_progress()) / len as f64).clamp(0.0, 1.0)
    }

    /// Stop, rebuild the sequence from the current selections and rewind.
    fn rebuild(&mut self) {
        self.state.running = false;
        self.state.step_index = 0;
        self.state.angle = START_ANGLE;

        let Some(vcp) = self.state.selected_vcp else {
            self.state.sequence.clear();
            return;
        };

        self.state.sequence = apply_inserts(
            (self.catalog)(vcp),
            self.state.sails,
            self.state.mrle,
            vcp,
        );
        log::debug!(
            "Built {} sequence: {} steps ({}, MRLE {})",
            vcp.label(),
            self.state.sequence.len(),
            self.state.sails.label(),
            self.state.mrle.label()
        );
    }
}
