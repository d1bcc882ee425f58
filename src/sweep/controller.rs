//! Boundary between the sweep machine and the view layer.
//!
//! The view forwards user events here and reads back which controls should
//! be enabled. Ticks are pulled with [`SweepController::pump`], which re-arms
//! the scheduler only while the machine is still running.

use super::machine::{Phase, SweepMachine, TickOutcome};
use super::scheduler::{Scheduler, TICK_PERIOD};
use crate::error::SweepError;
use crate::state::{MrleChoice, SailsChoice, SpeedMultiplier, VcpName};

/// Which selection controls the view should offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionAffordance {
    pub sails_enabled: bool,
    pub mrle_enabled: bool,
    /// SAILS options to list for the selected pattern.
    pub sails_choices: &'static [SailsChoice],
    pub run_enabled: bool,
}

impl Default for SelectionAffordance {
    fn default() -> Self {
        Self {
            sails_enabled: false,
            mrle_enabled: false,
            sails_choices: SailsChoice::all(),
            run_enabled: false,
        }
    }
}

pub struct SweepController<S: Scheduler> {
    machine: SweepMachine,
    scheduler: S,
    affordance: SelectionAffordance,
}

impl<S: Scheduler> SweepController<S> {
    pub fn new(scheduler: S) -> Self {
        Self::with_machine(SweepMachine::new(), scheduler)
    }

    pub fn with_machine(machine: SweepMachine, scheduler: S) -> Self {
        Self {
            machine,
            scheduler,
            affordance: SelectionAffordance::default(),
        }
    }

    pub fn machine(&self) -> &SweepMachine {
        &self.machine
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn affordance(&self) -> SelectionAffordance {
        self.affordance
    }

    pub fn on_vcp_chosen(&mut self, vcp: VcpName) -> SelectionAffordance {
        self.machine.select_vcp(vcp);
        self.scheduler.cancel();
        self.affordance = SelectionAffordance {
            sails_enabled: true,
            mrle_enabled: vcp.supports_mrle(),
            sails_choices: vcp.sails_choices(),
            run_enabled: true,
        };
        self.affordance
    }

    pub fn on_sails_chosen(&mut self, choice: SailsChoice) -> SelectionAffordance {
        if !self.affordance.sails_enabled {
            return self.affordance;
        }
        let Some(vcp) = self.machine.state().selected_vcp else {
            return self.affordance;
        };

        self.machine.select_sails(choice);
        self.scheduler.cancel();
        // MRLE comes back only where the pattern allows it
        self.affordance.mrle_enabled = choice.is_none() && vcp.supports_mrle();
        self.affordance
    }

    pub fn on_mrle_chosen(&mut self, choice: MrleChoice) -> SelectionAffordance {
        if self.machine.phase() == Phase::Idle || !self.affordance.mrle_enabled {
            return self.affordance;
        }

        self.machine.select_mrle(choice);
        self.scheduler.cancel();
        self.affordance.sails_enabled = choice.is_none();
        self.affordance
    }

    /// Start or stop the sweep. Returns the running flag for the button label.
    pub fn on_run_toggle(&mut self) -> Result<bool, SweepError> {
        let running = self.machine.toggle_run()?;
        if running {
            self.scheduler.schedule_after(TICK_PERIOD);
        } else {
            self.scheduler.cancel();
        }
        Ok(running)
    }

    /// Cycle the speed multiplier and return the new one for display.
    pub fn on_speed_cycle(&mut self) -> SpeedMultiplier {
        self.machine.cycle_speed()
    }

    /// Apply a startup speed without cycling through the others.
    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.machine.set_speed(speed);
    }

    /// Fire the pending tick if it is due.
    pub fn pump(&mut self) -> Option<TickOutcome> {
        if !self.scheduler.take_due() {
            return None;
        }

        let outcome = self.machine.tick();
        if self.machine.is_running() {
            self.scheduler.schedule_after(TICK_PERIOD);
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StepLabel;
    use crate::sweep::scheduler::ManualScheduler;

    fn controller() -> SweepController<ManualScheduler> {
        SweepController::new(ManualScheduler::new())
    }

    fn step(controller: &mut SweepController<ManualScheduler>) -> Option<TickOutcome> {
        controller.scheduler_mut().advance(TICK_PERIOD);
        controller.pump()
    }

    #[test]
    fn test_idle_affordance() {
        let mut controller = controller();
        let affordance = controller.on_sails_chosen(SailsChoice::Sails1);
        assert!(!affordance.run_enabled);
        assert!(!affordance.sails_enabled);
        assert_eq!(controller.machine().state().sails, SailsChoice::None);
        assert_eq!(controller.on_run_toggle(), Err(SweepError::NoVcpSelected));
        assert!(!controller.scheduler().is_armed());
    }

    #[test]
    fn test_vcp35_restricts_choices() {
        let mut controller = controller();
        let affordance = controller.on_vcp_chosen(VcpName::Vcp35);
        assert!(affordance.sails_enabled);
        assert!(!affordance.mrle_enabled);
        assert_eq!(
            affordance.sails_choices,
            &[SailsChoice::None, SailsChoice::Sails1]
        );

        let affordance = controller.on_sails_chosen(SailsChoice::None);
        assert!(!affordance.mrle_enabled);
    }

    #[test]
    fn test_sails_disables_mrle_until_cleared() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp212);

        let affordance = controller.on_sails_chosen(SailsChoice::Sails2);
        assert!(!affordance.mrle_enabled);

        // disabled control is ignored
        controller.on_mrle_chosen(MrleChoice::Mrle4);
        assert_eq!(controller.machine().state().mrle, MrleChoice::None);

        let affordance = controller.on_sails_chosen(SailsChoice::None);
        assert!(affordance.mrle_enabled);
    }

    #[test]
    fn test_mrle_disables_sails() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp12);
        controller.on_sails_chosen(SailsChoice::Sails1);
        controller.on_sails_chosen(SailsChoice::None);

        let affordance = controller.on_mrle_chosen(MrleChoice::Mrle3);
        assert!(!affordance.sails_enabled);
        assert_eq!(controller.machine().state().sails, SailsChoice::None);

        let affordance = controller.on_mrle_chosen(MrleChoice::None);
        assert!(affordance.sails_enabled);
    }

    #[test]
    fn test_sails_ignored_while_mrle_active() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp12);
        controller.on_mrle_chosen(MrleChoice::Mrle3);

        let affordance = controller.on_sails_chosen(SailsChoice::Sails1);
        assert!(!affordance.sails_enabled);
        assert!(affordance.mrle_enabled);
        assert_eq!(controller.machine().state().sails, SailsChoice::None);
        assert_eq!(controller.machine().state().mrle, MrleChoice::Mrle3);

        // clearing MRLE hands control back to SAILS
        let affordance = controller.on_mrle_chosen(MrleChoice::None);
        assert!(affordance.sails_enabled);
        controller.on_sails_chosen(SailsChoice::Sails1);
        assert_eq!(controller.machine().state().sails, SailsChoice::Sails1);
    }

    #[test]
    fn test_ticks_follow_fixed_period() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp12);
        assert_eq!(controller.on_run_toggle(), Ok(true));

        controller
            .scheduler_mut()
            .advance(TICK_PERIOD - std::time::Duration::from_millis(1));
        assert_eq!(controller.pump(), None);

        controller
            .scheduler_mut()
            .advance(std::time::Duration::from_millis(1));
        assert_eq!(controller.pump(), Some(TickOutcome::Swept));
        assert!((controller.machine().angle() - 88.25).abs() < 1e-9);

        // one tick per period even if the frame was late
        controller.scheduler_mut().advance(TICK_PERIOD * 4);
        assert_eq!(controller.pump(), Some(TickOutcome::Swept));
        assert_eq!(controller.pump(), None);
    }

    #[test]
    fn test_stop_prevents_rearm() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp215);
        controller.on_run_toggle().unwrap();
        step(&mut controller);
        let angle = controller.machine().angle();

        assert_eq!(controller.on_run_toggle(), Ok(false));
        assert!(!controller.scheduler().is_armed());
        assert_eq!(step(&mut controller), None);
        assert!((controller.machine().angle() - angle).abs() < 1e-9);
    }

    #[test]
    fn test_selection_while_running_stops() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp212);
        controller.on_run_toggle().unwrap();
        step(&mut controller);

        controller.on_sails_chosen(SailsChoice::Sails3);
        assert_eq!(controller.machine().phase(), Phase::Stopped);
        assert!(!controller.scheduler().is_armed());
        assert_eq!(controller.machine().state().sequence.len(), 23);
    }

    #[test]
    fn test_completion_stops_scheduling() {
        let mut controller = controller();
        controller.on_vcp_chosen(VcpName::Vcp12);
        controller.on_speed_cycle();
        controller.on_speed_cycle();
        assert_eq!(controller.on_speed_cycle(), SpeedMultiplier::Octuple);
        controller.on_run_toggle().unwrap();

        let mut last = None;
        while controller.scheduler().is_armed() {
            last = step(&mut controller);
        }
        assert_eq!(last, Some(TickOutcome::SequenceCompleted));
        assert!(!controller.machine().is_running());
        assert_eq!(controller.machine().state().step_index, 0);
        assert_eq!(controller.machine().current_label(), Some(StepLabel::Z));
    }
}
