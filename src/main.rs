#![warn(clippy::all)]

//! Radar VCP Animator - desktop front end.
//!
//! Shows a radar antenna sweeping through the elevation cuts of a volume
//! coverage pattern, optionally with SAILS or MRLE low-level inserts.

mod ui;

use eframe::egui;
use radar_vcp_animator::state::{AppSettings, MrleChoice, SailsChoice};
use radar_vcp_animator::sweep::{FrameScheduler, Scheduler, SweepController, TickOutcome};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Radar VCP Animation")
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([600.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Radar VCP Animation",
        native_options,
        Box::new(|cc| Ok(Box::new(VcpAnimatorApp::new(cc)))),
    )
}

/// Main application state and logic.
pub struct VcpAnimatorApp {
    /// Sweep machine and its frame-driven tick clock
    controller: SweepController<FrameScheduler>,

    /// Startup settings (canvas layout, links)
    settings: AppSettings,

    /// Status message displayed in the top bar
    status_message: String,

    /// Whether the status message reports a refused action
    status_is_warning: bool,
}

impl VcpAnimatorApp {
    /// Creates a new VcpAnimatorApp instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(AppSettings::load())
    }

    fn with_settings(settings: AppSettings) -> Self {
        let mut controller = SweepController::new(FrameScheduler::new());
        controller.set_speed(settings.initial_speed);

        let status_message = match settings.initial_vcp {
            Some(vcp) => {
                controller.on_vcp_chosen(vcp);
                format!("{} loaded", vcp.label())
            }
            None => "Select a VCP".to_string(),
        };

        Self {
            controller,
            settings,
            status_message,
            status_is_warning: false,
        }
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_warning = false;
    }

    pub(crate) fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_warning = true;
    }

    /// Forward a SAILS pick and report what the machine actually applied.
    pub(crate) fn choose_sails(&mut self, choice: SailsChoice) {
        self.controller.on_sails_chosen(choice);
        if self.controller.machine().state().sails == choice {
            self.set_status(format!("{} selected", choice.label()));
        } else {
            self.set_warning(format!("{} unavailable", choice.label()));
        }
    }

    /// Forward an MRLE pick and report what the machine actually applied.
    pub(crate) fn choose_mrle(&mut self, choice: MrleChoice) {
        self.controller.on_mrle_chosen(choice);
        if self.controller.machine().state().mrle == choice {
            self.set_status(format!("{} selected", choice.label()));
        } else {
            self.set_warning(format!("{} unavailable", choice.label()));
        }
    }

    /// Delay until the next tick is due, while the sweep is running.
    fn repaint_delay(&self) -> Option<Duration> {
        self.controller.scheduler().remaining()
    }
}

impl eframe::App for VcpAnimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.controller.pump() {
            Some(TickOutcome::SequenceCompleted) => self.set_status("Sequence complete"),
            Some(TickOutcome::Halted) => self.set_warning("Animation stopped"),
            _ => {}
        }

        // Side and top panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, self);
        ui::render_control_panel(ctx, self);
        ui::render_canvas(ctx, self);

        if let Some(remaining) = self.repaint_delay() {
            ctx.request_repaint_after(remaining);
        }
    }
}
