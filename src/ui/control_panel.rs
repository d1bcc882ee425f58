//! Right panel UI: pattern buttons, insert options, speed and run controls.

use super::colors;
use crate::VcpAnimatorApp;
use eframe::egui::{self, RichText};
use radar_vcp_animator::state::{MrleChoice, VcpName};

const BUTTON_SIZE: [f32; 2] = [140.0, 32.0];

pub fn render_control_panel(ctx: &egui::Context, app: &mut VcpAnimatorApp) {
    egui::SidePanel::right("control_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("VCP Patterns");
            ui.separator();

            render_pattern_section(ui, app);
            ui.add_space(5.0);

            render_options_section(ui, app);
            ui.add_space(5.0);

            render_playback_section(ui, app);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(10.0);
                ui.hyperlink_to(
                    RichText::new("More Info").size(14.0),
                    &app.settings.more_info_url,
                );
            });
        });
}

fn render_pattern_section(ui: &mut egui::Ui, app: &mut VcpAnimatorApp) {
    let selected = app.controller.machine().state().selected_vcp;

    ui.vertical_centered(|ui| {
        for vcp in VcpName::all() {
            let text = RichText::new(vcp.label()).size(16.0).strong();
            let button = egui::Button::new(text).selected(selected == Some(*vcp));
            if ui.add_sized(BUTTON_SIZE, button).clicked() {
                app.controller.on_vcp_chosen(*vcp);
                app.set_status(format!("{} loaded", vcp.label()));
            }
        }
    });
}

fn render_options_section(ui: &mut egui::Ui, app: &mut VcpAnimatorApp) {
    let affordance = app.controller.affordance();
    let state = app.controller.machine().state();
    let mut sails = state.sails;
    let mut mrle = state.mrle;

    egui::CollapsingHeader::new(RichText::new("Options").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.label(RichText::new("SAILS").small().color(colors::ui::LABEL));
            ui.add_enabled_ui(affordance.sails_enabled, |ui| {
                egui::ComboBox::from_id_salt("sails_selector")
                    .selected_text(sails.label())
                    .width(140.0)
                    .show_ui(ui, |ui| {
                        for choice in affordance.sails_choices {
                            ui.selectable_value(&mut sails, *choice, choice.label());
                        }
                    });
            });

            ui.add_space(5.0);

            ui.label(RichText::new("MRLE").small().color(colors::ui::LABEL));
            ui.add_enabled_ui(affordance.mrle_enabled, |ui| {
                egui::ComboBox::from_id_salt("mrle_selector")
                    .selected_text(mrle.label())
                    .width(140.0)
                    .show_ui(ui, |ui| {
                        for choice in MrleChoice::all() {
                            ui.selectable_value(&mut mrle, *choice, choice.label());
                        }
                    });
            });
        });

    if sails != app.controller.machine().state().sails {
        app.choose_sails(sails);
    } else if mrle != app.controller.machine().state().mrle {
        app.choose_mrle(mrle);
    }
}

fn render_playback_section(ui: &mut egui::Ui, app: &mut VcpAnimatorApp) {
    let machine = app.controller.machine();
    let speed = machine.state().speed;
    let running = machine.is_running();
    let progress = machine.sequence_progress() as f32;
    let run_enabled = app.controller.affordance().run_enabled;

    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Speed").size(14.0));
        let speed_button = egui::Button::new(RichText::new(speed.label()).size(16.0).strong());
        if ui.add_sized(BUTTON_SIZE, speed_button).clicked() {
            let speed = app.controller.on_speed_cycle();
            app.set_status(format!("Speed {}", speed.label()));
        }

        ui.add_space(10.0);

        let (label, color) = if running {
            ("Stop", colors::ui::ACTIVE)
        } else {
            ("Run", ui.visuals().text_color())
        };
        let run_button = egui::Button::new(RichText::new(label).size(16.0).strong().color(color));
        if ui
            .add_enabled(run_enabled, run_button.min_size(BUTTON_SIZE.into()))
            .clicked()
        {
            match app.controller.on_run_toggle() {
                Ok(true) => app.set_status("Running"),
                Ok(false) => app.set_status("Stopped"),
                Err(e) => app.set_warning(e.to_string()),
            }
        }

        ui.add_space(5.0);
        ui.add(egui::ProgressBar::new(progress).desired_width(BUTTON_SIZE[0]));
    });
}
