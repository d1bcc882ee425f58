//! Top bar UI: pattern title, current step, and status.

use super::colors;
use crate::VcpAnimatorApp;
use eframe::egui::{self, Color32, RichText};
use radar_vcp_animator::state::get_vcp_definition;

pub fn render_top_bar(ctx: &egui::Context, app: &VcpAnimatorApp) {
    let machine = app.controller.machine();

    egui::TopBottomPanel::top("top_bar")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                match machine.state().selected_vcp {
                    Some(vcp) => {
                        let definition = get_vcp_definition(vcp);
                        ui.label(
                            RichText::new(format!("{} - {}", vcp.label(), definition.name))
                                .strong()
                                .size(20.0)
                                .color(Color32::WHITE),
                        )
                        .on_hover_text(definition.description);
                    }
                    None => {
                        ui.label(RichText::new("VCP").strong().size(20.0).color(Color32::WHITE));
                    }
                }

                ui.separator();

                if let Some(step) = machine.current_step() {
                    ui.label(
                        RichText::new(format!(
                            "Step {}/{}",
                            machine.state().step_index + 1,
                            machine.state().sequence.len()
                        ))
                        .monospace()
                        .size(12.0)
                        .color(colors::ui::LABEL),
                    );
                    ui.label(
                        RichText::new(format!("{} {}", step.label().label(), step.elevation()))
                            .monospace()
                            .size(12.0)
                            .color(colors::product_color(step.label())),
                    );
                    ui.separator();
                }

                let color = if app.status_is_warning {
                    colors::ui::WARNING
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&app.status_message).size(13.0).color(color));
            });
        });
}
