//! Central canvas UI: range rings, beam cones, and step readouts.

use super::colors;
use crate::VcpAnimatorApp;
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Sense, Stroke, Vec2};
use radar_vcp_animator::sweep::Cone;

pub fn render_canvas(ctx: &egui::Context, app: &VcpAnimatorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::canvas::BACKGROUND);

        let center = rect.center();
        let max_range = app.settings.max_range.max(1) as f32;
        // Leave room for ring labels and readouts
        let scale = (rect.width().min(rect.height()) * 0.5 - 40.0).max(10.0) / max_range;

        render_range_rings(&painter, center, scale, &app.settings.range_rings());

        for cone in app.controller.machine().cones() {
            render_cone(&painter, center, scale, &cone);
        }

        painter.circle_filled(center, 5.0, colors::canvas::CENTER_MARKER);

        render_readouts(&painter, rect, app);
    });
}

fn render_range_rings(painter: &Painter, center: Pos2, scale: f32, rings: &[u32]) {
    for &ring in rings {
        let radius = ring as f32 * scale;
        painter.circle_stroke(center, radius, Stroke::new(1.0, colors::canvas::RING));
        painter.text(
            center + Vec2::new(radius + 4.0, 0.0),
            Align2::LEFT_CENTER,
            ring.to_string(),
            FontId::proportional(10.0),
            colors::canvas::TEXT,
        );
    }
}

/// Point at `range` along `angle` (degrees counter-clockwise from east).
fn polar_to_screen(center: Pos2, angle: f64, range: f32) -> Pos2 {
    let rad = angle.to_radians() as f32;
    Pos2::new(center.x + range * rad.cos(), center.y - range * rad.sin())
}

fn render_cone(painter: &Painter, center: Pos2, scale: f32, cone: &Cone) {
    let range = cone.radius as f32 * scale;
    let points = vec![
        center,
        polar_to_screen(center, cone.center - cone.half_width, range),
        polar_to_screen(center, cone.center + cone.half_width, range),
    ];
    painter.add(egui::Shape::convex_polygon(
        points,
        colors::product_color(cone.product),
        Stroke::NONE,
    ));
}

fn render_readouts(painter: &Painter, rect: egui::Rect, app: &VcpAnimatorApp) {
    let machine = app.controller.machine();
    let font_id = FontId::proportional(24.0);

    let (label, color) = match machine.current_label() {
        Some(label) => (label.label(), colors::product_color(label)),
        None => ("Z", colors::canvas::TEXT),
    };
    painter.text(
        rect.left_bottom() + Vec2::new(16.0, -12.0),
        Align2::LEFT_BOTTOM,
        label,
        font_id.clone(),
        darken(color),
    );

    painter.text(
        rect.right_bottom() + Vec2::new(-16.0, -12.0),
        Align2::RIGHT_BOTTOM,
        machine.current_elevation_text().unwrap_or("0.5°"),
        font_id,
        colors::canvas::TEXT,
    );
}

/// Pastel product colors are hard to read as text on white.
fn darken(color: Color32) -> Color32 {
    Color32::from_rgb(
        (color.r() as f32 * 0.7) as u8,
        (color.g() as f32 * 0.7) as u8,
        (color.b() as f32 * 0.7) as u8,
    )
}
