// src/ui/helpers.rs
use egui::{Color32, CornerRadius, Frame, Margin, ProgressBar, RichText, Sense, Stroke, Ui, Vec2};

/// Traduce el token de color de una categoría a un color concreto.
pub fn palette(token: &str) -> Color32 {
    match token {
        "primary" => Color32::from_rgb(59, 130, 246),
        "success" => Color32::from_rgb(34, 197, 94),
        "warning" => Color32::from_rgb(245, 158, 11),
        "secondary" => Color32::from_rgb(139, 92, 246),
        "accent" => Color32::from_rgb(14, 165, 233),
        "destructive" => Color32::from_rgb(239, 68, 68),
        _ => Color32::GRAY,
    }
}

/// Mismo color con transparencia, para fondos suaves.
pub fn tint(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Tarjeta con borde del color de la categoría.
pub fn card_frame(ui: &Ui, accent: Color32) -> Frame {
    Frame::default()
        .fill(ui.visuals().window_fill())
        .stroke(Stroke::new(1.5, tint(accent, 90)))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(16, 14))
}

/// "Pastilla" de la cabecera: icono + número.
pub fn stat_chip(ui: &mut Ui, icon: &str, value: String, color: Color32) {
    Frame::default()
        .fill(tint(color, 40))
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::symmetric(12, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("{icon} {value}")).strong());
        });
}

pub fn progress_bar(ui: &mut Ui, fraction: f32, height: f32, color: Color32) {
    ui.add(
        ProgressBar::new(fraction.clamp(0.0, 1.0))
            .desired_height(height)
            .fill(color),
    );
}

/// Puntos de posición de la lección; el actual se dibuja alargado.
pub fn slide_dots(ui: &mut Ui, total: usize, current: usize, active: Color32) {
    ui.horizontal(|ui| {
        for i in 0..total {
            let width = if i == current { 24.0 } else { 10.0 };
            let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 10.0), Sense::hover());
            let color = if i == current {
                active
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };
            ui.painter().rect_filled(rect, 5.0, color);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tokens_fall_back_to_gray() {
        assert_eq!(palette("nope"), Color32::GRAY);
        assert_ne!(palette("success"), palette("warning"));
    }

    #[test]
    fn tint_keeps_rgb() {
        let c = tint(Color32::from_rgb(10, 20, 30), 255);
        assert_eq!((c.r(), c.g(), c.b()), (10, 20, 30));
    }
}
