use super::helpers::{palette, progress_bar, stat_chip};
use crate::app::FinLearnApp;
use egui::{Align, Button, CentralPanel, Context, Frame, Layout, RichText, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &FinLearnApp, ctx: &Context) {
    let stats = app.header_stats();
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("📖 FinLearn").strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Orden invertido por el layout de derecha a izquierda
                ui.label(RichText::new(format!("🏆 {}", stats.level_label())).strong());
                stat_chip(ui, "💰", stats.tokens.to_string(), palette("accent"));
                stat_chip(ui, "🔥", stats.streak.to_string(), palette("warning"));
            });
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.small(stats.next_level_label());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.small(RichText::new(stats.xp_label()).strong());
            });
        });
        progress_bar(ui, stats.level_fraction, 10.0, palette("primary"));
        ui.add_space(6.0);
    });
}

pub fn bottom_panel(app: &mut FinLearnApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                app.config.dark_mode = true;
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                app.config.dark_mode = false;
                ctx.set_visuals(Visuals::light());
            }
            if !app.message.is_empty() {
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    ui.label(&app.message);
                });
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 24))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll y ancho máximo, centrado horizontalmente.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                ui.set_max_width(w);
                ui.with_layout(Layout::top_down(Align::Min), |ui| {
                    ui.add_space(12.0);
                    inner(ui);
                    ui.add_space(12.0);
                });
            });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui.add_sized([btn_w, 40.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 40.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

/// Botón a ancho completo; `enabled == false` lo deja gris.
pub fn wide_button(ui: &mut Ui, label: impl Into<egui::WidgetText>, enabled: bool) -> bool {
    let width = ui.available_width();
    ui.add_enabled(enabled, Button::new(label).min_size(egui::vec2(width, 40.0)))
        .clicked()
}
