use crate::app::FinLearnApp;
use crate::ui::helpers::{palette, tint};
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, Frame, RichText};

pub fn ui_results(app: &mut FinLearnApp, ctx: &Context) {
    let Some(results) = app.quiz_results() else {
        return;
    };
    let accent = if results.passed() { palette("success") } else { palette("warning") };
    let mut finish = false;
    let mut back = false;

    centered_panel(ctx, 520.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(tint(accent, 50))
                .corner_radius(egui::CornerRadius::same(48))
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.label(RichText::new("🏆").size(44.0).color(accent));
                });
            ui.add_space(16.0);
            ui.label(RichText::new(results.heading()).size(32.0).strong());
            ui.add_space(10.0);
            ui.label(RichText::new(results.score_label()).size(22.0).strong());
            ui.add_space(10.0);
            ui.label(results.message());
            ui.add_space(18.0);

            Frame::default()
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(results.tokens_label()).size(28.0).strong());
                        ui.label("Tokens Earned");
                    });
                });
            ui.add_space(18.0);

            let width = ui.available_width();
            (finish, back) = two_button_row(ui, width, results.primary_button(), "Back to Dashboard");
        });
    });

    if finish {
        app.quiz_finish();
    } else if back {
        app.quiz_back();
    }
}
