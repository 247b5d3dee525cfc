use crate::app::FinLearnApp;
use crate::markup::{Block, parse_blocks};
use crate::model::AppState;
use crate::ui::helpers::{card_frame, palette, progress_bar, slide_dots, tint};
use crate::ui::layout::scroll_panel;
use egui::{Align, Button, Context, Frame, Layout, RichText, Ui};

#[derive(Clone, Copy, PartialEq, Eq)]
enum LessonClick {
    Back,
    Previous,
    Next,
}

pub fn ui_lesson(app: &mut FinLearnApp, ctx: &Context) {
    let (index, total, is_last, progress) = match &app.state {
        AppState::Lesson { walker, .. } => {
            (walker.current(), walker.len(), walker.is_last(), walker.progress())
        }
        _ => return,
    };
    let Some(category) = app.current_category().cloned() else {
        // Sin categoría no hay nada que pintar
        app.back_to_dashboard();
        return;
    };
    let slide = match app.content.lessons_for(&category.id).get(index) {
        Some(s) => s.clone(),
        None => {
            app.back_to_dashboard();
            return;
        }
    };
    let color = palette(&category.color);
    let mut click = None;

    scroll_panel(ctx, 860.0, |ui| {
        if ui.button("⬅ Back to Dashboard").clicked() {
            click = Some(LessonClick::Back);
        }
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            Frame::default()
                .fill(tint(color, 200))
                .corner_radius(egui::CornerRadius::same(14))
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.label(RichText::new(&category.icon).size(36.0));
                });
            ui.vertical(|ui| {
                ui.label(RichText::new(&category.title).size(28.0).strong());
                ui.label(format!("Lesson {} of {}", index + 1, total));
            });
        });
        ui.add_space(8.0);
        progress_bar(ui, progress, 12.0, palette("primary"));
        ui.add_space(16.0);

        card_frame(ui, color).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("{}. {}", index + 1, slide.title))
                    .size(26.0)
                    .strong(),
            );
            ui.add_space(12.0);
            for block in parse_blocks(&slide.content) {
                render_block(ui, &block);
            }
        });
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            let prev = ui.add_enabled(index > 0, Button::new("⬅ Previous").min_size(egui::vec2(120.0, 38.0)));
            if prev.clicked() {
                click = Some(LessonClick::Previous);
            }
            ui.add_space(12.0);
            slide_dots(ui, total, index, palette("primary"));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let label = if is_last { "Complete ✅" } else { "Next ➡" };
                let next = Button::new(RichText::new(label).strong())
                    .fill(tint(palette("primary"), 160))
                    .min_size(egui::vec2(120.0, 38.0));
                if ui.add(next).clicked() {
                    click = Some(LessonClick::Next);
                }
            });
        });
    });

    match click {
        Some(LessonClick::Back) => app.lesson_back(),
        Some(LessonClick::Previous) => app.lesson_previous(),
        Some(LessonClick::Next) => app.lesson_next(),
        None => {}
    }
}

fn render_block(ui: &mut Ui, block: &Block) {
    match block {
        Block::Subheading(text) => {
            ui.add_space(10.0);
            ui.label(RichText::new(text).size(20.0).strong());
            ui.add_space(4.0);
        }
        Block::List(items) => {
            for item in items {
                ui.horizontal_wrapped(|ui| {
                    ui.add_space(18.0);
                    ui.label(RichText::new("●").color(palette("primary")));
                    ui.label(item);
                });
            }
            ui.add_space(8.0);
        }
        Block::Callout(text) => {
            let accent = palette("primary");
            Frame::default()
                .fill(tint(accent, 30))
                .stroke(egui::Stroke::new(1.0, accent))
                .corner_radius(egui::CornerRadius::same(4))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(text).italics());
                });
            ui.add_space(8.0);
        }
        Block::Plain(text) => {
            ui.label(text);
            ui.add_space(8.0);
        }
    }
}
