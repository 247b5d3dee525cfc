use crate::app::FinLearnApp;
use crate::model::CategoryId;
use crate::ui::helpers::{card_frame, palette, progress_bar, tint};
use crate::ui::layout::scroll_panel;
use crate::view_models::CategoryCard;
use egui::{Align, Button, Context, Frame, Layout, RichText, Ui};

const BADGES: [&str; 3] = ["🎯 Quick Learner", "🔥 7 Day Streak", "💪 Budget Master"];
const CARD_WIDTH: f32 = 230.0;

pub fn ui_dashboard(app: &mut FinLearnApp, ctx: &Context) {
    let cards = app.category_cards();
    let mut clicked: Option<CategoryId> = None;

    scroll_panel(ctx, 1040.0, |ui| {
        achievements_banner(ui);
        ui.add_space(20.0);

        ui.heading(RichText::new("Your Learning Path").size(26.0).strong());
        ui.label("Master financial literacy one lesson at a time");
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for card in &cards {
                if category_card(ui, card) {
                    clicked = Some(card.id.clone());
                }
                ui.add_space(8.0);
            }
        });

        ui.add_space(20.0);
        daily_challenge(ui);
    });

    // Las bloqueadas nunca devuelven click, pero `open_category` vuelve a comprobarlo
    if let Some(id) = clicked {
        app.open_category(&id);
    }
}

fn achievements_banner(ui: &mut Ui) {
    let accent = palette("primary");
    Frame::default()
        .fill(tint(accent, 25))
        .stroke(egui::Stroke::new(2.0, tint(accent, 60)))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(20, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("🏅 Your Achievements").size(20.0).strong());
                    ui.label("Keep learning to unlock more badges!");
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    for badge in BADGES.iter().rev() {
                        Frame::default()
                            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color))
                            .corner_radius(egui::CornerRadius::same(8))
                            .inner_margin(egui::Margin::symmetric(10, 6))
                            .show(ui, |ui| {
                                ui.label(RichText::new(*badge).size(16.0));
                            });
                    }
                });
            });
        });
}

/// Pinta una tarjeta de categoría. Devuelve `true` si se pulsó una desbloqueada.
fn category_card(ui: &mut Ui, card: &CategoryCard) -> bool {
    let color = palette(&card.color);
    let mut clicked = false;

    card_frame(ui, color).show(ui, |ui| {
        if card.locked {
            ui.multiply_opacity(0.6);
        }
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.icon).size(34.0));
                if let Some(badge) = card.cost_badge() {
                    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                        Frame::default()
                            .fill(if card.locked {
                                ui.visuals().widgets.inactive.bg_fill
                            } else {
                                tint(palette("primary"), 80)
                            })
                            .corner_radius(egui::CornerRadius::same(8))
                            .inner_margin(egui::Margin::symmetric(8, 2))
                            .show(ui, |ui| {
                                ui.small(badge);
                            });
                    });
                }
            });
            ui.add_space(6.0);
            ui.label(RichText::new(&card.title).size(18.0).strong());
            ui.small(&card.description);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.small(card.lessons_label());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.small(RichText::new(card.percent_label()).strong());
                });
            });
            progress_bar(ui, card.percent / 100.0, 8.0, color);
            ui.add_space(8.0);

            let button = Button::new(card.button_label())
                .min_size(egui::vec2(ui.available_width(), 34.0));
            let response = ui.add_enabled(!card.locked, button);
            if response.clicked() && !card.locked {
                clicked = true;
            }
        });
    });

    clicked
}

fn daily_challenge(ui: &mut Ui) {
    let accent = palette("accent");
    Frame::default()
        .fill(tint(accent, 25))
        .stroke(egui::Stroke::new(2.0, tint(accent, 60)))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(20, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("🎯 Daily Challenge").size(22.0).strong());
                    ui.label("Complete today's challenge to earn bonus tokens!");
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("Challenge: Complete 3 lessons without mistakes").strong(),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("+50").size(32.0).strong().color(accent));
                        ui.small("💰 Tokens");
                    });
                });
            });
        });
}
