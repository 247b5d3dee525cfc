use crate::app::FinLearnApp;
use crate::model::AppState;
use crate::quiz::QuizPhase;
use crate::ui::helpers::{palette, progress_bar, tint};
use crate::ui::layout::{scroll_panel, wide_button};
use egui::{Align, Button, Context, Frame, Layout, RichText, Stroke};

enum QuizClick {
    Back,
    Select(usize),
    Submit,
    Next,
}

pub fn ui_quiz(app: &mut FinLearnApp, ctx: &Context) {
    let session = match &app.state {
        AppState::Quiz { session, .. } => session.clone(),
        _ => return,
    };
    let Some(question) = session.current_question().cloned() else {
        app.quiz_back();
        return;
    };
    let revealed = session.phase() == QuizPhase::Submitted;
    let mut click = None;

    scroll_panel(ctx, 760.0, |ui| {
        if ui.button("⬅ Back").clicked() {
            click = Some(QuizClick::Back);
        }
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Quiz Time!").size(28.0).strong());
                ui.label(format!(
                    "Question {} of {}",
                    session.current_index() + 1,
                    session.total()
                ));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{}/{}",
                            session.correct_count(),
                            session.answered_count()
                        ))
                        .size(22.0)
                        .strong(),
                    );
                    ui.small("Correct");
                });
            });
        });
        ui.add_space(8.0);
        progress_bar(ui, session.progress(), 12.0, palette("primary"));
        ui.add_space(16.0);

        ui.label(RichText::new(&question.question).size(22.0).strong());
        ui.add_space(14.0);

        // Opciones: resaltado de selección y, tras enviar, correcta/incorrecta
        for (i, option) in question.options.iter().enumerate() {
            let selected = session.selected() == Some(i);
            let is_correct = i == question.correct;
            let (fill, stroke, mark) = if revealed && is_correct {
                (tint(palette("success"), 45), palette("success"), " ✅")
            } else if revealed && selected {
                (tint(palette("destructive"), 45), palette("destructive"), " ❌")
            } else if selected {
                (tint(palette("primary"), 45), palette("primary"), "")
            } else {
                (ui.visuals().widgets.inactive.weak_bg_fill, ui.visuals().widgets.inactive.bg_stroke.color, "")
            };

            let button = Button::new(RichText::new(format!("{option}{mark}")).size(17.0))
                .fill(fill)
                .stroke(Stroke::new(2.0, stroke))
                .min_size(egui::vec2(ui.available_width(), 48.0));
            // Tras enviar, las opciones quedan fijas
            if ui.add_enabled(!revealed, button).clicked() {
                click = Some(QuizClick::Select(i));
            }
            ui.add_space(6.0);
        }
        ui.add_space(10.0);

        if revealed {
            let correct = session.last_answer_correct().unwrap_or(false);
            let accent = if correct { palette("success") } else { palette("warning") };
            Frame::default()
                .fill(tint(accent, 30))
                .stroke(Stroke::new(2.0, accent))
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let title = if correct { "✅ Correct! 🎉" } else { "❌ Not quite right" };
                    ui.label(RichText::new(title).size(18.0).strong());
                    ui.add_space(4.0);
                    ui.label(&question.explanation);
                });
            ui.add_space(12.0);

            let label = if session.is_last() { "See Results" } else { "Next Question" };
            if wide_button(ui, RichText::new(label).strong(), true) {
                click = Some(QuizClick::Next);
            }
        } else if wide_button(
            ui,
            RichText::new("Submit Answer").strong(),
            session.selected().is_some(),
        ) {
            click = Some(QuizClick::Submit);
        }
    });

    match click {
        Some(QuizClick::Back) => app.quiz_back(),
        Some(QuizClick::Select(i)) => app.quiz_select(i),
        Some(QuizClick::Submit) => app.quiz_submit(),
        Some(QuizClick::Next) => app.quiz_next(),
        None => {}
    }
}
