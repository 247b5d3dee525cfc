mod helpers;
pub mod layout;
pub mod views;

use crate::app::FinLearnApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for FinLearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // CABECERA CON CONTADORES (sólo en el dashboard)
        if matches!(self.state, AppState::Dashboard) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por estado
        match self.state {
            AppState::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppState::Lesson { .. } => views::lesson::ui_lesson(self, ctx),
            AppState::Quiz { .. } => {
                if self.quiz_results().is_some() {
                    views::results::ui_results(self, ctx)
                } else {
                    views::quiz::ui_quiz(self, ctx)
                }
            }
        }
    }
}
