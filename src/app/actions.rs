use super::*;
use crate::lesson::LessonOutcome;
use crate::quiz::{QuizError, QuizOutcome};
use log::debug;

impl FinLearnApp {
    // ----------- LECCIÓN -----------

    pub fn lesson_next(&mut self) {
        let outcome = match &mut self.state {
            AppState::Lesson { walker, .. } => walker.advance(),
            _ => return,
        };
        if let Some(outcome) = outcome {
            self.handle_lesson_outcome(outcome);
        }
    }

    pub fn lesson_previous(&mut self) {
        if let AppState::Lesson { walker, .. } = &mut self.state {
            walker.retreat();
        }
    }

    pub fn lesson_back(&mut self) {
        if matches!(self.state, AppState::Lesson { .. }) {
            self.handle_lesson_outcome(LessonOutcome::Back);
        }
    }

    // ----------- QUIZ -----------

    pub fn quiz_select(&mut self, option: usize) {
        let result = match &mut self.state {
            AppState::Quiz { session, .. } => session.select_option(option),
            _ => return,
        };
        self.report(result.map(|_| ()));
    }

    pub fn quiz_submit(&mut self) {
        let result = match &mut self.state {
            AppState::Quiz { session, .. } => session.submit(),
            _ => return,
        };
        self.report(result.map(|_| ()));
    }

    pub fn quiz_next(&mut self) {
        let result = match &mut self.state {
            AppState::Quiz { session, .. } => session.next(),
            _ => return,
        };
        self.report(result);
    }

    /// Desde resultados: aplica la recompensa y vuelve al dashboard.
    pub fn quiz_finish(&mut self) {
        let result = match &self.state {
            AppState::Quiz { session, .. } => session.finish(),
            _ => return,
        };
        match result {
            Ok(outcome) => self.handle_quiz_outcome(outcome),
            Err(e) => self.report(Err(e)),
        }
    }

    pub fn quiz_back(&mut self) {
        if matches!(self.state, AppState::Quiz { .. }) {
            self.handle_quiz_outcome(QuizOutcome::Back);
        }
    }

    fn report(&mut self, result: Result<(), QuizError>) {
        match result {
            Ok(()) => self.message.clear(),
            Err(e) => {
                debug!("acción de quiz rechazada: {e}");
                self.message = format!("⚠ {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryId;
    use crate::quiz::QuizPhase;

    fn in_quiz() -> FinLearnApp {
        let mut app = FinLearnApp::load(AppConfig::default()).unwrap();
        app.open_category(&CategoryId::new("budgeting"));
        for _ in 0..3 {
            app.lesson_next();
        }
        assert!(matches!(app.state, AppState::Quiz { .. }));
        app
    }

    fn session(app: &FinLearnApp) -> &crate::quiz::QuizSession {
        match &app.state {
            AppState::Quiz { session, .. } => session,
            other => panic!("estado inesperado: {other:?}"),
        }
    }

    #[test]
    fn lesson_walk_reaches_quiz_once() {
        let app = in_quiz();
        assert_eq!(app.progress.tokens, 160);
        assert_eq!(app.progress.experience, 2500);
    }

    #[test]
    fn lesson_previous_and_back() {
        let mut app = FinLearnApp::load(AppConfig::default()).unwrap();
        app.open_category(&CategoryId::new("budgeting"));
        app.lesson_previous();
        app.lesson_next();
        app.lesson_previous();
        match &app.state {
            AppState::Lesson { walker, .. } => assert_eq!(walker.current(), 0),
            other => panic!("estado inesperado: {other:?}"),
        }
        app.lesson_back();
        assert!(matches!(app.state, AppState::Dashboard));
        assert_eq!(app.progress.tokens, 150);
    }

    #[test]
    fn rejected_submit_sets_message_without_state_change() {
        let mut app = in_quiz();
        app.quiz_submit();
        assert!(!app.message.is_empty());
        assert_eq!(session(&app).phase(), QuizPhase::Unanswered);

        app.quiz_select(1);
        assert!(app.message.is_empty());
        app.quiz_submit();
        assert_eq!(session(&app).correct_count(), 1);
        assert_eq!(session(&app).phase(), QuizPhase::Submitted);
    }

    #[test]
    fn finish_before_results_is_rejected() {
        let mut app = in_quiz();
        app.quiz_finish();
        assert!(matches!(app.state, AppState::Quiz { .. }));
        assert_eq!(app.progress.tokens, 160);
    }

    #[test]
    fn quiz_back_discards_attempt() {
        let mut app = in_quiz();
        app.quiz_select(1);
        app.quiz_submit();
        app.quiz_back();
        assert!(matches!(app.state, AppState::Dashboard));
        assert_eq!(app.progress.tokens, 160);
    }

    #[test]
    fn actions_outside_their_screen_are_noops() {
        let mut app = FinLearnApp::load(AppConfig::default()).unwrap();
        app.lesson_next();
        app.quiz_select(0);
        app.quiz_submit();
        app.quiz_finish();
        assert!(matches!(app.state, AppState::Dashboard));
        assert!(app.message.is_empty());
    }
}
