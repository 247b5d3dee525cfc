use super::*;
use crate::lesson::{LessonOutcome, LessonWalker};
use crate::model::CategoryId;
use crate::progression::{apply_lesson_reward, apply_quiz_reward};
use crate::quiz::{QuizOutcome, QuizSession, Score};
use log::{debug, info};

impl FinLearnApp {
    /// Dashboard → Lección. Devuelve `false` si la categoría no existe o está bloqueada.
    pub fn open_category(&mut self, id: &CategoryId) -> bool {
        let Some(category) = self.content.category(id) else {
            debug!("categoría desconocida '{id}'");
            return false;
        };
        if !self.progress.is_unlocked(category) {
            // Bloqueada: el click no hace nada
            debug!(
                "'{id}' bloqueada ({} < {} tokens)",
                self.progress.tokens, category.token_cost
            );
            return false;
        }

        let slides = self.content.lessons_for(id).len();
        self.state = AppState::Lesson {
            category: id.clone(),
            walker: LessonWalker::new(slides),
        };
        self.message.clear();
        info!("lección '{id}' abierta ({slides} diapositivas)");
        true
    }

    pub fn handle_lesson_outcome(&mut self, outcome: LessonOutcome) {
        match outcome {
            LessonOutcome::Complete => self.complete_lesson(),
            LessonOutcome::Back => self.back_to_dashboard(),
        }
    }

    pub fn handle_quiz_outcome(&mut self, outcome: QuizOutcome) {
        match outcome {
            QuizOutcome::Complete(score) => self.complete_quiz(score),
            QuizOutcome::Back => self.back_to_dashboard(),
        }
    }

    /// Lección → Quiz, con +10 tokens y +50 XP.
    fn complete_lesson(&mut self) {
        let category = match &self.state {
            AppState::Lesson { category, .. } => category.clone(),
            _ => return,
        };

        let progress = std::mem::take(&mut self.progress);
        self.progress = apply_lesson_reward(progress, &category);
        info!(
            "lección '{category}' completada: tokens {}, xp {}",
            self.progress.tokens, self.progress.experience
        );

        self.state = AppState::Quiz {
            category,
            session: QuizSession::new(self.content.questions.clone()),
        };
    }

    /// Quiz → Dashboard, sumando la recompensa de la puntuación.
    fn complete_quiz(&mut self, score: Score) {
        if !matches!(self.state, AppState::Quiz { .. }) {
            return;
        }

        let progress = std::mem::take(&mut self.progress);
        self.progress = apply_quiz_reward(progress, score);
        info!(
            "quiz terminado con {:.0}%: tokens {}, xp {}",
            score.percent(),
            self.progress.tokens,
            self.progress.experience
        );

        self.state = AppState::Dashboard;
    }

    /// Vuelve al dashboard sin recompensas; se pierde lo que hubiera a medias.
    pub fn back_to_dashboard(&mut self) {
        debug!("volver al dashboard desde {}", self.state.name());
        self.state = AppState::Dashboard;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> FinLearnApp {
        FinLearnApp::load(AppConfig::default()).unwrap()
    }

    #[test]
    fn unlocked_categories_open_at_first_slide() {
        for id in ["budgeting", "saving", "credit", "investing"] {
            let mut app = app();
            assert!(app.open_category(&CategoryId::new(id)), "{id}");
            match &app.state {
                AppState::Lesson { category, walker } => {
                    assert_eq!(category.as_str(), id);
                    assert_eq!(walker.current(), 0);
                }
                other => panic!("estado inesperado: {other:?}"),
            }
        }
    }

    #[test]
    fn locked_category_is_inert() {
        let mut app = app();
        app.progress.tokens = 40;
        assert!(!app.open_category(&CategoryId::new("saving")));
        assert!(matches!(app.state, AppState::Dashboard));
        assert_eq!(app.progress.tokens, 40);
    }

    #[test]
    fn unknown_category_does_nothing() {
        let mut app = app();
        assert!(!app.open_category(&CategoryId::new("crypto")));
        assert!(matches!(app.state, AppState::Dashboard));
    }

    #[test]
    fn lesson_completion_rewards_and_opens_quiz() {
        let mut app = app();
        app.open_category(&CategoryId::new("saving"));
        app.handle_lesson_outcome(LessonOutcome::Complete);

        assert_eq!(app.progress.tokens, 160);
        assert_eq!(app.progress.experience, 2500);
        assert!(app.progress.has_completed(&CategoryId::new("saving")));
        match &app.state {
            AppState::Quiz { category, session } => {
                assert_eq!(category.as_str(), "saving");
                assert_eq!(session.total(), 10);
                assert_eq!(session.current_index(), 0);
            }
            other => panic!("estado inesperado: {other:?}"),
        }
    }

    #[test]
    fn back_never_rewards() {
        let mut app = app();
        app.open_category(&CategoryId::new("budgeting"));
        app.handle_lesson_outcome(LessonOutcome::Back);
        assert!(matches!(app.state, AppState::Dashboard));
        assert_eq!(app.progress, Progress::default());

        app.open_category(&CategoryId::new("budgeting"));
        app.handle_lesson_outcome(LessonOutcome::Complete);
        let after_lesson = app.progress.clone();
        app.handle_quiz_outcome(QuizOutcome::Back);
        assert!(matches!(app.state, AppState::Dashboard));
        assert_eq!(app.progress, after_lesson);
    }

    #[test]
    fn quiz_completion_rewards_and_clears_category() {
        let mut app = app();
        app.open_category(&CategoryId::new("budgeting"));
        app.handle_lesson_outcome(LessonOutcome::Complete);
        app.handle_quiz_outcome(QuizOutcome::Complete(Score::from_counts(8, 10)));

        assert_eq!(app.progress.tokens, 168);
        assert_eq!(app.progress.experience, 2580);
        assert!(matches!(app.state, AppState::Dashboard));
        assert!(app.current_category().is_none());
    }

    #[test]
    fn outcomes_outside_their_screen_are_ignored() {
        let mut app = app();
        app.handle_lesson_outcome(LessonOutcome::Complete);
        app.handle_quiz_outcome(QuizOutcome::Complete(Score::from_counts(10, 10)));
        assert_eq!(app.progress, Progress::default());
        assert!(matches!(app.state, AppState::Dashboard));
    }
}
