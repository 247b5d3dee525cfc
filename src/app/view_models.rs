use super::*;
use crate::quiz::QuizPhase;

impl FinLearnApp {
    pub fn category_cards(&self) -> Vec<CategoryCard> {
        self.content
            .categories
            .iter()
            .map(|c| CategoryCard {
                id: c.id.clone(),
                title: c.title.clone(),
                description: c.description.clone(),
                icon: c.icon.clone(),
                color: c.color.clone(),
                token_cost: c.token_cost,
                lessons: c.lessons,
                completed: c.completed,
                percent: c.progress_percent(),
                locked: !self.progress.is_unlocked(c),
            })
            .collect()
    }

    pub fn header_stats(&self) -> HeaderStats {
        let p = &self.progress;
        HeaderStats {
            streak: p.streak,
            tokens: p.tokens,
            level: p.level,
            experience: p.experience,
            next_level_xp: p.next_level_xp(),
            level_fraction: p.level_fraction(),
        }
    }

    /// `Some` sólo cuando el quiz activo está en la pantalla de resultados.
    pub fn quiz_results(&self) -> Option<QuizResults> {
        match &self.state {
            AppState::Quiz { session, .. } if session.phase() == QuizPhase::Results => {
                Some(QuizResults {
                    score: session.score(),
                    correct: session.correct_count(),
                    total: session.total(),
                })
            }
            _ => None,
        }
    }
}
