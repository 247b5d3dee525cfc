// src/view_models.rs

use crate::model::CategoryId;
use crate::quiz::Score;

#[derive(Clone, Debug)]
pub struct CategoryCard {
    pub id: CategoryId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub token_cost: u32,
    pub lessons: u32,
    pub completed: u32,
    pub percent: f32,
    pub locked: bool,
}

impl CategoryCard {
    pub fn button_label(&self) -> &'static str {
        if self.locked {
            "🔒 Locked"
        } else if self.completed > 0 {
            "Continue"
        } else {
            "Start"
        }
    }

    pub fn lessons_label(&self) -> String {
        format!("{} / {} lessons", self.completed, self.lessons)
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent.round() as u32)
    }

    /// La insignia de coste sólo aparece si la categoría cuesta algo.
    pub fn cost_badge(&self) -> Option<String> {
        (self.token_cost > 0).then(|| format!("💰 {}", self.token_cost))
    }
}

#[derive(Clone, Debug)]
pub struct HeaderStats {
    pub streak: u32,
    pub tokens: u32,
    pub level: u32,
    pub experience: u32,
    pub next_level_xp: u32,
    pub level_fraction: f32,
}

impl HeaderStats {
    pub fn level_label(&self) -> String {
        format!("Level {}", self.level)
    }

    pub fn next_level_label(&self) -> String {
        format!("Progress to Level {}", self.level + 1)
    }

    pub fn xp_label(&self) -> String {
        format!("{} / {} XP", self.experience, self.next_level_xp)
    }
}

/// Lo que enseña la pantalla de resultados del quiz.
#[derive(Clone, Debug)]
pub struct QuizResults {
    pub score: Score,
    pub correct: usize,
    pub total: usize,
}

impl QuizResults {
    pub fn passed(&self) -> bool {
        self.score.passed()
    }

    pub fn heading(&self) -> &'static str {
        if self.passed() {
            "🎉 Amazing Work!"
        } else {
            "📚 Keep Learning!"
        }
    }

    pub fn score_label(&self) -> String {
        format!("You scored {}%", self.score.rounded())
    }

    pub fn message(&self) -> String {
        if self.passed() {
            format!(
                "You got {} out of {} questions correct! You're mastering financial literacy!",
                self.correct, self.total
            )
        } else {
            format!(
                "You got {} out of {} correct. Review the lessons and try again!",
                self.correct, self.total
            )
        }
    }

    pub fn tokens_label(&self) -> String {
        format!("+{}", self.score.tokens_shown())
    }

    pub fn primary_button(&self) -> &'static str {
        if self.passed() {
            "Continue Learning"
        } else {
            "Review Lessons"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(locked: bool, completed: u32, cost: u32) -> CategoryCard {
        CategoryCard {
            id: CategoryId::new("budgeting"),
            title: "Budgeting Basics".into(),
            description: String::new(),
            icon: "🐷".into(),
            color: "success".into(),
            token_cost: cost,
            lessons: 8,
            completed,
            percent: completed as f32 / 8.0 * 100.0,
            locked,
        }
    }

    #[test]
    fn card_labels() {
        assert_eq!(card(true, 3, 50).button_label(), "🔒 Locked");
        assert_eq!(card(false, 3, 0).button_label(), "Continue");
        assert_eq!(card(false, 0, 0).button_label(), "Start");
        assert_eq!(card(false, 3, 0).lessons_label(), "3 / 8 lessons");
        assert_eq!(card(false, 3, 0).percent_label(), "38%");
        assert_eq!(card(false, 0, 0).cost_badge(), None);
        assert_eq!(card(false, 0, 100).cost_badge().as_deref(), Some("💰 100"));
    }

    #[test]
    fn results_switch_on_pass_threshold() {
        let passed = QuizResults { score: Score::from_counts(7, 10), correct: 7, total: 10 };
        assert_eq!(passed.heading(), "🎉 Amazing Work!");
        assert_eq!(passed.primary_button(), "Continue Learning");
        assert_eq!(passed.score_label(), "You scored 70%");
        assert_eq!(passed.tokens_label(), "+7");

        let failed = QuizResults { score: Score::from_counts(4, 10), correct: 4, total: 10 };
        assert_eq!(failed.heading(), "📚 Keep Learning!");
        assert_eq!(failed.primary_button(), "Review Lessons");
        assert!(failed.message().starts_with("You got 4 out of 10 correct."));
    }

    #[test]
    fn header_labels() {
        let stats = HeaderStats {
            streak: 7,
            tokens: 150,
            level: 5,
            experience: 2450,
            next_level_xp: 3000,
            level_fraction: 0.9,
        };
        assert_eq!(stats.level_label(), "Level 5");
        assert_eq!(stats.next_level_label(), "Progress to Level 6");
        assert_eq!(stats.xp_label(), "2450 / 3000 XP");
    }
}
