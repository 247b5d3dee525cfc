use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lesson::LessonWalker;
use crate::quiz::QuizSession;

/// Identificador de categoría ("budgeting", "saving", ...).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub description: String,
    pub icon: String,  // emoji, se pasa tal cual a la UI
    pub color: String, // token de paleta ("success", "warning", ...)
    #[serde(default)]
    pub token_cost: u32,
    pub lessons: u32,
    #[serde(default)]
    pub completed: u32,
}

impl Category {
    /// Porcentaje de lecciones completadas (0..=100)
    pub fn progress_percent(&self) -> f32 {
        if self.lessons == 0 {
            return 0.0;
        }
        self.completed as f32 / self.lessons as f32 * 100.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LessonSlide {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

/// Pantalla activa. Cada variante es dueña de su estado local, así que
/// salir de ella descarta cualquier progreso a medias.
#[derive(Debug, Clone, Default)]
pub enum AppState {
    #[default]
    Dashboard,
    Lesson {
        category: CategoryId,
        walker: LessonWalker,
    },
    Quiz {
        category: CategoryId,
        session: QuizSession,
    },
}

impl AppState {
    pub fn category(&self) -> Option<&CategoryId> {
        match self {
            AppState::Dashboard => None,
            AppState::Lesson { category, .. } | AppState::Quiz { category, .. } => Some(category),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppState::Dashboard => "dashboard",
            AppState::Lesson { .. } => "lesson",
            AppState::Quiz { .. } => "quiz",
        }
    }
}
