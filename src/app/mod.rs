use crate::config::AppConfig;
use crate::data::{Content, ContentError};
use crate::model::{AppState, Category};
use crate::progression::Progress;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{CategoryCard, HeaderStats, QuizResults};

/// Controlador: dueño de la progresión y de la pantalla activa.
pub struct FinLearnApp {
    pub content: Content,
    pub progress: Progress,
    pub state: AppState,
    pub config: AppConfig,
    pub message: String,
}

impl FinLearnApp {
    pub fn new(content: Content, config: AppConfig) -> Self {
        Self {
            content,
            progress: Progress::default(),
            state: AppState::Dashboard,
            config,
            message: String::new(),
        }
    }

    /// Carga el contenido embebido y arranca con los valores semilla.
    pub fn load(config: AppConfig) -> Result<Self, ContentError> {
        let content = Content::load()?;
        log::info!(
            "contenido cargado: {} categorías, {} preguntas",
            content.categories.len(),
            content.questions.len()
        );
        Ok(Self::new(content, config))
    }

    /// Categoría de la pantalla actual (lección o quiz).
    pub fn current_category(&self) -> Option<&Category> {
        self.state
            .category()
            .and_then(|id| self.content.category(id))
    }
}
