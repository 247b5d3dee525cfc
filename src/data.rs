// src/data.rs

use crate::model::{Category, CategoryId, LessonSlide, QuizQuestion};
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

/// Categoría cuyo contenido se usa cuando una id no tiene lecciones propias.
pub const FALLBACK_CATEGORY: &str = "budgeting";

const OPTIONS_PER_QUESTION: usize = 4;

const CATEGORIES_YAML: &str = include_str!("data/categories.yaml");
const LESSONS_YAML: &str = include_str!("data/lessons.yaml");
const QUESTIONS_YAML: &str = include_str!("data/quiz_questions.yaml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no se pudo parsear {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("la categoría de respaldo '{0}' no tiene lecciones")]
    MissingFallback(&'static str),
    #[error("la categoría '{0}' no tiene diapositivas")]
    EmptyLesson(CategoryId),
    #[error("la pregunta {index} tiene {found} opciones (se esperaban 4)")]
    OptionCount { index: usize, found: usize },
    #[error("la pregunta {index} marca como correcta la opción {correct}, fuera de rango")]
    CorrectOutOfRange { index: usize, correct: usize },
    #[error("el banco de preguntas está vacío")]
    NoQuestions,
}

/// Catálogos estáticos de la app: categorías, lecciones y preguntas.
#[derive(Debug, Clone)]
pub struct Content {
    pub categories: Vec<Category>,
    lessons: HashMap<CategoryId, Vec<LessonSlide>>,
    pub questions: Vec<QuizQuestion>,
}

impl Content {
    /// Carga y valida los YAML embebidos.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_yaml(CATEGORIES_YAML, LESSONS_YAML, QUESTIONS_YAML)
    }

    pub fn from_yaml(categories: &str, lessons: &str, questions: &str) -> Result<Self, ContentError> {
        let categories: Vec<Category> = serde_yaml::from_str(categories)
            .map_err(|source| ContentError::Parse { file: "categories.yaml", source })?;
        let lessons: HashMap<CategoryId, Vec<LessonSlide>> = serde_yaml::from_str(lessons)
            .map_err(|source| ContentError::Parse { file: "lessons.yaml", source })?;
        let questions: Vec<QuizQuestion> = serde_yaml::from_str(questions)
            .map_err(|source| ContentError::Parse { file: "quiz_questions.yaml", source })?;

        let content = Self { categories, lessons, questions };
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if !self.lessons.contains_key(&CategoryId::new(FALLBACK_CATEGORY)) {
            return Err(ContentError::MissingFallback(FALLBACK_CATEGORY));
        }
        if let Some((id, _)) = self.lessons.iter().find(|(_, slides)| slides.is_empty()) {
            return Err(ContentError::EmptyLesson(id.clone()));
        }
        if self.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        for (index, q) in self.questions.iter().enumerate() {
            if q.options.len() != OPTIONS_PER_QUESTION {
                return Err(ContentError::OptionCount { index, found: q.options.len() });
            }
            if q.correct >= q.options.len() {
                return Err(ContentError::CorrectOutOfRange { index, correct: q.correct });
            }
        }
        Ok(())
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Lecciones de una categoría; si no hay, las de `FALLBACK_CATEGORY`.
    pub fn lessons_for(&self, id: &CategoryId) -> &[LessonSlide] {
        if let Some(slides) = self.lessons.get(id) {
            return slides;
        }
        warn!("sin lecciones para '{id}', usando '{FALLBACK_CATEGORY}'");
        self.lessons
            .get(&CategoryId::new(FALLBACK_CATEGORY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
