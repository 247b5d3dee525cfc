// src/quiz.rs

use crate::model::QuizQuestion;
use log::debug;
use thiserror::Error;

/// Umbral (en %) a partir del cual el resultado se considera aprobado.
pub const PASS_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    Submitted,
    Results,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    #[error("no hay ninguna opción seleccionada")]
    NoSelection,
    #[error("la pregunta ya fue respondida")]
    AlreadySubmitted,
    #[error("primero hay que enviar la respuesta")]
    NotSubmitted,
    #[error("opción {index} fuera de rango ({len} opciones)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("el quiz ya terminó")]
    Finished,
    #[error("todavía no hay resultados")]
    NoResults,
}

/// Puntuación en porcentaje, sin redondear.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub fn from_counts(correct: usize, total: usize) -> Self {
        if total == 0 {
            return Score(0.0);
        }
        Score(correct as f64 * 100.0 / total as f64)
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Sólo para mostrar.
    pub fn rounded(&self) -> u32 {
        self.0.round() as u32
    }

    pub fn passed(&self) -> bool {
        self.0 >= PASS_THRESHOLD
    }

    /// Tokens que se enseñan como "ganados" en la pantalla de resultados.
    pub fn tokens_shown(&self) -> u32 {
        self.rounded() / 10
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizOutcome {
    Complete(Score),
    Back,
}

/// Estado local de un intento de quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    phase: QuizPhase,
    correct_count: usize,
    answered: Vec<bool>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answered = vec![false; questions.len()];
        Self {
            questions,
            current: 0,
            selected: None,
            phase: QuizPhase::Unanswered,
            correct_count: 0,
            answered,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn answered_count(&self) -> usize {
        self.answered.iter().filter(|a| **a).count()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// `Some(true/false)` una vez enviada la respuesta de la pregunta actual.
    pub fn last_answer_correct(&self) -> Option<bool> {
        if self.phase != QuizPhase::Submitted {
            return None;
        }
        let q = self.current_question()?;
        self.selected.map(|s| s == q.correct)
    }

    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.current + 1) as f32 / self.questions.len() as f32
    }

    pub fn score(&self) -> Score {
        Score::from_counts(self.correct_count, self.questions.len())
    }

    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Unanswered => {}
            QuizPhase::Submitted => return Err(QuizError::AlreadySubmitted),
            QuizPhase::Results => return Err(QuizError::Finished),
        }
        let len = self.current_question().map(|q| q.options.len()).unwrap_or(0);
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Bloquea la selección, puntúa y revela la explicación.
    pub fn submit(&mut self) -> Result<bool, QuizError> {
        match self.phase {
            QuizPhase::Unanswered => {}
            QuizPhase::Submitted => return Err(QuizError::AlreadySubmitted),
            QuizPhase::Results => return Err(QuizError::Finished),
        }
        let selected = self.selected.ok_or(QuizError::NoSelection)?;
        if self.answered.get(self.current).copied().unwrap_or(true) {
            return Err(QuizError::AlreadySubmitted);
        }
        let correct = self
            .current_question()
            .map(|q| q.correct == selected)
            .unwrap_or(false);

        if correct {
            self.correct_count += 1;
        }
        self.answered[self.current] = true;
        self.phase = QuizPhase::Submitted;
        debug!(
            "quiz: pregunta {} respondida ({}), aciertos {}",
            self.current + 1,
            if correct { "ok" } else { "fallo" },
            self.correct_count
        );
        Ok(correct)
    }

    pub fn next(&mut self) -> Result<(), QuizError> {
        match self.phase {
            QuizPhase::Submitted => {}
            QuizPhase::Unanswered => return Err(QuizError::NotSubmitted),
            QuizPhase::Results => return Err(QuizError::Finished),
        }
        if self.is_last() {
            self.phase = QuizPhase::Results;
            debug!("quiz: resultados, {:.0}%", self.score().percent());
        } else {
            self.current += 1;
            self.selected = None;
            self.phase = QuizPhase::Unanswered;
        }
        Ok(())
    }

    pub fn finish(&self) -> Result<QuizOutcome, QuizError> {
        if self.phase != QuizPhase::Results {
            return Err(QuizError::NoResults);
        }
        Ok(QuizOutcome::Complete(self.score()))
    }

    pub fn back(&self) -> QuizOutcome {
        QuizOutcome::Back
    }
}
