// src/lesson.rs

/// Resultado de interactuar con una lección que devuelve el control al controlador.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonOutcome {
    Complete,
    Back,
}

/// Recorre las diapositivas de una lección. El índice siempre está en `[0, len)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonWalker {
    current: usize,
    len: usize,
}

impl LessonWalker {
    /// `len` se fuerza a 1 como mínimo; el catálogo nunca tiene lecciones vacías.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Avanza una diapositiva; en la última devuelve `Complete` sin mover el índice.
    pub fn advance(&mut self) -> Option<LessonOutcome> {
        if self.is_last() {
            Some(LessonOutcome::Complete)
        } else {
            self.current += 1;
            None
        }
    }

    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn back(&self) -> LessonOutcome {
        LessonOutcome::Back
    }

    /// Fracción `(actual + 1) / total`, para la barra de progreso.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.len as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_n_times_completes_exactly_once() {
        for n in 1..=5 {
            let mut walker = LessonWalker::new(n);
            let mut completions = 0;
            for _ in 0..n {
                if walker.advance() == Some(LessonOutcome::Complete) {
                    completions += 1;
                }
                assert!(walker.current() < n);
            }
            assert_eq!(completions, 1, "len {n}");
            assert_eq!(walker.current(), n - 1);
        }
    }

    #[test]
    fn completion_does_not_loop_or_reset() {
        let mut walker = LessonWalker::new(2);
        assert_eq!(walker.advance(), None);
        assert_eq!(walker.advance(), Some(LessonOutcome::Complete));
        assert_eq!(walker.advance(), Some(LessonOutcome::Complete));
        assert_eq!(walker.current(), 1);
    }

    #[test]
    fn retreat_at_start_is_noop() {
        let mut walker = LessonWalker::new(3);
        walker.retreat();
        assert_eq!(walker.current(), 0);
        walker.advance();
        walker.retreat();
        walker.retreat();
        assert_eq!(walker.current(), 0);
    }

    #[test]
    fn back_is_unconditional() {
        let mut walker = LessonWalker::new(3);
        walker.advance();
        assert_eq!(walker.back(), LessonOutcome::Back);
        assert_eq!(walker.current(), 1);
    }

    #[test]
    fn progress_tracks_position() {
        let mut walker = LessonWalker::new(4);
        assert_eq!(walker.progress(), 0.25);
        walker.advance();
        walker.advance();
        walker.advance();
        assert_eq!(walker.progress(), 1.0);
        assert!(walker.is_last());
    }
}
