use super::*;
use std::time::Duration;

impl QuizApp {
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        match &self.state {
            QuizState::InProgress(attempt) => Some(attempt),
            _ => None,
        }
    }

    pub fn attempt_mut(&mut self) -> Option<&mut QuizAttempt> {
        match &mut self.state {
            QuizState::InProgress(attempt) => Some(attempt),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&FinalResults> {
        match &self.state {
            QuizState::Finished(results) => Some(results),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.attempt()?.current_question()
    }

    /// Número "humano" de la pregunta actual (1, 2, 3…)
    pub fn question_number(&self) -> Option<usize> {
        self.attempt().map(|a| a.current_index + 1)
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.attempt()
            .map(|a| a.timer.elapsed_secs(self.clock.as_ref()))
            .unwrap_or(0)
    }

    /// Cuándo hay que volver a pintar para actualizar el cronómetro.
    /// `None` fuera de un intento.
    pub fn next_tick(&self) -> Option<Duration> {
        self.attempt()?.timer.next_tick(self.clock.as_ref())
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, QuizState::InProgress(_))
    }
}
