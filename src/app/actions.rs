use super::*;
use crate::answer_utils::parse_answer;

impl QuizApp {
    /// Empieza un intento nuevo. Con nombre vacío (tras recortar) no hace nada
    /// y devuelve `false`.
    pub fn start(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        // Siempre se pasa por NotStarted antes de empezar
        self.restart();

        let questions = self.new_questions();
        let timer = QuizTimer::start(self.clock.as_ref());
        log::info!("{name} empieza un intento de {} preguntas", questions.len());

        self.name_input = name.to_owned();
        self.state = QuizState::InProgress(QuizAttempt::new(name, questions, timer));
        true
    }

    /// Envía la respuesta a la pregunta actual.
    pub fn submit_answer(&mut self, respuesta: &str) -> SubmitOutcome {
        if respuesta.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let QuizState::InProgress(attempt) = &mut self.state else {
            log::debug!("Respuesta ignorada: no hay intento en curso");
            return SubmitOutcome::Ignored;
        };

        let Some(question) = attempt.current_question().cloned() else {
            return SubmitOutcome::Ignored;
        };

        let correcta = parse_answer(respuesta) == Some(question.answer);
        if correcta {
            attempt.correct_count += 1;
        }
        attempt.history.push(HistoryEntry {
            question,
            user_answer: respuesta.to_owned(),
        });
        attempt.input.clear();

        if attempt.current_index + 1 < attempt.questions.len() {
            attempt.current_index += 1;
            return if correcta {
                SubmitOutcome::Correct
            } else {
                SubmitOutcome::Incorrect
            };
        }

        // Última pregunta: se para el cronómetro y se cierra el intento
        attempt.timer.stop(self.clock.as_ref());
        if let QuizState::InProgress(attempt) = std::mem::take(&mut self.state) {
            self.complete_attempt(attempt);
        }
        SubmitOutcome::Finished
    }

    /// Envía lo que haya escrito en el campo de respuesta.
    pub fn submit_pending_input(&mut self) -> SubmitOutcome {
        let input = match &self.state {
            QuizState::InProgress(attempt) => attempt.input.clone(),
            _ => return SubmitOutcome::Ignored,
        };
        self.submit_answer(&input)
    }

    pub fn can_start(&self) -> bool {
        !self.name_input.trim().is_empty()
    }
}
