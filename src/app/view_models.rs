use super::*;

impl QuizApp {
    pub fn quiz_view(&self) -> Option<QuizView> {
        let attempt = self.attempt()?;
        let question = attempt.current_question()?;
        Some(QuizView {
            number: attempt.current_index + 1,
            total: attempt.questions.len(),
            x_value: question.x_value,
            expression: question.display_text(),
            elapsed: format_time(self.elapsed_secs()),
        })
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        let Some(results) = self.results() else {
            return Vec::new();
        };
        results
            .history
            .iter()
            .enumerate()
            .map(|(i, entry)| ReviewRow {
                number: i + 1,
                x_value: entry.question.x_value,
                expression: entry.question.display_text(),
                submitted: entry.user_answer.clone(),
                correct_answer: entry.question.answer,
                is_correct: entry.is_correct(),
            })
            .collect()
    }

    pub fn leaderboard_rows(&self) -> Vec<LeaderboardRow> {
        self.leaderboard
            .entries()
            .iter()
            .enumerate()
            .map(|(i, e)| LeaderboardRow {
                rank: i + 1,
                name: e.name.clone(),
                score: e.score,
                time: format_time(e.time),
            })
            .collect()
    }
}
