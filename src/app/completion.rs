use super::*;
use crate::model::LeaderboardEntry;

impl QuizApp {
    /// Cierra un intento: calcula el tiempo total, intenta entrar en el
    /// ranking y pasa a Finished. Solo se llama una vez por intento.
    pub(crate) fn complete_attempt(&mut self, mut attempt: QuizAttempt) {
        attempt.timer.stop(self.clock.as_ref());
        let total_time = attempt.timer.elapsed_secs(self.clock.as_ref());

        let entry = LeaderboardEntry {
            name: attempt.player_name.clone(),
            score: attempt.correct_count,
            time: total_time,
        };
        let made_leaderboard = self.leaderboard.maybe_record(entry, self.store.as_mut());

        log::info!(
            "{} termina: {}/{} en {}{}",
            attempt.player_name,
            attempt.correct_count,
            attempt.questions.len(),
            format_time(total_time),
            if made_leaderboard { " (entra en el ranking)" } else { "" }
        );

        self.state = QuizState::Finished(FinalResults {
            player_name: attempt.player_name,
            correct_count: attempt.correct_count,
            total_questions: attempt.questions.len(),
            total_time,
            history: attempt.history,
            made_leaderboard,
        });
    }
}
