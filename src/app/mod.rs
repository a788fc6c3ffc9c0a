use crate::data::{QuizConfig, read_config_embedded};
use crate::generator::generate;
use crate::leaderboard::Leaderboard;
use crate::model::{HistoryEntry, Preferences, Question};
use crate::storage::{KeyValueStore, default_store};
use crate::timer::{Clock, QuizTimer, SystemClock, format_time};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submódulos
pub mod actions;
pub mod completion;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{LeaderboardRow, QuizView, ReviewRow};

/// Resultado de enviar una respuesta.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    Ignored,   // vacía o fuera de un intento
    Correct,   // acierto, sigue el intento
    Incorrect, // fallo, sigue el intento
    Finished,  // era la última pregunta
}

/// Intento en curso.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    pub player_name: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub correct_count: u32,
    pub history: Vec<HistoryEntry>,
    pub input: String, // respuesta pendiente de enviar
    pub timer: QuizTimer,
}

impl QuizAttempt {
    pub fn new(player_name: &str, questions: Vec<Question>, timer: QuizTimer) -> Self {
        Self {
            player_name: player_name.to_owned(),
            questions,
            current_index: 0,
            correct_count: 0,
            history: Vec::new(),
            input: String::new(),
            timer,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }
}

/// Resumen de un intento terminado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalResults {
    pub player_name: String,
    pub correct_count: u32,
    pub total_questions: usize,
    pub total_time: u64,
    pub history: Vec<HistoryEntry>,
    pub made_leaderboard: bool,
}

impl FinalResults {
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.correct_count, self.total_questions)
    }

    pub fn time_label(&self) -> String {
        format_time(self.total_time)
    }
}

#[derive(Debug, Clone)]
pub enum QuizState {
    NotStarted,
    InProgress(QuizAttempt),
    Finished(FinalResults),
}

impl Default for QuizState {
    fn default() -> Self {
        QuizState::NotStarted
    }
}

pub struct QuizApp {
    pub state: QuizState,
    pub leaderboard: Leaderboard,
    pub config: QuizConfig,
    pub name_input: String,
    pub dark_mode: bool,
    pub confirm_restart: bool,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_parts(
            read_config_embedded(),
            default_store(),
            Box::new(SystemClock),
            StdRng::from_entropy(),
        )
    }

    /// Construye la app con sus colaboradores. El ranking se lee una sola vez aquí.
    pub fn with_parts(
        config: QuizConfig,
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        rng: StdRng,
    ) -> Self {
        let leaderboard = Leaderboard::load(store.as_ref(), &config);
        Self {
            state: QuizState::NotStarted,
            leaderboard,
            config,
            name_input: String::new(),
            dark_mode: true,
            confirm_restart: false,
            store,
            clock,
            rng,
        }
    }

    pub fn apply_preferences(&mut self, prefs: Preferences) {
        self.name_input = prefs.last_name;
        self.dark_mode = prefs.dark_mode;
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            last_name: self.name_input.clone(),
            dark_mode: self.dark_mode,
        }
    }

    fn new_questions(&mut self) -> Vec<Question> {
        generate(self.config.total_questions, &mut self.rng)
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

// Al cerrar la app no debe quedar el cronómetro pidiendo refrescos
impl Drop for QuizApp {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
