use crate::answer_utils::parse_answer;
use serde::{Deserialize, Serialize};

/// Las cuatro plantillas de expresiones del generador.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Template {
    SquaredBinomial, // a(x ± b)^2
    Quadratic,       // ax^2 ± bx [± c]
    LinearFraction,  // (ax ± b) / c
    BinomialProduct, // (x ± a)(x ± b)
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::SquaredBinomial,
        Template::Quadratic,
        Template::LinearFraction,
        Template::BinomialProduct,
    ];
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub template: Template,
    pub text: String, // Expresión con una sola variable "x"
    pub x_value: i32, // Valor a sustituir
    pub answer: i32,
}

impl Question {
    /// Texto para pantalla: `^2` se muestra como `²`
    pub fn display_text(&self) -> String {
        self.text.replace("^2", "²")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub time: u64, // segundos
}

/// Una respuesta enviada durante el intento, tal y como la escribió el jugador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub question: Question,
    pub user_answer: String,
}

impl HistoryEntry {
    pub fn is_correct(&self) -> bool {
        parse_answer(&self.user_answer) == Some(self.question.answer)
    }
}

/// Preferencias que eframe guarda entre sesiones.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub last_name: String,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            dark_mode: true,
        }
    }
}
