// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub number: usize, // 1-based
    pub total: usize,
    pub x_value: i32,
    pub expression: String, // ya con ²
    pub elapsed: String,    // mm:ss
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize,
    pub x_value: i32,
    pub expression: String,
    pub submitted: String,
    pub correct_answer: i32,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub score: u32,
    pub time: String,
}

impl QuizView {
    pub fn progress_label(&self) -> String {
        format!("Pregunta {}/{}", self.number, self.total)
    }
}

impl ReviewRow {
    pub fn question_label(&self) -> String {
        format!("Para x = {}, {}", self.x_value, self.expression)
    }
}
