pub mod answer_utils;
pub mod app;
pub mod data;
pub mod generator;
pub mod leaderboard;
pub mod model;
pub mod storage;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
