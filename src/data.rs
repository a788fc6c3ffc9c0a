// src/data.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML de configuración no válido: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("configuración no válida: {0}")]
    Invalid(&'static str),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    pub total_questions: usize,
    pub leaderboard_size: usize,
    pub leaderboard_max_time_secs: u64,
    pub leaderboard_key: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_questions: 15,
            leaderboard_size: 10,
            leaderboard_max_time_secs: 300,
            leaderboard_key: "algebraLeaderboard".to_string(),
        }
    }
}

pub fn parse_config(text: &str) -> Result<QuizConfig, ConfigError> {
    let config: QuizConfig = serde_yaml::from_str(text)?;
    if config.total_questions == 0 {
        return Err(ConfigError::Invalid("total_questions debe ser mayor que 0"));
    }
    if config.leaderboard_size == 0 {
        return Err(ConfigError::Invalid("leaderboard_size debe ser mayor que 0"));
    }
    if config.leaderboard_key.trim().is_empty() {
        return Err(ConfigError::Invalid("leaderboard_key vacío"));
    }
    Ok(config)
}

/// Carga la configuración desde el YAML embebido
pub fn read_config_embedded() -> QuizConfig {
    let file_content = include_str!("data/quiz_config.yaml");
    match parse_config(file_content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Usando configuración por defecto: {e}");
            QuizConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(read_config_embedded(), QuizConfig::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = parse_config("total_questions: 5\n").unwrap();
        assert_eq!(config.total_questions, 5);
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.leaderboard_key, "algebraLeaderboard");
    }

    #[test]
    fn rejects_zero_questions_and_bad_yaml() {
        assert!(matches!(
            parse_config("total_questions: 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse_config("total_questions: [uno"),
            Err(ConfigError::Parse(_))
        ));
    }
}
