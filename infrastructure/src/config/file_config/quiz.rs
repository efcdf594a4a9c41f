//! Quiz configuration from TOML (`[quiz]` section)

use cosmos_application::QuizParams;
use cosmos_domain::DifficultyWeights;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw quiz configuration from TOML
///
/// ```toml
/// [quiz]
/// question_count = 10
/// time_limit_seconds = 30
/// offline = false
///
/// [quiz.weights]
/// easy = 0.4
/// medium = 0.35
/// hard = 0.25
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    pub question_count: usize,
    pub time_limit_seconds: u64,
    /// Skip the trivia service and use the built-in bank
    pub offline: bool,
    pub weights: DifficultyWeights,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        let params = QuizParams::default();
        Self {
            question_count: params.question_count,
            time_limit_seconds: params.time_limit.as_secs(),
            offline: false,
            weights: params.weights,
        }
    }
}

impl FileQuizConfig {
    /// Convert to application-layer quiz parameters
    pub fn to_params(&self) -> QuizParams {
        QuizParams::default()
            .with_question_count(self.question_count)
            .with_time_limit(Duration::from_secs(self.time_limit_seconds))
            .with_weights(self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_weights_keep_defaults() {
        let toml_str = r#"
[quiz]
question_count = 6

[quiz.weights]
hard = 0.5
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.quiz.to_params();
        assert_eq!(params.question_count, 6);
        assert_eq!(params.time_limit, Duration::from_secs(30));
        assert_eq!(params.weights.easy, 0.40);
        assert_eq!(params.weights.hard, 0.5);
    }
}
