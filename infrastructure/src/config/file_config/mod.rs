//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quiz;
mod sources;
mod storage;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use quiz::FileQuizConfig;
pub use sources::FileSourcesConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight sums further than this from 1.0 are reported
const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Severity of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("quiz.question_count cannot be 0")]
    ZeroQuestionCount,

    #[error("quiz.time_limit_seconds cannot be 0")]
    ZeroTimeLimit,

    #[error("sources.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("quiz.weights.{0} cannot be negative")]
    NegativeWeight(&'static str),

    #[error("quiz.weights sum to {0:.2}; tiers will be topped up from the rest of the pool")]
    WeightsDoNotSumToOne(f64),

    #[error("{field}: '{value}' is not an http(s) URL")]
    InvalidUrl { field: &'static str, value: String },
}

/// A single detected problem with the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Remote source settings
    pub sources: FileSourcesConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Local storage settings
    pub storage: FileStorageConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Quiz shape
        if self.quiz.question_count == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroQuestionCount));
        }
        if self.quiz.time_limit_seconds == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::ZeroTimeLimit));
        }

        // 2. Tier weights
        let weights = &self.quiz.weights;
        for (name, value) in [
            ("easy", weights.easy),
            ("medium", weights.medium),
            ("hard", weights.hard),
        ] {
            if value < 0.0 {
                issues.push(ConfigIssue::error(ConfigValidationError::NegativeWeight(name)));
            }
        }
        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            issues.push(ConfigIssue::warning(
                ConfigValidationError::WeightsDoNotSumToOne(total),
            ));
        }

        // 3. Sources
        if self.sources.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidTimeout));
        }
        for (field, value) in [
            ("sources.trivia_url", &self.sources.trivia_url),
            ("sources.news_url", &self.sources.news_url),
            ("sources.stars_url", &self.sources.stars_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                issues.push(ConfigIssue::error(ConfigValidationError::InvalidUrl {
                    field,
                    value: value.clone(),
                }));
            }
        }

        issues
    }
}
