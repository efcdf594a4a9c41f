//! Infrastructure layer for cosmos-explorer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileOutputFormat, FileQuizConfig, FileSourcesConfig, FileStorageConfig, Severity,
};
pub use http::{
    ApiNinjasStarCatalog, HttpClient, OpenTdbQuestionSource, SpaceflightNewsSource, build_client,
};
pub use storage::{HIGH_SCORES_FILE, JsonHighScoreStore};
