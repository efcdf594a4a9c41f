//! Configuration file loading for cosmos-explorer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COSMOS_*` environment variables (`COSMOS_QUIZ__QUESTION_COUNT=5`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./cosmos.toml` or `./.cosmos.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cosmos-explorer/config.toml`
//! 5. Default values

mod file_config;
pub(crate) mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileQuizConfig, FileSourcesConfig, FileStorageConfig, Severity,
};
pub use loader::ConfigLoader;
