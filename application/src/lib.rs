//! Application layer for cosmos-explorer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, QuizParams};
pub use ports::{
    high_score_store::{HighScoreStore, StoreError},
    progress::{LoadProgressNotifier, NoProgress},
    sources::{NewsSource, QuestionSource, SourceError, StarCatalogSource},
};
pub use use_cases::build_sky_chart::{BuildSkyChartInput, BuildSkyChartUseCase};
pub use use_cases::fetch_news::{DEFAULT_NEWS_LIMIT, FetchNewsUseCase};
pub use use_cases::record_high_score::{RecordHighScoreOutput, RecordHighScoreUseCase};
pub use use_cases::start_quiz::{PreparedQuiz, QuestionOrigin, StartQuizUseCase};
