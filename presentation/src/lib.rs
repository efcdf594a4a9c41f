//! Presentation layer for cosmos-explorer
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz loop.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, NewsArgs, OutputFormat, PlanetsArgs, QuizArgs, SkyArgs};
pub use config::{OutputConfig, ProgressMode};
pub use output::{
    console::ConsoleFormatter, formatter::OutputFormatter, formatter_for, json::JsonFormatter,
};
pub use progress::notifier_for;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use quiz::runner::QuizRunner;
