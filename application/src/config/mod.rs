//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`BehaviorConfig`] - remote call timeouts
//! - [`QuizParams`] - question count, per-question time limit and tier weights

mod behavior;
mod quiz_params;

pub use behavior::BehaviorConfig;
pub use quiz_params::QuizParams;
