//! Quiz subdomain
//!
//! - [`question`] - validated quiz questions, difficulty tiers and categories
//! - [`sampler`] - weighted-random question selection
//! - [`bank`] - built-in offline question bank
//! - [`session`] - one play-through of a selected question set
//! - [`high_score`] - bounded high-score board

pub mod bank;
pub mod high_score;
pub mod question;
pub mod sampler;
pub mod session;
