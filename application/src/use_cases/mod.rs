//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_sky_chart;
pub mod fetch_news;
pub mod record_high_score;
pub(crate) mod shared;
pub mod start_quiz;
