//! Local persistence adapters

mod json_high_scores;

pub use json_high_scores::{HIGH_SCORES_FILE, JsonHighScoreStore};
