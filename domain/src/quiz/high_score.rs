//! High-score board

use super::question::Difficulty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// A finished quiz worth remembering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScore {
    pub player_name: String,
    pub score: u32,
    /// Tier most of the quiz's questions came from, if recorded
    pub difficulty: Option<Difficulty>,
    pub date: DateTime<Utc>,
}

impl HighScore {
    pub fn new(player_name: impl Into<String>, score: u32, date: DateTime<Utc>) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            difficulty: None,
            date,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// Best scores, highest first, capped at [`MAX_HIGH_SCORES`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreBoard {
    entries: Vec<HighScore>,
}

impl HighScoreBoard {
    /// Build a board from stored entries, re-establishing order and cap
    pub fn from_entries(mut entries: Vec<HighScore>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `score` would make it onto the board
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Insert a score. Returns its 1-based rank, or `None` if it fell off the board.
    ///
    /// Ties keep earlier entries ahead.
    pub fn insert(&mut self, score: HighScore) -> Option<usize> {
        let position = self
            .entries
            .iter()
            .position(|e| score.score > e.score)
            .unwrap_or(self.entries.len());

        if position >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(position, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(position + 1)
    }
}
