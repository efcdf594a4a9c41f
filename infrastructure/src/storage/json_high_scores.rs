//! JSON file high-score store.
//!
//! The board is written as a JSON array of entries. The file is replaced
//! atomically: the new board goes to a sibling temp file which is then
//! renamed over the old one.

use crate::config::loader::APP_DIR;
use async_trait::async_trait;
use cosmos_application::{HighScoreStore, StoreError};
use cosmos_domain::{HighScore, HighScoreBoard};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HIGH_SCORES_FILE: &str = "high_scores.json";

/// High-score store backed by a JSON file
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$XDG_DATA_HOME/cosmos-explorer/high_scores.json`
    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::Unavailable)?;
        Ok(Self::new(dir.join(APP_DIR).join(HIGH_SCORES_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HighScoreStore for JsonHighScoreStore {
    async fn load(&self) -> Result<HighScoreBoard, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No high-score file at {}", self.path.display());
                return Ok(HighScoreBoard::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(HighScoreBoard::default());
        }

        let entries: Vec<HighScore> = serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", self.path.display(), e)))?;
        Ok(HighScoreBoard::from_entries(entries))
    }

    async fn save(&self, board: &HighScoreBoard) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(board)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(
            "Saved {} high scores to {}",
            board.entries().len(),
            self.path.display()
        );
        Ok(())
    }
}
