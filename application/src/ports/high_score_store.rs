//! High-score persistence port.

use async_trait::async_trait;
use cosmos_domain::HighScoreBoard;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt score file: {0}")]
    Corrupt(String),

    #[error("No storage location available")]
    Unavailable,
}

/// Loads and saves the high-score board.
///
/// Replaces ambient browser storage with an explicit, injectable service.
#[async_trait]
pub trait HighScoreStore: Send + Sync {
    /// Load the board; a store with nothing saved yields an empty board
    async fn load(&self) -> Result<HighScoreBoard, StoreError>;

    async fn save(&self, board: &HighScoreBoard) -> Result<(), StoreError>;
}
