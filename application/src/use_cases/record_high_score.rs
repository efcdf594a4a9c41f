//! Record High Score use case
//!
//! Loads the board from the injected store, inserts a finished quiz's score
//! and saves the board back when it changed.

use crate::ports::high_score_store::{HighScoreStore, StoreError};
use cosmos_domain::{HighScore, HighScoreBoard};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of recording a score
#[derive(Debug, Clone)]
pub struct RecordHighScoreOutput {
    /// 1-based rank, or `None` when the score did not make the board
    pub rank: Option<usize>,
    pub board: HighScoreBoard,
}

/// Use case for the high-score board
pub struct RecordHighScoreUseCase {
    store: Arc<dyn HighScoreStore>,
}

impl RecordHighScoreUseCase {
    pub fn new(store: Arc<dyn HighScoreStore>) -> Self {
        Self { store }
    }

    /// Current board
    pub async fn board(&self) -> Result<HighScoreBoard, StoreError> {
        self.store.load().await
    }

    /// Whether `score` would be ranked
    pub async fn qualifies(&self, score: u32) -> Result<bool, StoreError> {
        Ok(self.store.load().await?.qualifies(score))
    }

    pub async fn execute(&self, score: HighScore) -> Result<RecordHighScoreOutput, StoreError> {
        let mut board = self.store.load().await?;
        let player = score.player_name.clone();
        let points = score.score;

        let rank = board.insert(score);
        match rank {
            Some(rank) => {
                self.store.save(&board).await?;
                info!("Recorded {} points for {} at rank {}", points, player, rank);
            }
            None => debug!("{} points for {} did not make the board", points, player),
        }

        Ok(RecordHighScoreOutput { rank, board })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use cosmos_domain::MAX_HIGH_SCORES;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        board: Mutex<HighScoreBoard>,
        saves: Mutex<usize>,
    }

    #[async_trait]
    impl HighScoreStore for MemoryStore {
        async fn load(&self) -> Result<HighScoreBoard, StoreError> {
            Ok(self.board.lock().unwrap().clone())
        }

        async fn save(&self, board: &HighScoreBoard) -> Result<(), StoreError> {
            *self.board.lock().unwrap() = board.clone();
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl HighScoreStore for BrokenStore {
        async fn load(&self) -> Result<HighScoreBoard, StoreError> {
            Err(StoreError::Corrupt("expected value at line 1".to_string()))
        }

        async fn save(&self, _board: &HighScoreBoard) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    fn entry(name: &str, points: u32) -> HighScore {
        HighScore::new(name, points, Utc::now())
    }

    #[tokio::test]
    async fn test_first_score_is_rank_one_and_saved() {
        let store = Arc::new(MemoryStore::default());
        let use_case = RecordHighScoreUseCase::new(store.clone());

        let output = use_case.execute(entry("Ada", 12)).await.unwrap();

        assert_eq!(output.rank, Some(1));
        assert_eq!(*store.saves.lock().unwrap(), 1);
        assert_eq!(use_case.board().await.unwrap().entries()[0].player_name, "Ada");
    }

    #[tokio::test]
    async fn test_scores_ranked_descending() {
        let store = Arc::new(MemoryStore::default());
        let use_case = RecordHighScoreUseCase::new(store);

        use_case.execute(entry("a", 5)).await.unwrap();
        use_case.execute(entry("b", 15)).await.unwrap();
        let output = use_case.execute(entry("c", 10)).await.unwrap();

        assert_eq!(output.rank, Some(2));
        let names: Vec<_> = output
            .board
            .entries()
            .iter()
            .map(|e| e.player_name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_low_score_on_full_board_not_saved() {
        let store = Arc::new(MemoryStore::default());
        let use_case = RecordHighScoreUseCase::new(store.clone());
        for i in 0..MAX_HIGH_SCORES {
            use_case.execute(entry("p", 10 + i as u32)).await.unwrap();
        }
        assert!(!use_case.qualifies(3).await.unwrap());

        let output = use_case.execute(entry("late", 3)).await.unwrap();

        assert_eq!(output.rank, None);
        assert_eq!(output.board.entries().len(), MAX_HIGH_SCORES);
        assert_eq!(*store.saves.lock().unwrap(), MAX_HIGH_SCORES);
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let use_case = RecordHighScoreUseCase::new(Arc::new(BrokenStore));
        let result = use_case.execute(entry("x", 1)).await;
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }
}
