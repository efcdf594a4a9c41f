//! Quiz parameters.

use cosmos_domain::{DEFAULT_QUESTION_TIME_LIMIT, DifficultyWeights};
use std::time::Duration;

/// Default number of questions per quiz
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// How many remote questions to request per question asked.
///
/// Over-fetching gives the sampler room to honour the tier weights.
pub const REMOTE_OVERSAMPLE: usize = 3;

/// Upper bound the trivia service accepts per request
pub const REMOTE_MAX_AMOUNT: usize = 50;

/// Parameters for one quiz
#[derive(Debug, Clone, PartialEq)]
pub struct QuizParams {
    pub question_count: usize,
    pub time_limit: Duration,
    pub weights: DifficultyWeights,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit: DEFAULT_QUESTION_TIME_LIMIT,
            weights: DifficultyWeights::default(),
        }
    }
}

impl QuizParams {
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_weights(mut self, weights: DifficultyWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Number of questions to request from a remote source
    pub fn remote_amount(&self) -> usize {
        self.question_count
            .saturating_mul(REMOTE_OVERSAMPLE)
            .clamp(1, REMOTE_MAX_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QuizParams::default();
        assert_eq!(params.question_count, 10);
        assert_eq!(params.time_limit, Duration::from_secs(30));
        assert_eq!(params.remote_amount(), 30);
    }

    #[test]
    fn test_remote_amount_is_clamped() {
        assert_eq!(QuizParams::default().with_question_count(40).remote_amount(), 50);
        assert_eq!(QuizParams::default().with_question_count(0).remote_amount(), 1);
    }

    #[test]
    fn test_remote_amount_saturates_for_huge_counts() {
        let params = QuizParams::default().with_question_count(usize::MAX);
        assert_eq!(params.remote_amount(), REMOTE_MAX_AMOUNT);
    }
}
