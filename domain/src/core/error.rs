//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Quiz session already finished")]
    SessionFinished,

    #[error("Answer not among the options: {0}")]
    UnknownAnswer(String),
}

impl DomainError {
    /// Check if this error means the quiz is over
    pub fn is_finished(&self) -> bool {
        matches!(self, DomainError::SessionFinished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_finished_display() {
        let error = DomainError::SessionFinished;
        assert_eq!(error.to_string(), "Quiz session already finished");
    }

    #[test]
    fn test_is_finished_check() {
        assert!(DomainError::SessionFinished.is_finished());
        assert!(!DomainError::InvalidQuestion("test".to_string()).is_finished());
        assert!(!DomainError::UnknownAnswer("Pluto".to_string()).is_finished());
    }
}
