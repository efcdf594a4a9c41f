//! Quiz question value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of answer options every question carries
pub const OPTION_COUNT: usize = 4;

/// Difficulty tier of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in sampling order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Points awarded for a correct answer at this tier
    pub fn points(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Score for a single answer: the tier's points when correct, zero otherwise
pub fn calculate_score(correct: bool, difficulty: Difficulty) -> u32 {
    if correct { difficulty.points() } else { 0 }
}

/// Topic of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Planets,
    Stars,
    SpaceExploration,
    #[default]
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Planets => "planets",
            Category::Stars => "stars",
            Category::SpaceExploration => "space-exploration",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    /// Unknown categories fall back to [`Category::General`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "planets" => Category::Planets,
            "stars" => Category::Stars,
            "space-exploration" | "exploration" => Category::SpaceExploration,
            _ => Category::General,
        })
    }
}

/// A multiple-choice quiz question (Value Object)
///
/// Always holds exactly [`OPTION_COUNT`] distinct options, one of which is
/// the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub category: Category,
}

impl QuizQuestion {
    /// Build a question, validating its options.
    pub fn try_new(
        id: u64,
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        difficulty: Difficulty,
        category: Category,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let correct_answer = correct_answer.into();

        if question.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text cannot be empty".to_string(),
            ));
        }
        if options.len() != OPTION_COUNT {
            return Err(DomainError::InvalidQuestion(format!(
                "expected {} options, got {} ({})",
                OPTION_COUNT,
                options.len(),
                question
            )));
        }
        let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
        if distinct.len() != options.len() {
            return Err(DomainError::InvalidQuestion(format!(
                "duplicate options ({})",
                question
            )));
        }
        if !options.contains(&correct_answer) {
            return Err(DomainError::InvalidQuestion(format!(
                "correct answer '{}' is not among the options",
                correct_answer
            )));
        }

        Ok(Self {
            id,
            question,
            options,
            correct_answer,
            explanation: String::new(),
            difficulty,
            category,
        })
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Resolve a 1-based option number to its text
    pub fn option_at(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn mars() -> QuizQuestion {
        QuizQuestion::try_new(
            1,
            "Which planet is known as the 'Red Planet'?",
            options(&["Venus", "Mars", "Jupiter", "Mercury"]),
            "Mars",
            Difficulty::Easy,
            Category::Planets,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_question() {
        let q = mars();
        assert!(q.is_correct("Mars"));
        assert!(!q.is_correct("Venus"));
        assert_eq!(q.option_at(2), Some("Mars"));
        assert_eq!(q.option_at(0), None);
        assert_eq!(q.option_at(5), None);
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let err = QuizQuestion::try_new(
            2,
            "How many?",
            options(&["1", "2", "3"]),
            "1",
            Difficulty::Easy,
            Category::General,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_rejects_duplicate_options() {
        let result = QuizQuestion::try_new(
            3,
            "Pick one",
            options(&["A", "A", "B", "C"]),
            "A",
            Difficulty::Medium,
            Category::General,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_missing_correct_answer() {
        let result = QuizQuestion::try_new(
            4,
            "Pick one",
            options(&["A", "B", "C", "D"]),
            "E",
            Difficulty::Hard,
            Category::General,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_text() {
        let result = QuizQuestion::try_new(
            5,
            "   ",
            options(&["A", "B", "C", "D"]),
            "A",
            Difficulty::Hard,
            Category::General,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_difficulty_parse_and_points() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(calculate_score(true, Difficulty::Easy), 1);
        assert_eq!(calculate_score(true, Difficulty::Medium), 2);
        assert_eq!(calculate_score(true, Difficulty::Hard), 3);
        assert_eq!(calculate_score(false, Difficulty::Hard), 0);
    }

    #[test]
    fn test_category_parse_falls_back_to_general() {
        assert_eq!("Stars".parse::<Category>().unwrap(), Category::Stars);
        assert_eq!(
            "Science & Nature".parse::<Category>().unwrap(),
            Category::General
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(mars()).unwrap();
        assert_eq!(json["correctAnswer"], "Mars");
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["category"], "planets");
    }
}
