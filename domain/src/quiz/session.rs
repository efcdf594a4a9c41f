//! Quiz session
//!
//! A single play-through of a selected question set: the current position,
//! the running score and a record of every answer. Created at quiz start and
//! discarded on restart.

use super::question::{Difficulty, QuizQuestion, calculate_score};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Time allowed per question before it counts as unanswered
pub const DEFAULT_QUESTION_TIME_LIMIT: Duration = Duration::from_secs(30);

/// What happened to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AnswerRecord {
    Answered {
        question_id: u64,
        answer: String,
        correct: bool,
        points: u32,
    },
    TimedOut {
        question_id: u64,
    },
}

/// Feedback for the question just closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub points: u32,
}

/// Final tally of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub total_questions: usize,
    pub correct_count: usize,
    pub timed_out: usize,
    pub points: u32,
    pub max_points: u32,
}

impl QuizSummary {
    /// Share of questions answered correctly, 0-100
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            self.correct_count as f64 * 100.0 / self.total_questions as f64
        }
    }
}

/// State of one quiz play-through
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    correct_count: usize,
    points: u32,
    records: Vec<AnswerRecord>,
}

impl QuizSession {
    /// Start a session. Repeated question ids are dropped, keeping the first.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let mut seen = HashSet::new();
        let questions: Vec<_> = questions
            .into_iter()
            .filter(|q| seen.insert(q.id))
            .collect();

        Self {
            records: Vec::with_capacity(questions.len()),
            questions,
            current_index: 0,
            correct_count: 0,
            points: 0,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 0-based index of the question being asked
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Map user input to an option of the current question.
    ///
    /// Accepts the 1-based option number or the option text (case-insensitive).
    pub fn resolve_answer(&self, input: &str) -> Option<String> {
        let question = self.current()?;
        let input = input.trim();

        if let Ok(number) = input.parse::<usize>() {
            return question.option_at(number).map(str::to_string);
        }
        question
            .options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(input))
            .cloned()
    }

    /// Answer the current question and advance
    pub fn answer(&mut self, choice: &str) -> Result<AnswerOutcome, DomainError> {
        let question = self.current().ok_or(DomainError::SessionFinished)?;
        if !question.options.iter().any(|o| o == choice) {
            return Err(DomainError::UnknownAnswer(choice.to_string()));
        }

        let correct = question.is_correct(choice);
        let points = calculate_score(correct, question.difficulty);
        let outcome = AnswerOutcome {
            correct,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            points,
        };
        let record = AnswerRecord::Answered {
            question_id: question.id,
            answer: choice.to_string(),
            correct,
            points,
        };

        if correct {
            self.correct_count += 1;
            self.points += points;
        }
        self.records.push(record);
        self.current_index += 1;
        Ok(outcome)
    }

    /// Close the current question unanswered and advance
    pub fn time_up(&mut self) -> Result<AnswerOutcome, DomainError> {
        let question = self.current().ok_or(DomainError::SessionFinished)?;
        let outcome = AnswerOutcome {
            correct: false,
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            points: 0,
        };
        let record = AnswerRecord::TimedOut {
            question_id: question.id,
        };

        self.records.push(record);
        self.current_index += 1;
        Ok(outcome)
    }

    /// Tier most of the questions came from; ties go to the harder tier
    pub fn prevailing_difficulty(&self) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .map(|d| (d, self.questions.iter().filter(|q| q.difficulty == d).count()))
            .filter(|(_, count)| *count > 0)
            .max_by_key(|(_, count)| *count)
            .map(|(d, _)| d)
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            total_questions: self.questions.len(),
            correct_count: self.correct_count,
            timed_out: self
                .records
                .iter()
                .filter(|r| matches!(r, AnswerRecord::TimedOut { .. }))
                .count(),
            points: self.points,
            max_points: self.questions.iter().map(|q| q.difficulty.points()).sum(),
        }
    }
}
