//! Start Quiz use case
//!
//! Loads a question pool (remote trivia source when available, built-in bank
//! otherwise), samples the quiz by difficulty weight and opens a session.

use crate::config::{BehaviorConfig, QuizParams};
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::sources::{QuestionSource, SourceError};
use crate::use_cases::shared::with_timeout;
use cosmos_domain::{QuizQuestion, QuizSession, builtin_questions, select_questions};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a quiz's questions came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum QuestionOrigin {
    /// Fetched from the named remote source
    Remote { source: String },
    /// Built-in bank, used because the remote source failed or is not configured
    Fallback { reason: String },
}

impl QuestionOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, QuestionOrigin::Fallback { .. })
    }
}

/// A quiz ready to play
#[derive(Debug, Clone)]
pub struct PreparedQuiz {
    pub session: QuizSession,
    pub origin: QuestionOrigin,
}

/// Use case for preparing a quiz
pub struct StartQuizUseCase {
    source: Option<Arc<dyn QuestionSource>>,
    behavior: BehaviorConfig,
    params: QuizParams,
}

impl StartQuizUseCase {
    /// Quiz from the built-in bank only
    pub fn offline(params: QuizParams) -> Self {
        Self {
            source: None,
            behavior: BehaviorConfig::default(),
            params,
        }
    }

    /// Quiz from a remote source, falling back to the built-in bank
    pub fn new(source: Arc<dyn QuestionSource>, params: QuizParams) -> Self {
        Self {
            source: Some(source),
            behavior: BehaviorConfig::default(),
            params,
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn params(&self) -> &QuizParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> PreparedQuiz {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks. Never fails.
    pub async fn execute_with_progress(&self, progress: &dyn LoadProgressNotifier) -> PreparedQuiz {
        self.execute_with_rng(progress, &mut rand::rng()).await
    }

    /// Execute with an explicit random source
    pub async fn execute_with_rng<R: Rng + ?Sized>(
        &self,
        progress: &dyn LoadProgressNotifier,
        rng: &mut R,
    ) -> PreparedQuiz {
        let (pool, origin) = self.load_pool(progress).await;
        let questions = select_questions(
            &pool,
            self.params.question_count,
            &self.params.weights,
            rng,
        );

        if questions.len() < self.params.question_count {
            info!(
                "Pool supplied {} of {} requested questions",
                questions.len(),
                self.params.question_count
            );
        }

        PreparedQuiz {
            session: QuizSession::new(questions),
            origin,
        }
    }

    async fn load_pool(
        &self,
        progress: &dyn LoadProgressNotifier,
    ) -> (Vec<QuizQuestion>, QuestionOrigin) {
        let Some(source) = &self.source else {
            debug!("No question source configured, using built-in bank");
            return (
                builtin_questions(),
                QuestionOrigin::Fallback {
                    reason: "offline mode".to_string(),
                },
            );
        };

        let amount = self.params.remote_amount();
        info!("Fetching {} questions from {}", amount, source.name());
        progress.on_fetch_start(source.name());

        let result = with_timeout(self.behavior.timeout, source.fetch_questions(amount)).await;
        let result = match result {
            Ok(questions) if questions.is_empty() => {
                Err(SourceError::Malformed("no questions returned".to_string()))
            }
            other => other,
        };

        match result {
            Ok(mut questions) => {
                progress.on_fetch_complete(source.name(), true);
                info!("Received {} questions from {}", questions.len(), source.name());

                if questions.len() < self.params.question_count {
                    let mut seen: HashSet<u64> = questions.iter().map(|q| q.id).collect();
                    let top_up: Vec<_> = builtin_questions()
                        .into_iter()
                        .filter(|q| seen.insert(q.id))
                        .collect();
                    debug!("Topping up remote pool with {} built-in questions", top_up.len());
                    questions.extend(top_up);
                }

                (
                    questions,
                    QuestionOrigin::Remote {
                        source: source.name().to_string(),
                    },
                )
            }
            Err(e) => {
                warn!("Question source {} failed: {}", source.name(), e);
                progress.on_fetch_complete(source.name(), false);
                let reason = e.to_string();
                progress.on_fallback(source.name(), &reason);
                (builtin_questions(), QuestionOrigin::Fallback { reason })
            }
        }
    }
}
