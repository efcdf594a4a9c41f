//! Remote data source ports
//!
//! Defines the interfaces for the trivia, news and star catalog services.
//! Every source may fail; callers decide how to degrade.

use async_trait::async_trait;
use cosmos_domain::{CatalogStar, NewsArticle, QuizQuestion};
use thiserror::Error;

/// Errors that can occur while fetching from a remote source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Malformed(String),

    #[error("Source not configured: {0}")]
    NotConfigured(String),

    #[error("Timeout")]
    Timeout,
}

/// Supplies quiz questions (e.g. a trivia web service)
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable source name for logs
    fn name(&self) -> &str;

    /// Fetch up to `amount` normalized questions
    async fn fetch_questions(&self, amount: usize) -> Result<Vec<QuizQuestion>, SourceError>;
}

/// Supplies spaceflight news articles
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch the `limit` most recent articles
    async fn fetch_articles(&self, limit: usize) -> Result<Vec<NewsArticle>, SourceError>;
}

/// Supplies star positions from an external catalog
#[async_trait]
pub trait StarCatalogSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_stars(&self) -> Result<Vec<CatalogStar>, SourceError>;
}
