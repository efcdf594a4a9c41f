//! Fetch News use case
//!
//! Loads the latest spaceflight articles, substituting the backup article
//! whenever the feed is unreachable or returns nothing usable.

use crate::config::BehaviorConfig;
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::sources::{NewsSource, SourceError};
use crate::use_cases::shared::with_timeout;
use chrono::Utc;
use cosmos_domain::{NewsArticle, NewsFeed};
use std::sync::Arc;
use tracing::{info, warn};

/// Number of articles requested by default
pub const DEFAULT_NEWS_LIMIT: usize = 10;

/// Use case for loading the news feed
pub struct FetchNewsUseCase {
    source: Arc<dyn NewsSource>,
    behavior: BehaviorConfig,
    limit: usize,
}

impl FetchNewsUseCase {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self {
            source,
            behavior: BehaviorConfig::default(),
            limit: DEFAULT_NEWS_LIMIT,
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub async fn execute(&self) -> NewsFeed {
        self.execute_with_progress(&NoProgress).await
    }

    pub async fn execute_with_progress(&self, progress: &dyn LoadProgressNotifier) -> NewsFeed {
        let name = self.source.name();
        info!("Fetching {} articles from {}", self.limit, name);
        progress.on_fetch_start(name);

        let result = with_timeout(self.behavior.timeout, self.source.fetch_articles(self.limit))
            .await
            .and_then(|articles| {
                if articles.is_empty() {
                    Err(SourceError::Malformed("feed returned no articles".to_string()))
                } else {
                    Ok(articles)
                }
            });

        match result {
            Ok(mut articles) => {
                progress.on_fetch_complete(name, true);
                articles.truncate(self.limit);
                NewsFeed {
                    articles,
                    degraded: false,
                }
            }
            Err(e) => {
                warn!("News source {} failed: {}", name, e);
                progress.on_fetch_complete(name, false);
                progress.on_fallback(name, &e.to_string());
                NewsFeed {
                    articles: vec![NewsArticle::fallback(Utc::now())],
                    degraded: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    struct MockNews {
        articles: Result<Vec<NewsArticle>, String>,
        requested: Mutex<Option<usize>>,
    }

    impl MockNews {
        fn ok(articles: Vec<NewsArticle>) -> Self {
            Self {
                articles: Ok(articles),
                requested: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                articles: Err(message.to_string()),
                requested: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl NewsSource for MockNews {
        fn name(&self) -> &str {
            "mock-news"
        }

        async fn fetch_articles(&self, limit: usize) -> Result<Vec<NewsArticle>, SourceError> {
            *self.requested.lock().unwrap() = Some(limit);
            self.articles
                .clone()
                .map_err(SourceError::Connection)
        }
    }

    fn article(id: u64) -> NewsArticle {
        NewsArticle {
            id,
            title: format!("Launch {}", id),
            url: format!("https://example.com/{}", id),
            image_url: String::new(),
            summary: "Liftoff".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap(),
            news_site: "Example".to_string(),
        }
    }

    #[tokio::test]
    async fn test_articles_passed_through() {
        let source = Arc::new(MockNews::ok(vec![article(1), article(2)]));
        let feed = FetchNewsUseCase::new(source.clone()).execute().await;

        assert!(!feed.degraded);
        assert_eq!(feed.articles.len(), 2);
        assert_eq!(feed.articles[0].title, "Launch 1");
        assert_eq!(*source.requested.lock().unwrap(), Some(DEFAULT_NEWS_LIMIT));
    }

    #[tokio::test]
    async fn test_failure_yields_fallback_article() {
        let source = Arc::new(MockNews::failing("connection refused"));
        let feed = FetchNewsUseCase::new(source).execute().await;

        assert!(feed.degraded);
        assert_eq!(feed.articles.len(), 1);
        assert_eq!(feed.articles[0].title, "Space Exploration");
        assert_eq!(feed.articles[0].url, "https://nasa.gov");
    }

    #[tokio::test]
    async fn test_empty_feed_is_degraded() {
        let feed = FetchNewsUseCase::new(Arc::new(MockNews::ok(vec![])))
            .execute()
            .await;
        assert!(feed.degraded);
        assert_eq!(feed.articles[0].id, 1);
    }

    #[tokio::test]
    async fn test_limit_truncates_oversized_response() {
        let source = Arc::new(MockNews::ok((1..=6).map(article).collect()));
        let feed = FetchNewsUseCase::new(source.clone())
            .with_limit(3)
            .execute()
            .await;
        assert_eq!(feed.articles.len(), 3);
        assert_eq!(*source.requested.lock().unwrap(), Some(3));
    }
}
