//! Space news articles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image shown for every article in the feed
pub const SPACE_IMAGE: &str = "https://images.nasa.gov/images/as11-40-5874~orig.jpg";

/// A news article from a spaceflight news feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub image_url: String,
    pub summary: String,
    pub published_at: DateTime<Utc>,
    pub news_site: String,
}

impl NewsArticle {
    /// Backup article shown when the feed cannot be loaded
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            id: 1,
            title: "Space Exploration".to_string(),
            url: "https://nasa.gov".to_string(),
            image_url: SPACE_IMAGE.to_string(),
            summary: "Discover the latest in space exploration and astronomical findings."
                .to_string(),
            published_at: now,
            news_site: "Space Explorer".to_string(),
        }
    }

    /// Publication date formatted like `January 5, 2025`
    pub fn published_label(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// Articles plus whether they are the fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsFeed {
    pub articles: Vec<NewsArticle>,
    /// True when the feed could not be loaded and backup content is shown
    pub degraded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fallback_article() {
        let now = Utc.with_ymd_and_hms(2025, 1, 5, 8, 30, 0).unwrap();
        let article = NewsArticle::fallback(now);
        assert_eq!(article.title, "Space Exploration");
        assert_eq!(article.image_url, SPACE_IMAGE);
        assert_eq!(article.published_label(), "January 5, 2025");
    }
}
