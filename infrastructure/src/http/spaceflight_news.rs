//! Spaceflight News API source (`GET {base}/v4/articles?limit=N`)

use super::{fetch_text, parse_json};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cosmos_application::{NewsSource, SourceError};
use cosmos_domain::NewsArticle;
use cosmos_domain::news::SPACE_IMAGE;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    results: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    id: u64,
    title: String,
    url: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    summary: String,
    published_at: DateTime<Utc>,
    #[serde(default)]
    news_site: String,
}

impl From<RawArticle> for NewsArticle {
    fn from(raw: RawArticle) -> Self {
        let image_url = raw
            .image_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| SPACE_IMAGE.to_string());
        Self {
            id: raw.id,
            title: raw.title.trim().to_string(),
            url: raw.url,
            image_url,
            summary: raw.summary.trim().to_string(),
            published_at: raw.published_at,
            news_site: raw.news_site,
        }
    }
}

/// News source backed by api.spaceflightnewsapi.net
pub struct SpaceflightNewsSource {
    client: reqwest::Client,
    base_url: String,
}

impl SpaceflightNewsSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NewsSource for SpaceflightNewsSource {
    fn name(&self) -> &str {
        "spaceflight-news"
    }

    async fn fetch_articles(&self, limit: usize) -> Result<Vec<NewsArticle>, SourceError> {
        let request = self
            .client
            .get(format!("{}/v4/articles", self.base_url))
            .query(&[("limit", limit)])
            .header("Accept", "application/json");

        let body = fetch_text(request).await?;
        parse_articles(&body)
    }
}

fn parse_articles(body: &str) -> Result<Vec<NewsArticle>, SourceError> {
    let payload: ArticlesResponse = parse_json(body)?;
    Ok(payload.results.into_iter().map(NewsArticle::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_articles() {
        let body = r#"{
            "count": 2,
            "next": null,
            "results": [
                {
                    "id": 30012,
                    "title": " Starship flight test ",
                    "url": "https://example.com/starship",
                    "image_url": "https://example.com/starship.jpg",
                    "news_site": "SpaceNews",
                    "summary": "SpaceX flew again.",
                    "published_at": "2025-03-14T12:30:00Z",
                    "featured": false
                },
                {
                    "id": 30013,
                    "title": "Artemis update",
                    "url": "https://example.com/artemis",
                    "image_url": "",
                    "news_site": "NASA",
                    "summary": "",
                    "published_at": "2025-03-15T08:00:00.000Z"
                }
            ]
        }"#;

        let articles = parse_articles(body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Starship flight test");
        assert_eq!(articles[0].image_url, "https://example.com/starship.jpg");
        assert_eq!(articles[0].published_label(), "March 14, 2025");
        assert_eq!(articles[1].image_url, SPACE_IMAGE);
        assert_eq!(articles[1].news_site, "NASA");
    }

    #[test]
    fn test_missing_results_is_malformed() {
        assert!(matches!(
            parse_articles(r#"{"detail": "Not found."}"#),
            Err(SourceError::Malformed(_))
        ));
    }
}
