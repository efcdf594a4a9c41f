//! Remote source configuration from TOML (`[sources]` section)

use cosmos_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRIVIA_URL: &str = "https://opentdb.com";
pub const DEFAULT_NEWS_URL: &str = "https://api.spaceflightnewsapi.net";
pub const DEFAULT_STARS_URL: &str = "https://api.api-ninjas.com/v1/stars";

/// Raw source configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourcesConfig {
    /// Open Trivia Database base URL
    pub trivia_url: String,
    /// Spaceflight News API base URL
    pub news_url: String,
    /// Star catalog endpoint
    pub stars_url: String,
    /// API key for the star catalog; the catalog is skipped without one
    pub stars_api_key: Option<String>,
    /// Timeout in seconds for each remote request
    pub timeout_seconds: Option<u64>,
    /// Number of news articles to request
    pub news_limit: usize,
}

impl Default for FileSourcesConfig {
    fn default() -> Self {
        Self {
            trivia_url: DEFAULT_TRIVIA_URL.to_string(),
            news_url: DEFAULT_NEWS_URL.to_string(),
            stars_url: DEFAULT_STARS_URL.to_string(),
            stars_api_key: None,
            timeout_seconds: Some(10),
            news_limit: 10,
        }
    }
}

impl FileSourcesConfig {
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.timeout_seconds)
    }

    /// The API key, ignoring blank values
    pub fn stars_api_key(&self) -> Option<&str> {
        self.stars_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
