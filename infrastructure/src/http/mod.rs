//! HTTP adapters for the remote data sources
//!
//! All adapters share one `reqwest::Client`. Responses are read as text and
//! decoded by pure mapping functions so payload handling can be tested
//! without a network.

mod api_ninjas;
mod opentdb;
mod spaceflight_news;

pub use api_ninjas::ApiNinjasStarCatalog;
pub use opentdb::OpenTdbQuestionSource;
pub use spaceflight_news::SpaceflightNewsSource;

/// Client shared by all HTTP adapters
pub use reqwest::Client as HttpClient;

use cosmos_application::SourceError;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("cosmos-explorer/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client.
///
/// `timeout` applies to each whole request; the use cases add their own
/// deadline on top.
pub fn build_client(timeout: Option<Duration>) -> Result<HttpClient, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Send a request and return the body of a successful response
pub(crate) async fn fetch_text(request: reqwest::RequestBuilder) -> Result<String, SourceError> {
    let response = request.send().await.map_err(request_error)?;

    let status = response.status();
    debug!("HTTP {} from {}", status.as_u16(), response.url());
    if !status.is_success() {
        return Err(SourceError::Http {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    response.text().await.map_err(request_error)
}

/// Parse a JSON body into `T`
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))
}

fn request_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Connection(e.to_string())
    }
}

/// Decode HTML entities (`&quot;`, `&#039;`, `&eacute;` ...) to plain text
pub(crate) fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let fragment = scraper::Html::parse_fragment(text);
    fragment.root_element().text().collect()
}
