//! API Ninjas star catalog (`GET {url}` with an `X-Api-Key` header)

use super::{fetch_text, parse_json};
use async_trait::async_trait;
use cosmos_application::{SourceError, StarCatalogSource};
use cosmos_domain::{
    CatalogStar, CelestialCoordinate, DomainError, parse_declination, parse_right_ascension,
};
use serde::Deserialize;
use tracing::{debug, warn};

/// The service reports magnitudes as strings; accept numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Magnitude {
    Number(f64),
    Text(String),
}

impl Magnitude {
    fn value(&self) -> Option<f64> {
        let value = match self {
            Magnitude::Number(n) => Some(*n),
            Magnitude::Text(s) => s.trim().parse().ok(),
        };
        value.filter(|m: &f64| m.is_finite())
    }
}

#[derive(Debug, Deserialize)]
struct RawStar {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    constellation: Option<String>,
    right_ascension: String,
    declination: String,
    apparent_magnitude: Option<Magnitude>,
    #[serde(default)]
    spectral_class: Option<String>,
}

/// Star catalog backed by api-ninjas.com
pub struct ApiNinjasStarCatalog {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl ApiNinjasStarCatalog {
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl StarCatalogSource for ApiNinjasStarCatalog {
    fn name(&self) -> &str {
        "api-ninjas"
    }

    async fn fetch_stars(&self) -> Result<Vec<CatalogStar>, SourceError> {
        if self.api_key.is_empty() {
            return Err(SourceError::NotConfigured("stars_api_key".to_string()));
        }

        let mut request = self
            .client
            .get(&self.url)
            .header("X-Api-Key", &self.api_key);
        if !self.url.contains('?') {
            // The service rejects unfiltered queries
            request = request.query(&[("max_apparent_magnitude", "3")]);
        }

        let body = fetch_text(request).await?;
        parse_stars(&body)
    }
}

fn parse_stars(body: &str) -> Result<Vec<CatalogStar>, SourceError> {
    let rows: Vec<RawStar> = parse_json(body)?;
    let total = rows.len();

    let stars: Vec<CatalogStar> = rows
        .into_iter()
        .filter_map(|row| match to_star(row) {
            Ok(star) => Some(star),
            Err(e) => {
                warn!("Skipping catalog star: {}", e);
                None
            }
        })
        .collect();

    debug!("Mapped {} of {} catalog rows", stars.len(), total);
    Ok(stars)
}

fn to_star(row: RawStar) -> Result<CatalogStar, String> {
    let name = row
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Unknown Star".to_string());

    let coordinate = parse_coordinate(&row.right_ascension, &row.declination)
        .map_err(|e| format!("{}: {}", name, e))?;
    let magnitude = row
        .apparent_magnitude
        .as_ref()
        .and_then(Magnitude::value)
        .ok_or_else(|| format!("{}: missing apparent magnitude", name))?;

    let star = CatalogStar::new(
        name,
        coordinate,
        magnitude,
        row.constellation.unwrap_or_default(),
    );
    Ok(match row.spectral_class.filter(|c| !c.trim().is_empty()) {
        Some(class) => star.with_spectral_class(class),
        None => star,
    })
}

fn parse_coordinate(ra: &str, dec: &str) -> Result<CelestialCoordinate, DomainError> {
    Ok(CelestialCoordinate::new(
        parse_right_ascension(ra)?,
        parse_declination(dec)?,
    ))
}
