//! Build Sky Chart use case
//!
//! Projects the built-in star table, the planet sightings for a date and the
//! constellation figures onto the celestial sphere. When a star catalog is
//! configured its stars are layered on top; a catalog failure only costs
//! those extra stars.

use crate::config::BehaviorConfig;
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::sources::StarCatalogSource;
use crate::use_cases::shared::with_timeout;
use chrono::{DateTime, Utc};
use cosmos_domain::{
    CatalogStar, DEFAULT_SKY_RADIUS, SkyChart, constellation_figures, major_stars,
    planet_positions,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the sky chart
#[derive(Debug, Clone)]
pub struct BuildSkyChartInput {
    pub date: DateTime<Utc>,
    pub radius: f64,
    pub include_constellations: bool,
}

impl BuildSkyChartInput {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            radius: DEFAULT_SKY_RADIUS,
            include_constellations: true,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn without_constellations(mut self) -> Self {
        self.include_constellations = false;
        self
    }
}

/// Use case for assembling the night-sky chart
pub struct BuildSkyChartUseCase {
    catalog: Option<Arc<dyn StarCatalogSource>>,
    behavior: BehaviorConfig,
}

impl BuildSkyChartUseCase {
    /// Chart from built-in data only
    pub fn new() -> Self {
        Self {
            catalog: None,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn StarCatalogSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub async fn execute(&self, input: BuildSkyChartInput) -> SkyChart {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: BuildSkyChartInput,
        progress: &dyn LoadProgressNotifier,
    ) -> SkyChart {
        let mut stars = major_stars();
        stars.extend(self.catalog_stars(progress).await);

        let planets = planet_positions(input.date);
        let figures = if input.include_constellations {
            constellation_figures()
        } else {
            Vec::new()
        };

        let chart = SkyChart::assemble(input.radius, &stars, &planets, &figures);
        info!(
            "Sky chart: {} objects, {} constellation segments",
            chart.objects.len(),
            chart.lines.len()
        );
        chart
    }

    async fn catalog_stars(&self, progress: &dyn LoadProgressNotifier) -> Vec<CatalogStar> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };

        progress.on_fetch_start(catalog.name());
        match with_timeout(self.behavior.timeout, catalog.fetch_stars()).await {
            Ok(stars) => {
                progress.on_fetch_complete(catalog.name(), true);
                debug!("{} stars from {}", stars.len(), catalog.name());
                stars
            }
            Err(e) => {
                warn!("Star catalog {} failed: {}", catalog.name(), e);
                progress.on_fetch_complete(catalog.name(), false);
                progress.on_fallback(catalog.name(), &e.to_string());
                Vec::new()
            }
        }
    }
}

impl Default for BuildSkyChartUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::sources::SourceError;
    use async_trait::async_trait;
    use cosmos_domain::{CelestialCoordinate, SkyObjectKind};

    struct MockCatalog {
        stars: Option<Vec<CatalogStar>>,
    }

    #[async_trait]
    impl StarCatalogSource for MockCatalog {
        fn name(&self) -> &str {
            "mock-catalog"
        }

        async fn fetch_stars(&self) -> Result<Vec<CatalogStar>, SourceError> {
            self.stars
                .clone()
                .ok_or_else(|| SourceError::NotConfigured("no api key".to_string()))
        }
    }

    fn input() -> BuildSkyChartInput {
        BuildSkyChartInput::new(Utc::now())
    }

    #[tokio::test]
    async fn test_builtin_chart() {
        let chart = BuildSkyChartUseCase::new().execute(input()).await;

        let builtin = major_stars().len();
        let stars = chart
            .objects
            .iter()
            .filter(|o| o.kind == SkyObjectKind::Star)
            .count();
        assert_eq!(stars, builtin);
        assert!(chart.find("mars").is_some());
        assert!(!chart.lines.is_empty());
        assert_eq!(chart.radius, DEFAULT_SKY_RADIUS);
    }

    #[tokio::test]
    async fn test_catalog_stars_are_added() {
        let extra = CatalogStar::new(
            "Mizar",
            CelestialCoordinate::new(200.98, 54.93),
            2.23,
            "Ursa Major",
        );
        let catalog = Arc::new(MockCatalog {
            stars: Some(vec![extra]),
        });
        let chart = BuildSkyChartUseCase::new()
            .with_catalog(catalog)
            .execute(input())
            .await;
        assert!(chart.find("Mizar").is_some());
    }

    #[tokio::test]
    async fn test_catalog_failure_keeps_builtin_chart() {
        let catalog = Arc::new(MockCatalog { stars: None });
        let with_failure = BuildSkyChartUseCase::new()
            .with_catalog(catalog)
            .execute(input())
            .await;
        let builtin = BuildSkyChartUseCase::new().execute(input()).await;
        assert_eq!(with_failure.objects.len(), builtin.objects.len());
    }

    #[tokio::test]
    async fn test_radius_and_constellation_toggle() {
        let chart = BuildSkyChartUseCase::new()
            .execute(input().with_radius(10.0).without_constellations())
            .await;
        assert!(chart.lines.is_empty());
        for object in &chart.objects {
            assert!((object.position.distance_from_origin() - 10.0).abs() < 1e-9);
        }
    }
}
