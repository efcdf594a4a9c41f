//! Night-sky chart assembly
//!
//! Turns catalog entries into positioned, sized and coloured objects ready to
//! hand to a renderer or print as a table.

use super::catalog::{CatalogStar, ConstellationFigure, PlanetSighting, marker_size};
use super::projection::CartesianPosition;
use serde::Serialize;

/// Colour used for planets on the chart
pub const PLANET_COLOR: &str = "#64ffda";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyObjectKind {
    Star,
    Planet,
}

/// A projected object on the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyObject {
    pub name: String,
    pub kind: SkyObjectKind,
    pub position: CartesianPosition,
    pub magnitude: f64,
    pub marker_size: f64,
    pub color: String,
    pub description: String,
}

/// A projected constellation segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyLine {
    pub constellation: String,
    pub start: CartesianPosition,
    pub end: CartesianPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyChart {
    pub radius: f64,
    pub objects: Vec<SkyObject>,
    pub lines: Vec<SkyLine>,
}

impl SkyChart {
    /// Project everything onto a sphere of `radius`.
    ///
    /// Stars whose name already appears (case-insensitively) are skipped, so
    /// catalog stars layered over the built-in ones do not double up. Objects
    /// are ordered brightest first.
    pub fn assemble(
        radius: f64,
        stars: &[CatalogStar],
        planets: &[PlanetSighting],
        figures: &[ConstellationFigure],
    ) -> Self {
        let mut objects: Vec<SkyObject> = Vec::with_capacity(stars.len() + planets.len());

        for star in stars {
            if objects.iter().any(|o| o.name.eq_ignore_ascii_case(&star.name)) {
                continue;
            }
            objects.push(SkyObject {
                name: star.name.clone(),
                kind: SkyObjectKind::Star,
                position: star.coordinate.project(radius),
                magnitude: star.magnitude,
                marker_size: marker_size(star.magnitude),
                color: star.color().to_string(),
                description: star.description(),
            });
        }

        for planet in planets {
            objects.push(SkyObject {
                name: planet.name.clone(),
                kind: SkyObjectKind::Planet,
                position: planet.coordinate.project(radius),
                magnitude: planet.magnitude,
                marker_size: marker_size(planet.magnitude),
                color: PLANET_COLOR.to_string(),
                description: format!(
                    "Magnitude: {}, Diameter: {} km",
                    planet.magnitude, planet.diameter_km
                ),
            });
        }

        objects.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));

        let lines = figures
            .iter()
            .flat_map(|figure| {
                figure.segments.iter().map(|(start, end)| SkyLine {
                    constellation: figure.name.clone(),
                    start: start.project(radius),
                    end: end.project(radius),
                })
            })
            .collect();

        Self {
            radius,
            objects,
            lines,
        }
    }

    pub fn find(&self, name: &str) -> Option<&SkyObject> {
        let needle = name.trim();
        self.objects.iter().find(|o| o.name.eq_ignore_ascii_case(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky::catalog::{constellation_figures, major_stars, planet_positions};
    use crate::sky::projection::{CelestialCoordinate, DEFAULT_SKY_RADIUS};
    use chrono::Utc;

    fn chart() -> SkyChart {
        SkyChart::assemble(
            DEFAULT_SKY_RADIUS,
            &major_stars(),
            &planet_positions(Utc::now()),
            &constellation_figures(),
        )
    }

    #[test]
    fn test_all_objects_lie_on_sphere() {
        let chart = chart();
        for object in &chart.objects {
            let d = object.position.distance_from_origin();
            assert!((d - DEFAULT_SKY_RADIUS).abs() < 1e-6, "{} at {}", object.name, d);
        }
        for line in &chart.lines {
            assert!((line.start.distance_from_origin() - DEFAULT_SKY_RADIUS).abs() < 1e-6);
        }
    }

    #[test]
    fn test_brightest_first() {
        let chart = chart();
        assert_eq!(chart.objects[0].name, "Jupiter");
        assert_eq!(chart.objects[1].name, "Sirius");
        assert!(
            chart
                .objects
                .windows(2)
                .all(|w| w[0].magnitude <= w[1].magnitude)
        );
    }

    #[test]
    fn test_duplicate_star_names_skipped() {
        let mut stars = major_stars();
        stars.push(CatalogStar::new(
            "VEGA",
            CelestialCoordinate::new(1.0, 1.0),
            9.0,
            "Lyra",
        ));
        let chart = SkyChart::assemble(10.0, &stars, &[], &[]);
        assert_eq!(chart.objects.len(), major_stars().len());
    }

    #[test]
    fn test_find_and_kinds() {
        let chart = chart();
        assert_eq!(chart.find("mars").unwrap().kind, SkyObjectKind::Planet);
        assert_eq!(chart.find("Deneb").unwrap().kind, SkyObjectKind::Star);
        assert!(chart.find("Nibiru").is_none());
    }

    #[test]
    fn test_lines_follow_figures() {
        let chart = chart();
        let expected: usize = constellation_figures().iter().map(|f| f.segments.len()).sum();
        assert_eq!(chart.lines.len(), expected);
    }
}
