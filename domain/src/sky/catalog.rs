//! Built-in sky catalog
//!
//! Static tables of bright stars, constellation figures and planet sightings
//! used by the night-sky chart. Remote catalog stars share the same
//! [`CatalogStar`] shape.

use super::projection::CelestialCoordinate;
use super::spectral::spectral_class_color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A star with a known sky position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStar {
    pub name: String,
    pub coordinate: CelestialCoordinate,
    /// Apparent visual magnitude (lower is brighter)
    pub magnitude: f64,
    pub constellation: String,
    pub spectral_class: Option<String>,
}

impl CatalogStar {
    pub fn new(
        name: impl Into<String>,
        coordinate: CelestialCoordinate,
        magnitude: f64,
        constellation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinate,
            magnitude,
            constellation: constellation.into(),
            spectral_class: None,
        }
    }

    pub fn with_spectral_class(mut self, class: impl Into<String>) -> Self {
        self.spectral_class = Some(class.into());
        self
    }

    /// Display colour derived from the spectral class
    pub fn color(&self) -> &'static str {
        spectral_class_color(self.spectral_class.as_deref())
    }

    /// One-line description shown when the star is selected
    pub fn description(&self) -> String {
        let constellation = if self.constellation.is_empty() {
            "Unknown"
        } else {
            &self.constellation
        };
        format!(
            "Magnitude: {}, Constellation: {}",
            self.magnitude, constellation
        )
    }
}

/// A stick figure drawn between pairs of sky positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationFigure {
    pub name: String,
    pub segments: Vec<(CelestialCoordinate, CelestialCoordinate)>,
}

impl ConstellationFigure {
    fn from_path(name: &str, path: &[(f64, f64)]) -> Self {
        let segments = path
            .windows(2)
            .map(|pair| {
                (
                    CelestialCoordinate::new(pair[0].0, pair[0].1),
                    CelestialCoordinate::new(pair[1].0, pair[1].1),
                )
            })
            .collect();
        Self {
            name: name.to_string(),
            segments,
        }
    }
}

/// A planet as seen from Earth at some date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSighting {
    pub name: String,
    pub coordinate: CelestialCoordinate,
    pub magnitude: f64,
    pub diameter_km: f64,
}

/// Marker size for an object of the given apparent magnitude.
///
/// Brighter objects (lower magnitude) get larger markers, never below 0.5.
pub fn marker_size(magnitude: f64) -> f64 {
    ((6.0 - magnitude) / 2.0).max(0.5)
}

/// Bright, well-known stars
pub fn major_stars() -> Vec<CatalogStar> {
    const STARS: &[(&str, f64, f64, f64, &str, &str)] = &[
        ("Polaris", 37.95, 89.26, 1.97, "Ursa Minor", "F7Ib"),
        ("Vega", 279.23, 38.78, 0.03, "Lyra", "A0V"),
        ("Sirius", 101.28, -16.71, -1.46, "Canis Major", "A1V"),
        ("Canopus", 95.99, -52.70, -0.74, "Carina", "A9II"),
        ("Arcturus", 213.92, 19.18, -0.05, "Boötes", "K1.5III"),
        ("Capella", 79.17, 46.00, 0.08, "Auriga", "G3III"),
        ("Rigel", 78.63, -8.20, 0.13, "Orion", "B8Ia"),
        ("Betelgeuse", 88.79, 7.41, 0.50, "Orion", "M1Ia"),
        ("Altair", 297.70, 8.87, 0.76, "Aquila", "A7V"),
        ("Aldebaran", 68.98, 16.51, 0.85, "Taurus", "K5III"),
        ("Antares", 247.35, -26.43, 0.96, "Scorpius", "M1.5Iab"),
        ("Deneb", 310.36, 45.28, 1.25, "Cygnus", "A2Ia"),
    ];

    STARS
        .iter()
        .map(|&(name, ra, dec, mag, constellation, class)| {
            CatalogStar::new(name, CelestialCoordinate::new(ra, dec), mag, constellation)
                .with_spectral_class(class)
        })
        .collect()
}

/// Stick figures for a few recognisable constellations
pub fn constellation_figures() -> Vec<ConstellationFigure> {
    vec![
        ConstellationFigure::from_path(
            "Ursa Major",
            &[
                (165.93, 61.75),
                (165.46, 56.38),
                (178.46, 53.69),
                (183.86, 57.03),
                (193.51, 55.96),
                (200.98, 54.93),
                (206.89, 49.31),
            ],
        ),
        ConstellationFigure::from_path(
            "Orion",
            &[
                (88.79, 7.41),
                (85.19, -1.94),
                (84.05, -1.20),
                (83.00, -0.30),
                (81.28, 6.35),
                (88.79, 7.41),
            ],
        ),
        ConstellationFigure::from_path(
            "Cassiopeia",
            &[
                (2.29, 59.15),
                (10.13, 56.54),
                (14.18, 60.72),
                (21.45, 60.24),
                (28.60, 63.67),
            ],
        ),
    ]
}

/// Planet positions for a date.
///
/// TODO: derive positions from orbital elements; this returns fixed sightings
/// regardless of `date`.
pub fn planet_positions(date: DateTime<Utc>) -> Vec<PlanetSighting> {
    let _ = date;
    vec![
        PlanetSighting {
            name: "Mars".to_string(),
            coordinate: CelestialCoordinate::new(120.0, 15.0),
            magnitude: 1.5,
            diameter_km: 6779.0,
        },
        PlanetSighting {
            name: "Jupiter".to_string(),
            coordinate: CelestialCoordinate::new(150.0, -5.0),
            magnitude: -2.2,
            diameter_km: 139_820.0,
        },
    ]
}

/// Case-insensitive lookup by star name
pub fn find_by_name<'a>(stars: &'a [CatalogStar], name: &str) -> Option<&'a CatalogStar> {
    let needle = name.trim();
    stars.iter().find(|s| s.name.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_size() {
        assert_eq!(marker_size(0.0), 3.0);
        assert!((marker_size(-1.46) - 3.73).abs() < 1e-12);
        assert_eq!(marker_size(5.5), 0.5);
        assert_eq!(marker_size(12.0), 0.5);
    }

    #[test]
    fn test_major_stars_include_polaris_near_pole() {
        let stars = major_stars();
        let polaris = find_by_name(&stars, "polaris").unwrap();
        assert!(polaris.coordinate.declination_deg > 89.0);
        assert_eq!(polaris.color(), "#f8f7ff");
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let stars = major_stars();
        assert!(find_by_name(&stars, "  SIRIUS ").is_some());
        assert!(find_by_name(&stars, "Vulcan").is_none());
    }

    #[test]
    fn test_constellation_segments_connect_path() {
        let figures = constellation_figures();
        let big_dipper = figures.iter().find(|f| f.name == "Ursa Major").unwrap();
        assert_eq!(big_dipper.segments.len(), 6);
        for pair in big_dipper.segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_planet_positions_placeholder() {
        let planets = planet_positions(Utc::now());
        let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mars", "Jupiter"]);
    }

    #[test]
    fn test_description_defaults_constellation() {
        let star = CatalogStar::new("X", CelestialCoordinate::new(0.0, 0.0), 4.2, "");
        assert_eq!(star.description(), "Magnitude: 4.2, Constellation: Unknown");
    }
}
