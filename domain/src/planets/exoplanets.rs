//! Potentially habitable exoplanets

use crate::sky::projection::CartesianPosition;
use serde::Serialize;
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitablePlanet {
    pub name: &'static str,
    /// Display radius in scene units
    pub radius: f64,
    /// Distance from the gallery centre in scene units
    pub distance: f64,
    pub color: &'static str,
    pub description: &'static str,
    pub temperature: &'static str,
    pub atmosphere: &'static str,
    pub water: bool,
}

pub fn habitable_exoplanets() -> Vec<HabitablePlanet> {
    vec![
        HabitablePlanet {
            name: "Kepler-442b",
            radius: 8.0,
            distance: 50.0,
            color: "#4287f5",
            description: "A super-Earth with vast oceans and a thick atmosphere. Scientists believe it could harbor deep-sea life forms.",
            temperature: "Moderate (15°C)",
            atmosphere: "Dense, Earth-like composition",
            water: true,
        },
        HabitablePlanet {
            name: "Proxima Centauri b",
            radius: 6.0,
            distance: 85.0,
            color: "#e07a52",
            description: "The closest potentially habitable planet to Earth, with rocky terrain and possible liquid water under the surface.",
            temperature: "Cool (5°C)",
            atmosphere: "Thin, Mars-like",
            water: true,
        },
        HabitablePlanet {
            name: "TRAPPIST-1e",
            radius: 7.0,
            distance: 120.0,
            color: "#2e7d32",
            description: "Part of the TRAPPIST system, this planet has conditions remarkably similar to Earth, with potential for diverse ecosystems.",
            temperature: "Warm (20°C)",
            atmosphere: "Dense, rich in oxygen",
            water: true,
        },
        HabitablePlanet {
            name: "TOI-700 d",
            radius: 9.0,
            distance: 155.0,
            color: "#1a237e",
            description: "A water world with global oceans and floating continents. Could host unique aquatic life forms.",
            temperature: "Moderate (18°C)",
            atmosphere: "Humid, water-rich",
            water: true,
        },
        HabitablePlanet {
            name: "Teegarden's Star b",
            radius: 7.5,
            distance: 190.0,
            color: "#388e3c",
            description: "A lush world covered in vegetation, with conditions perfect for complex life forms.",
            temperature: "Warm (25°C)",
            atmosphere: "Rich in oxygen, similar to Earth's Carboniferous period",
            water: true,
        },
        HabitablePlanet {
            name: "K2-18b",
            radius: 10.0,
            distance: 225.0,
            color: "#0277bd",
            description: "A massive planet with floating islands above a global ocean, protected by a strong magnetic field.",
            temperature: "Moderate (12°C)",
            atmosphere: "Thick, protective layer",
            water: true,
        },
    ]
}

/// Spread planets evenly around a ring in the XZ plane, each at its own distance
pub fn gallery_layout(planets: &[HabitablePlanet]) -> Vec<CartesianPosition> {
    let step = 2.0 * PI / planets.len().max(1) as f64;
    planets
        .iter()
        .enumerate()
        .map(|(i, planet)| {
            let angle = i as f64 * step;
            CartesianPosition::new(angle.cos() * planet.distance, 0.0, angle.sin() * planet.distance)
        })
        .collect()
}
