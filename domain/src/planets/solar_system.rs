//! Solar System planet table

use serde::Serialize;

/// A planet of the Solar System as shown in the orrery
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPlanet {
    pub name: &'static str,
    /// Display radius in scene units
    pub radius: f64,
    /// Orbit radius in scene units
    pub distance: f64,
    pub color: &'static str,
    pub description: &'static str,
    pub temperature: &'static str,
    pub atmosphere: &'static str,
    pub moons: u32,
    pub day_length: &'static str,
    pub year_length: &'static str,
}

pub fn solar_system() -> Vec<SolarPlanet> {
    vec![
        SolarPlanet {
            name: "Mercury",
            radius: 3.8,
            distance: 40.0,
            color: "#A0522D",
            description: "The smallest and innermost planet, Mercury is a rocky world with extreme temperatures and a heavily cratered surface.",
            temperature: "Range: -180°C to 430°C",
            atmosphere: "Very thin, almost none",
            moons: 0,
            day_length: "176 Earth days",
            year_length: "88 Earth days",
        },
        SolarPlanet {
            name: "Venus",
            radius: 9.5,
            distance: 72.0,
            color: "#DEB887",
            description: "Often called Earth's sister planet, Venus has a thick toxic atmosphere and is the hottest planet in our solar system.",
            temperature: "Average: 462°C",
            atmosphere: "Very dense, mostly CO2",
            moons: 0,
            day_length: "243 Earth days",
            year_length: "225 Earth days",
        },
        SolarPlanet {
            name: "Earth",
            radius: 10.0,
            distance: 100.0,
            color: "#4B9CD3",
            description: "Our home planet, Earth is the only known world to support life, with liquid water oceans and a protective atmosphere.",
            temperature: "Average: 15°C",
            atmosphere: "Nitrogen, Oxygen rich",
            moons: 1,
            day_length: "24 hours",
            year_length: "365.25 days",
        },
        SolarPlanet {
            name: "Mars",
            radius: 5.3,
            distance: 152.0,
            color: "#CD5C5C",
            description: "The Red Planet features vast deserts, polar ice caps, and the solar system's largest volcano.",
            temperature: "Average: -63°C",
            atmosphere: "Thin, mostly CO2",
            moons: 2,
            day_length: "24.6 hours",
            year_length: "687 Earth days",
        },
        SolarPlanet {
            name: "Jupiter",
            radius: 112.0,
            distance: 520.0,
            color: "#DEB887",
            description: "The largest planet, Jupiter is a gas giant with a Great Red Spot and dozens of moons.",
            temperature: "Average: -110°C",
            atmosphere: "Thick, Hydrogen and Helium",
            moons: 79,
            day_length: "10 hours",
            year_length: "11.9 Earth years",
        },
        SolarPlanet {
            name: "Saturn",
            radius: 95.0,
            distance: 958.0,
            color: "#F0E68C",
            description: "Famous for its spectacular ring system, Saturn is a gas giant with a unique appearance.",
            temperature: "Average: -140°C",
            atmosphere: "Mostly Hydrogen and Helium",
            moons: 82,
            day_length: "10.7 hours",
            year_length: "29.5 Earth years",
        },
        SolarPlanet {
            name: "Uranus",
            radius: 40.0,
            distance: 1900.0,
            color: "#73C2FB",
            description: "A unique ice giant that rotates on its side, Uranus has a tilted magnetic field and faint ring system.",
            temperature: "Average: -195°C",
            atmosphere: "Hydrogen, Helium, Methane",
            moons: 27,
            day_length: "17.2 hours",
            year_length: "84 Earth years",
        },
        SolarPlanet {
            name: "Neptune",
            radius: 38.0,
            distance: 2800.0,
            color: "#4169E1",
            description: "The windiest planet, Neptune is a distant ice giant with a dynamic atmosphere and a collection of moons.",
            temperature: "Average: -200°C",
            atmosphere: "Hydrogen, Helium, Methane",
            moons: 14,
            day_length: "16.1 hours",
            year_length: "165 Earth years",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planets_ordered_by_distance() {
        let planets = solar_system();
        assert_eq!(planets.len(), 8);
        assert!(planets.windows(2).all(|w| w[0].distance < w[1].distance));
    }

    #[test]
    fn test_earth_has_one_moon() {
        let earth = solar_system().into_iter().find(|p| p.name == "Earth").unwrap();
        assert_eq!(earth.moons, 1);
    }
}
