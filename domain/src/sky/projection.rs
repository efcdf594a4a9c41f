//! Celestial coordinate projection
//!
//! Maps the equatorial coordinate system onto a right-handed scene space with
//! the observer at the origin:
//!
//! - **+Y**: north celestial pole (Dec = +90°)
//! - **+X**: RA = 0°, Dec = 0°
//! - **+Z**: RA = 90°, Dec = 0°

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Radius of the celestial sphere in scene units
pub const DEFAULT_SKY_RADIUS: f64 = 1000.0;

/// A position on the sky in degrees (Value Object)
///
/// Right ascension is conventionally in `[0, 360)` and declination in
/// `[-90, 90]`. Neither range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialCoordinate {
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
}

impl CelestialCoordinate {
    pub const fn new(right_ascension_deg: f64, declination_deg: f64) -> Self {
        Self {
            right_ascension_deg,
            declination_deg,
        }
    }

    /// Project onto a sphere of the given radius
    pub fn project(&self, radius: f64) -> CartesianPosition {
        project(self.right_ascension_deg, self.declination_deg, radius)
    }

    /// Project onto the default celestial sphere
    pub fn project_default(&self) -> CartesianPosition {
        self.project(DEFAULT_SKY_RADIUS)
    }
}

/// A point in scene space (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &CartesianPosition) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Convert right ascension / declination (degrees) into a scene position on
/// a sphere of `radius`.
pub fn project(right_ascension_deg: f64, declination_deg: f64, radius: f64) -> CartesianPosition {
    let phi = (90.0 - declination_deg) * (PI / 180.0);
    let theta = right_ascension_deg * (PI / 180.0);

    CartesianPosition {
        x: radius * phi.sin() * theta.cos(),
        y: radius * phi.cos(),
        z: radius * phi.sin() * theta.sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: CartesianPosition, expected: (f64, f64, f64), radius: f64) {
        let tol = EPS * radius.abs().max(1.0);
        assert!(
            (actual.x - expected.0).abs() < tol
                && (actual.y - expected.1).abs() < tol
                && (actual.z - expected.2).abs() < tol,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_north_pole_maps_to_positive_y() {
        for r in [1.0, 250.0, DEFAULT_SKY_RADIUS] {
            assert_close(project(0.0, 90.0, r), (0.0, r, 0.0), r);
        }
    }

    #[test]
    fn test_south_pole_maps_to_negative_y() {
        for r in [1.0, DEFAULT_SKY_RADIUS] {
            assert_close(project(0.0, -90.0, r), (0.0, -r, 0.0), r);
        }
    }

    #[test]
    fn test_equator_axes() {
        let r = DEFAULT_SKY_RADIUS;
        assert_close(project(0.0, 0.0, r), (r, 0.0, 0.0), r);
        assert_close(project(90.0, 0.0, r), (0.0, 0.0, r), r);
        assert_close(project(180.0, 0.0, r), (-r, 0.0, 0.0), r);
    }

    #[test]
    fn test_distance_equals_radius() {
        let r = 1000.0;
        let mut ra = 0.0;
        while ra < 360.0 {
            let mut dec = -90.0;
            while dec <= 90.0 {
                let p = project(ra, dec, r);
                let rel = (p.distance_from_origin() - r).abs() / r;
                assert!(rel < EPS, "ra={} dec={} rel={}", ra, dec, rel);
                dec += 7.5;
            }
            ra += 13.0;
        }
    }

    #[test]
    fn test_project_is_deterministic() {
        let a = project(279.23, 38.78, 1000.0);
        let b = project(279.23, 38.78, 1000.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_coordinate_project_default_uses_sky_radius() {
        let vega = CelestialCoordinate::new(279.23, 38.78);
        assert_eq!(vega.project_default(), project(279.23, 38.78, DEFAULT_SKY_RADIUS));
    }

    #[test]
    fn test_distance_to() {
        let a = CartesianPosition::new(0.0, 0.0, 0.0);
        let b = CartesianPosition::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < EPS);
    }
}
