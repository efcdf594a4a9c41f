//! Sky subdomain: placing catalog objects on the celestial sphere.
//!
//! - [`projection`] - equatorial (RA, Dec) to scene Cartesian coordinates
//! - [`catalog`] - bright stars, constellation figures and planet sightings
//! - [`chart`] - projected, sized and coloured chart objects
//! - [`sexagesimal`] - parsing `02h 31m 49s` / `+89° 15′ 50″` strings
//! - [`spectral`] - spectral class to display colour

pub mod catalog;
pub mod chart;
pub mod projection;
pub mod sexagesimal;
pub mod spectral;
