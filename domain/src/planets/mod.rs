//! Planet catalogs
//!
//! - [`solar_system`] - the eight planets of the Solar System
//! - [`exoplanets`] - potentially habitable exoplanets and their gallery layout

pub mod exoplanets;
pub mod solar_system;
