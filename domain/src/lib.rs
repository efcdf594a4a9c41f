//! Domain layer for cosmos-explorer
//!
//! This crate contains the core types and algorithms. It has no dependencies
//! on infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Sky
//!
//! Catalog objects are located by equatorial coordinates (right ascension and
//! declination) and placed on a celestial sphere around an observer at the
//! origin by [`sky::projection::project`].
//!
//! ## Quiz
//!
//! A quiz draws a weighted-random mix of easy, medium and hard questions from
//! a pool ([`quiz::sampler::select_questions`]) and plays them through a
//! [`QuizSession`].

pub mod config;
pub mod core;
pub mod news;
pub mod planets;
pub mod quiz;
pub mod sky;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use news::{NewsArticle, NewsFeed};
pub use planets::{
    exoplanets::{HabitablePlanet, gallery_layout, habitable_exoplanets},
    solar_system::{SolarPlanet, solar_system},
};
pub use quiz::{
    bank::builtin_questions,
    high_score::{HighScore, HighScoreBoard, MAX_HIGH_SCORES},
    question::{Category, Difficulty, QuizQuestion, calculate_score},
    sampler::{DifficultyWeights, select_questions, select_questions_default},
    session::{
        AnswerOutcome, AnswerRecord, DEFAULT_QUESTION_TIME_LIMIT, QuizSession, QuizSummary,
    },
};
pub use sky::{
    catalog::{
        CatalogStar, ConstellationFigure, PlanetSighting, constellation_figures, find_by_name,
        major_stars, marker_size, planet_positions,
    },
    chart::{SkyChart, SkyLine, SkyObject, SkyObjectKind},
    projection::{CartesianPosition, CelestialCoordinate, DEFAULT_SKY_RADIUS, project},
    sexagesimal::{parse_declination, parse_right_ascension},
    spectral::spectral_class_color,
};
