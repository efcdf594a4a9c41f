//! Output formatter trait

use cosmos_application::QuestionOrigin;
use cosmos_domain::{
    CartesianPosition, HabitablePlanet, HighScoreBoard, NewsFeed, QuizQuestion, QuizSummary,
    SkyChart, SkyObject, SolarPlanet,
};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Projected sky objects, brightest first
    fn format_sky(&self, chart: &SkyChart) -> String;

    /// A single sky object looked up by name
    fn format_sky_object(&self, object: &SkyObject) -> String;

    fn format_news(&self, feed: &NewsFeed) -> String;

    fn format_solar_system(&self, planets: &[SolarPlanet]) -> String;

    /// Exoplanets with their gallery positions (same order as `planets`)
    fn format_exoplanets(
        &self,
        planets: &[HabitablePlanet],
        layout: &[CartesianPosition],
    ) -> String;

    fn format_scores(&self, board: &HighScoreBoard) -> String;

    /// Question listing, answers included
    fn format_questions(&self, questions: &[QuizQuestion], origin: &QuestionOrigin) -> String;

    fn format_quiz_summary(&self, summary: &QuizSummary, rank: Option<usize>) -> String;
}
