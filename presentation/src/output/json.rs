//! JSON output

use crate::output::formatter::OutputFormatter;
use cosmos_application::QuestionOrigin;
use cosmos_domain::{
    CartesianPosition, HabitablePlanet, HighScoreBoard, NewsFeed, QuizQuestion, QuizSummary,
    SkyChart, SkyObject, SolarPlanet,
};
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    /// Serialization failures are reported as an `{"error": ...}` document
    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("failed to serialize output: {}", e) })
                .to_string()
        })
    }
}

#[derive(Serialize)]
struct PositionedExoplanet<'a> {
    #[serde(flatten)]
    planet: &'a HabitablePlanet,
    position: &'a CartesianPosition,
}

#[derive(Serialize)]
struct QuestionListing<'a> {
    #[serde(flatten)]
    origin: &'a QuestionOrigin,
    questions: &'a [QuizQuestion],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedSummary<'a> {
    #[serde(flatten)]
    summary: &'a QuizSummary,
    percentage: f64,
    rank: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format_sky(&self, chart: &SkyChart) -> String {
        Self::to_json(chart)
    }

    fn format_sky_object(&self, object: &SkyObject) -> String {
        Self::to_json(object)
    }

    fn format_news(&self, feed: &NewsFeed) -> String {
        Self::to_json(feed)
    }

    fn format_solar_system(&self, planets: &[SolarPlanet]) -> String {
        Self::to_json(planets)
    }

    fn format_exoplanets(
        &self,
        planets: &[HabitablePlanet],
        layout: &[CartesianPosition],
    ) -> String {
        let positioned: Vec<_> = planets
            .iter()
            .zip(layout)
            .map(|(planet, position)| PositionedExoplanet { planet, position })
            .collect();
        Self::to_json(&positioned)
    }

    fn format_scores(&self, board: &HighScoreBoard) -> String {
        Self::to_json(board)
    }

    fn format_questions(&self, questions: &[QuizQuestion], origin: &QuestionOrigin) -> String {
        Self::to_json(&QuestionListing { origin, questions })
    }

    fn format_quiz_summary(&self, summary: &QuizSummary, rank: Option<usize>) -> String {
        Self::to_json(&RankedSummary {
            summary,
            percentage: summary.percentage(),
            rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_domain::{gallery_layout, habitable_exoplanets};

    #[test]
    fn test_exoplanets_include_position() {
        let planets = habitable_exoplanets();
        let layout = gallery_layout(&planets);
        let json = JsonFormatter.format_exoplanets(&planets, &layout);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Kepler-442b");
        assert!(value[0]["position"]["x"].is_number());
        assert_eq!(value.as_array().unwrap().len(), planets.len());
    }

    #[test]
    fn test_question_listing_carries_origin() {
        let origin = QuestionOrigin::Fallback {
            reason: "offline mode".to_string(),
        };
        let json = JsonFormatter.format_questions(&[], &origin);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["origin"], "fallback");
        assert_eq!(value["reason"], "offline mode");
        assert!(value["questions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_summary_has_rank_and_percentage() {
        let summary = QuizSummary {
            total_questions: 4,
            correct_count: 3,
            timed_out: 1,
            points: 6,
            max_points: 8,
        };
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_quiz_summary(&summary, Some(2))).unwrap();
        assert_eq!(value["correctCount"], 3);
        assert_eq!(value["totalQuestions"], 4);
        assert!(value.get("total_questions").is_none());
        assert_eq!(value["percentage"], 75.0);
        assert_eq!(value["rank"], 2);
    }

    #[test]
    fn test_serialization_failure_is_reported() {
        use std::collections::HashMap;

        // Non-string map keys cannot become JSON object keys
        let unserializable: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter::to_json(&unserializable)).unwrap();
        assert!(
            value["error"]
                .as_str()
                .unwrap()
                .starts_with("failed to serialize output")
        );
    }
}
