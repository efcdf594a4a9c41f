//! Console output formatter

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use cosmos_application::QuestionOrigin;
use cosmos_domain::util::ellipsize;
use cosmos_domain::{
    CartesianPosition, HabitablePlanet, HighScoreBoard, NewsFeed, QuizQuestion, QuizSummary,
    SkyChart, SkyObject, SkyObjectKind, SolarPlanet,
};

const NAME_WIDTH: usize = 18;
const SUMMARY_WIDTH: usize = 160;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn position(p: &CartesianPosition) -> String {
        format!("({:>8.1}, {:>8.1}, {:>8.1})", p.x, p.y, p.z)
    }

    fn kind_label(kind: SkyObjectKind) -> &'static str {
        match kind {
            SkyObjectKind::Star => "star",
            SkyObjectKind::Planet => "planet",
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_sky(&self, chart: &SkyChart) -> String {
        let mut output = Self::header("Night Sky");

        output.push_str(&Self::section_header(&format!(
            "Objects ({}, sphere radius {})",
            chart.objects.len(),
            chart.radius
        )));
        output.push_str(&format!(
            "{:<width$} {:<7} {:>6} {:>5}  {:<30} {}\n",
            "Name",
            "Kind",
            "Mag",
            "Size",
            "Position (x, y, z)",
            "Color",
            width = NAME_WIDTH
        ));
        for object in &chart.objects {
            let name = ellipsize(&object.name, NAME_WIDTH);
            let name = match object.kind {
                SkyObjectKind::Star => format!("{:<width$}", name, width = NAME_WIDTH).yellow(),
                SkyObjectKind::Planet => format!("{:<width$}", name, width = NAME_WIDTH).green(),
            };
            output.push_str(&format!(
                "{} {:<7} {:>6.2} {:>5.2}  {:<30} {}\n",
                name,
                Self::kind_label(object.kind),
                object.magnitude,
                object.marker_size,
                Self::position(&object.position),
                object.color.dimmed()
            ));
        }

        if !chart.lines.is_empty() {
            output.push_str(&Self::section_header("Constellations"));
            let mut names: Vec<&str> = chart.lines.iter().map(|l| l.constellation.as_str()).collect();
            names.dedup();
            for name in names {
                let segments = chart
                    .lines
                    .iter()
                    .filter(|l| l.constellation == name)
                    .count();
                output.push_str(&format!("  * {} ({} segments)\n", name, segments));
            }
        }

        output
    }

    fn format_sky_object(&self, object: &SkyObject) -> String {
        format!(
            "{} {}\n  {}\n  Position: {}\n  Marker size: {:.2}  Color: {}\n",
            object.name.bold(),
            format!("[{}]", Self::kind_label(object.kind)).dimmed(),
            object.description,
            Self::position(&object.position),
            object.marker_size,
            object.color
        )
    }

    fn format_news(&self, feed: &NewsFeed) -> String {
        let mut output = Self::header("Space News");
        if feed.degraded {
            output.push_str(&format!(
                "{}\n",
                "News feed unavailable, showing saved content.".yellow()
            ));
        }

        for article in &feed.articles {
            output.push_str(&format!(
                "\n{}\n{} | {}\n",
                article.title.bold(),
                article.news_site.cyan(),
                article.published_label().dimmed()
            ));
            if !article.summary.is_empty() {
                output.push_str(&Self::indent(&ellipsize(&article.summary, SUMMARY_WIDTH), "  "));
                output.push('\n');
            }
            output.push_str(&format!("  {}\n", article.url.underline()));
        }

        output
    }

    fn format_solar_system(&self, planets: &[SolarPlanet]) -> String {
        let mut output = Self::header("Solar System");
        for planet in planets {
            output.push_str(&format!(
                "\n{} {}\n",
                planet.name.bold(),
                format!("(orbit {} units)", planet.distance).dimmed()
            ));
            output.push_str(&Self::indent(planet.description, "  "));
            output.push('\n');
            output.push_str(&format!(
                "  Temperature: {}\n  Atmosphere: {}\n  Moons: {}  Day: {}  Year: {}\n",
                planet.temperature,
                planet.atmosphere,
                planet.moons,
                planet.day_length,
                planet.year_length
            ));
        }
        output
    }

    fn format_exoplanets(
        &self,
        planets: &[HabitablePlanet],
        layout: &[CartesianPosition],
    ) -> String {
        let mut output = Self::header("Potentially Habitable Worlds");
        for (planet, position) in planets.iter().zip(layout) {
            let water = if planet.water {
                "liquid water likely".blue()
            } else {
                "no liquid water".dimmed()
            };
            output.push_str(&format!(
                "\n{} {}\n",
                planet.name.bold(),
                Self::position(position).dimmed()
            ));
            output.push_str(&Self::indent(planet.description, "  "));
            output.push('\n');
            output.push_str(&format!(
                "  Temperature: {}\n  Atmosphere: {}\n  Water: {}\n",
                planet.temperature, planet.atmosphere, water
            ));
        }
        output
    }

    fn format_scores(&self, board: &HighScoreBoard) -> String {
        let mut output = Self::header("High Scores");
        if board.is_empty() {
            output.push_str("No high scores yet. Play a quiz to set one!\n");
            return output;
        }

        for (rank, entry) in board.entries().iter().enumerate() {
            let difficulty = entry
                .difficulty
                .map(|d| format!(" [{}]", d))
                .unwrap_or_default();
            output.push_str(&format!(
                "{:>3}. {:<20} {:>4}{}  {}\n",
                rank + 1,
                ellipsize(&entry.player_name, 20),
                entry.score,
                difficulty,
                entry.date.format("%Y-%m-%d").to_string().dimmed()
            ));
        }
        output
    }

    fn format_questions(&self, questions: &[QuizQuestion], origin: &QuestionOrigin) -> String {
        let mut output = Self::header("Quiz Questions");
        let source = match origin {
            QuestionOrigin::Remote { source } => format!("Source: {}", source),
            QuestionOrigin::Fallback { reason } => format!("Source: built-in bank ({})", reason),
        };
        output.push_str(&format!("{}\n", source.dimmed()));

        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!(
                "\n{}. {} {}\n",
                i + 1,
                question.question.bold(),
                format!("[{}]", question.difficulty).dimmed()
            ));
            for (n, option) in question.options.iter().enumerate() {
                let line = format!("   {}) {}", n + 1, option);
                if question.is_correct(option) {
                    output.push_str(&format!("{}\n", line.green()));
                } else {
                    output.push_str(&format!("{}\n", line));
                }
            }
        }
        output
    }

    fn format_quiz_summary(&self, summary: &QuizSummary, rank: Option<usize>) -> String {
        let mut output = Self::section_header("Quiz Complete");
        output.push_str(&format!(
            "You scored {} out of {} ({:.0}%)\n",
            summary.correct_count.to_string().bold(),
            summary.total_questions,
            summary.percentage()
        ));
        output.push_str(&format!(
            "Points: {} / {}\n",
            summary.points, summary.max_points
        ));
        if summary.timed_out > 0 {
            output.push_str(&format!("Timed out: {}\n", summary.timed_out));
        }
        if let Some(rank) = rank {
            output.push_str(&format!(
                "{}\n",
                format!("New high score! Rank #{}", rank).green().bold()
            ));
        }
        output
    }
}
