//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use cosmos_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for cosmos-explorer
#[derive(Parser, Debug)]
#[command(name = "cosmos-explorer")]
#[command(author, version, about = "Explore the night sky, the planets and a space quiz")]
#[command(long_about = r#"
Cosmos Explorer charts the night sky, lists the planets, reads the latest
spaceflight news and runs a timed space quiz.

Configuration files are loaded from (in priority order):
1. COSMOS_* environment variables   e.g. COSMOS_QUIZ__QUESTION_COUNT=5
2. --config <path>                  Explicit config file
3. ./cosmos.toml                    Project-level config
4. ~/.config/cosmos-explorer/config.toml   Global config

Example:
  cosmos-explorer quiz
  cosmos-explorer quiz --questions 5 --offline
  cosmos-explorer sky --find sirius
  cosmos-explorer news --output json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play the timed space quiz
    Quiz(QuizArgs),
    /// Chart the stars, planets and constellations
    Sky(SkyArgs),
    /// Show the latest spaceflight news
    News(NewsArgs),
    /// List the solar system planets and habitable exoplanets
    Planets(PlanetsArgs),
    /// Show the high-score board
    Scores,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct QuizArgs {
    /// Number of questions
    #[arg(short = 'n', long, value_name = "N")]
    pub questions: Option<usize>,

    /// Seconds allowed per question
    #[arg(short, long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// Use the built-in question bank only
    #[arg(long)]
    pub offline: bool,

    /// Print the questions instead of playing (answers included)
    #[arg(long)]
    pub list: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SkyArgs {
    /// Show a single object by name (case-insensitive)
    #[arg(short, long, value_name = "NAME")]
    pub find: Option<String>,

    /// Sphere radius for projected positions
    #[arg(long, value_name = "UNITS")]
    pub radius: Option<f64>,

    /// Omit constellation lines
    #[arg(long)]
    pub no_constellations: bool,

    /// Skip the remote star catalog
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct NewsArgs {
    /// Number of articles
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct PlanetsArgs {
    /// Show the habitable exoplanet gallery instead of the solar system
    #[arg(long)]
    pub habitable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quiz_with_global_flags() {
        let cli = Cli::parse_from(["cosmos-explorer", "quiz", "-n", "5", "--offline", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::Quiz(QuizArgs {
                questions: Some(5),
                offline: true,
                ..Default::default()
            }))
        );
    }

    #[test]
    fn test_parse_sky_find_json() {
        let cli = Cli::parse_from(["cosmos-explorer", "sky", "--find", "Vega", "-o", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Sky(args)) => assert_eq!(args.find.as_deref(), Some("Vega")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["cosmos-explorer", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
