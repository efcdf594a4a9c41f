//! CLI entrypoint for Cosmos Explorer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use clap::Parser;
use cosmos_application::{
    BuildSkyChartInput, BuildSkyChartUseCase, FetchNewsUseCase, LoadProgressNotifier, QuizParams,
    RecordHighScoreUseCase, StartQuizUseCase,
};
use cosmos_domain::{HighScore, OutputFormat, gallery_layout, habitable_exoplanets, solar_system};
use cosmos_infrastructure::{
    ApiNinjasStarCatalog, ConfigIssue, ConfigLoader, FileConfig, HttpClient, JsonHighScoreStore,
    OpenTdbQuestionSource, Severity, SpaceflightNewsSource, build_client,
};
use cosmos_presentation::{
    Cli, Command, NewsArgs, OutputConfig, OutputFormatter, PlanetsArgs, QuizArgs, QuizRunner,
    SkyArgs, formatter_for, notifier_for,
};
use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Shared state for every subcommand
struct App {
    config: FileConfig,
    output: OutputConfig,
    formatter: Box<dyn OutputFormatter>,
    progress: Box<dyn LoadProgressNotifier>,
    client: HttpClient,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never interleave with quiz prompts or JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message()),
            Severity::Warning => warn!("{}", issue.message()),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration ({} error(s))", issues.len());
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let output = OutputConfig {
        format,
        color: config.output.color && !cli.no_color,
        show_progress: config.output.show_progress,
    }
    .for_format(format)
    .quiet(cli.quiet);
    output.apply_color();

    info!("Starting Cosmos Explorer");

    // === Dependency Injection ===
    let progress = notifier_for(output.progress_mode(std::io::stderr().is_terminal()));
    let client = build_client(config.sources.behavior().timeout)?;

    let app = App {
        formatter: formatter_for(output.format),
        config,
        output,
        progress,
        client,
    };

    match cli.command.unwrap_or(Command::Quiz(QuizArgs::default())) {
        Command::Quiz(args) => run_quiz(&app, args).await,
        Command::Sky(args) => run_sky(&app, args).await,
        Command::News(args) => run_news(&app, args).await,
        Command::Planets(args) => run_planets(&app, args),
        Command::Scores => run_scores(&app).await,
    }
}

fn high_score_store(config: &FileConfig) -> Result<JsonHighScoreStore> {
    match &config.storage.high_scores_path {
        Some(path) => Ok(JsonHighScoreStore::new(path)),
        None => Ok(JsonHighScoreStore::default_location()?),
    }
}

async fn run_quiz(app: &App, args: QuizArgs) -> Result<()> {
    let mut params: QuizParams = app.config.quiz.to_params();
    if let Some(count) = args.questions {
        params = params.with_question_count(count);
    }
    if let Some(seconds) = args.time_limit {
        params = params.with_time_limit(Duration::from_secs(seconds));
    }
    if params.question_count == 0 {
        bail!("--questions must be at least 1");
    }
    if params.time_limit.is_zero() {
        bail!("--time-limit must be at least 1 second");
    }

    let time_limit = params.time_limit;
    let use_case = if args.offline || app.config.quiz.offline {
        StartQuizUseCase::offline(params)
    } else {
        let source = OpenTdbQuestionSource::new(app.client.clone(), &app.config.sources.trivia_url);
        StartQuizUseCase::new(Arc::new(source), params).with_behavior(app.config.sources.behavior())
    };

    let prepared = use_case.execute_with_progress(app.progress.as_ref()).await;
    let mut session = prepared.session;
    if session.is_empty() {
        bail!("No quiz questions available");
    }

    if args.list {
        println!(
            "{}",
            app.formatter
                .format_questions(session.questions(), &prepared.origin)
        );
        return Ok(());
    }

    // Prompts go to stderr when stdout carries JSON
    let prompts: Box<dyn Write> = match app.output.format {
        OutputFormat::Text => Box::new(std::io::stdout()),
        OutputFormat::Json => Box::new(std::io::stderr()),
    };
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut runner = QuizRunner::new(stdin, prompts, time_limit);

    let summary = runner.run(&mut session).await?;

    let mut rank = None;
    if summary.points > 0 {
        let scores = RecordHighScoreUseCase::new(Arc::new(high_score_store(&app.config)?));
        match scores.qualifies(summary.points).await {
            Ok(true) => {
                let name = runner
                    .prompt("\nNew high score! Enter your name: ")
                    .await?
                    .unwrap_or_else(|| "Anonymous".to_string());
                let mut entry = HighScore::new(name, summary.points, Utc::now());
                if let Some(difficulty) = session.prevailing_difficulty() {
                    entry = entry.with_difficulty(difficulty);
                }
                let recorded = scores.execute(entry).await?;
                rank = recorded.rank;
            }
            Ok(false) => {}
            Err(e) => warn!("Could not read high scores: {}", e),
        }
    }

    println!("{}", app.formatter.format_quiz_summary(&summary, rank));
    Ok(())
}

async fn run_sky(app: &App, args: SkyArgs) -> Result<()> {
    let mut use_case = BuildSkyChartUseCase::new().with_behavior(app.config.sources.behavior());
    if !args.offline
        && let Some(key) = app.config.sources.stars_api_key()
    {
        let catalog =
            ApiNinjasStarCatalog::new(app.client.clone(), &app.config.sources.stars_url, key);
        use_case = use_case.with_catalog(Arc::new(catalog));
    }

    let mut input = BuildSkyChartInput::new(Utc::now());
    if let Some(radius) = args.radius {
        if !(radius.is_finite() && radius > 0.0) {
            bail!("--radius must be a positive number");
        }
        input = input.with_radius(radius);
    }
    if args.no_constellations {
        input = input.without_constellations();
    }

    let chart = use_case
        .execute_with_progress(input, app.progress.as_ref())
        .await;

    match args.find {
        Some(name) => match chart.find(&name) {
            Some(object) => println!("{}", app.formatter.format_sky_object(object)),
            None => bail!("No star or planet named '{}' on the chart", name),
        },
        None => println!("{}", app.formatter.format_sky(&chart)),
    }
    Ok(())
}

async fn run_news(app: &App, args: NewsArgs) -> Result<()> {
    let source = SpaceflightNewsSource::new(app.client.clone(), &app.config.sources.news_url);
    let feed = FetchNewsUseCase::new(Arc::new(source))
        .with_behavior(app.config.sources.behavior())
        .with_limit(args.limit.unwrap_or(app.config.sources.news_limit))
        .execute_with_progress(app.progress.as_ref())
        .await;

    println!("{}", app.formatter.format_news(&feed));
    Ok(())
}

fn run_planets(app: &App, args: PlanetsArgs) -> Result<()> {
    if args.habitable {
        let planets = habitable_exoplanets();
        let layout = gallery_layout(&planets);
        println!("{}", app.formatter.format_exoplanets(&planets, &layout));
    } else {
        println!("{}", app.formatter.format_solar_system(&solar_system()));
    }
    Ok(())
}

async fn run_scores(app: &App) -> Result<()> {
    let board = RecordHighScoreUseCase::new(Arc::new(high_score_store(&app.config)?))
        .board()
        .await?;
    println!("{}", app.formatter.format_scores(&board));
    Ok(())
}
