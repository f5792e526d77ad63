use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod domain;
mod application;
mod infrastructure;

use application::errors::BotError;
use domain::entities::{Difficulty, Mode, Puzzle, Seed};
use domain::traits::Bot;
use infrastructure::adapters::{ConsoleAdapter, DiscordAdapter};
use infrastructure::config::Config;
use infrastructure::puzzle::PuzzleClient;

#[derive(Parser)]
#[command(name = "kanjidle-bot")]
#[command(about = "Chat listener and kanjidle puzzle client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and environment)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat listener
    Run,
    /// Fetch one puzzle and print it
    Puzzle {
        /// today | random
        #[arg(long, default_value = "today")]
        seed: Seed,

        /// classic | hidden
        #[arg(long, default_value = "classic")]
        mode: Mode,

        /// simple | easy | normal | hard | lunatic | lunatic2
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Show the answer inside the hints
        #[arg(long)]
        reveal: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(load_config(&cli.config), cli.token),
        Commands::Puzzle { seed, mode, difficulty, reveal } => {
            show_puzzle(&load_config(&cli.config), seed, mode, difficulty, reveal)
        }
        Commands::Version => {
            println!("kanjidle-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if std::path::Path::new(config_path).exists() {
        Config::load(config_path)
            .map(Config::with_env)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::load_env()
            })
    } else {
        Config::load_env()
    }
}

fn run_bot(config: Config, token_override: Option<String>) -> Result<(), BotError> {
    tracing::info!("Starting {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    let token = token_override
        .filter(|t| !t.trim().is_empty())
        .or_else(|| config.discord_token().map(str::to_string));

    let bot: Box<dyn Bot> = match token {
        Some(token) => Box::new(DiscordAdapter::new(token, &config.bot.name)),
        None => {
            tracing::warn!("No Discord token configured, reading messages from stdin");
            Box::new(ConsoleAdapter::new(&config.bot.name))
        }
    };

    let info = bot.bot_info();
    tracing::info!("Listening as {} on {}", info.name, info.platform);
    rt.block_on(bot.start())
}

fn show_puzzle(
    config: &Config,
    seed: Seed,
    mode: Mode,
    difficulty: Option<Difficulty>,
    reveal: bool,
) -> Result<(), BotError> {
    let client = PuzzleClient::from_config(&config.puzzle_api)?;
    tracing::info!("Requesting {} {} puzzle from {}", seed, mode, client.base_url());
    let puzzle = client.fetch_puzzle(seed, mode, difficulty)?;
    println!("{}", render_puzzle(&puzzle, reveal));
    Ok(())
}

fn render_puzzle(puzzle: &Puzzle, reveal: bool) -> String {
    let meta = &puzzle.answer_meta;
    let mut out = format!("Puzzle ({})\n", puzzle.difficulty);
    out.push_str(&format!("Hints:       {}\n", puzzle.pretty_hints(reveal)));
    if !puzzle.extra_hints.is_empty() {
        out.push_str(&format!("Extra hints: {}\n", puzzle.pretty_extra_hints(reveal)));
    }
    if reveal {
        out.push_str(&format!("Answer:      {}\n", puzzle.answer));
        out.push_str(&format!(
            "Level {} · {} · {} strokes · radical {}\n",
            meta.level, meta.class_name, meta.stroke_count, meta.radical
        ));
        out.push_str(&format!("On:  {}\n", meta.on_readings.join("、")));
        out.push_str(&format!("Kun: {}", meta.kun_display().join("、")));
    }
    out.trim_end().to_string()
}

fn init_config() -> Result<(), BotError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| BotError::Internal(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::entities::puzzle::{Hint, KanjiMeta, Location};

    fn puzzle() -> Puzzle {
        Puzzle {
            hints: vec![Hint::new(Location::Left, "活"), Hint::new(Location::Right, "学")],
            extra_hints: vec![],
            answer: "生".to_string(),
            answer_meta: KanjiMeta {
                level: "10".to_string(),
                class_name: "kyoiku".to_string(),
                stroke_count: 5,
                radical: "生".to_string(),
                on_readings: vec!["セイ".to_string(), "ショウ".to_string()],
                kun_readings: vec![vec!["い".to_string(), "きる".to_string()]],
            },
            difficulty: Difficulty::Hard,
        }
    }

    #[test]
    fn test_render_hidden() {
        let out = render_puzzle(&puzzle(), false);
        assert_eq!(out, "Puzzle (hard)\nHints:       ◯活\u{3000}学◯");
    }

    #[test]
    fn test_render_revealed() {
        let out = render_puzzle(&puzzle(), true);
        assert!(out.contains("Hints:       生活\u{3000}学生"));
        assert!(out.contains("Answer:      生"));
        assert!(out.contains("5 strokes"));
        assert!(out.ends_with("Kun: い.きる"));
    }

    #[test]
    fn test_cli_parses_puzzle_args() {
        let cli = Cli::try_parse_from([
            "kanjidle-bot",
            "puzzle",
            "--seed",
            "random",
            "--mode",
            "hidden",
            "--difficulty",
            "lunatic2",
        ])
        .unwrap();
        match cli.command {
            Commands::Puzzle { seed, mode, difficulty, reveal } => {
                assert_eq!(seed, Seed::Random);
                assert_eq!(mode, Mode::Hidden);
                assert_eq!(difficulty, Some(Difficulty::Lunatic2));
                assert!(!reveal);
            }
            _ => panic!("expected puzzle command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        let parsed = Cli::try_parse_from(["kanjidle-bot", "puzzle", "--difficulty", "extreme"]);
        assert!(parsed.is_err());
    }
}
