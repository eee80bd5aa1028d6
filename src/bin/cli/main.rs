mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use revise_lib::config::TrackerConfig;
use revise_lib::storage::FileStorage;

#[derive(Parser)]
#[command(name = "revise-cli", about = "Study tracker with spaced-repetition reviews", version)]
struct Cli {
    /// Data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StatusArg {
    Completed,
    NeedsReview,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's focus and the suggested topic for the weekday
    Today,

    /// List subjects and topics with status and next review
    Topics,

    /// Mark a topic as learned today and schedule its reviews
    Learn {
        /// Topic id or name (case-insensitive prefix match)
        topic: String,
    },

    /// Set a topic's status without changing its review plan
    Status {
        /// Topic id or name (case-insensitive prefix match)
        topic: String,
        /// New status
        status: StatusArg,
    },

    /// Record today's mood (studied, skipped, unfocused, strong-study)
    Mood {
        mood: String,
        /// Record for another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the last seven days of mood check-ins
    Trend,

    /// Show the weekly report card
    Report,

    /// Mistake log
    #[command(subcommand)]
    Mistake(MistakeCommand),

    /// Show the weekly study plan
    Schedule,
}

#[derive(Subcommand)]
enum MistakeCommand {
    /// Log a new mistake
    Add {
        /// What went wrong
        detail: String,
        /// Related topic (defaults to "General")
        #[arg(long)]
        topic: Option<String>,
    },

    /// List logged mistakes
    List,

    /// Delete (resolve) a mistake by id
    Delete {
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => FileStorage::default_data_dir().context("Failed to get data directory")?,
    };
    let config = TrackerConfig::load(&config_dir).context("Failed to read config.toml")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    if let Some(level) = &config.ignored_log_level {
        log::warn!("Ignoring unknown log_level '{}' in config", level);
    }

    let use_color = config.color && !cli.no_color && std::io::stdout().is_terminal();
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolve_data_dir(&config_dir),
    };

    let mut app = app::App::new(data_dir, cli.today.as_deref())?;

    match cli.command.unwrap_or(Command::Today) {
        Command::Today => commands::today::run(&app, &cli.format, use_color)?,
        Command::Topics => commands::topics::run_list(&app, &cli.format, use_color)?,
        Command::Learn { topic } => {
            commands::topics::run_learn(&mut app, &topic, &cli.format, use_color)?
        }
        Command::Status { topic, status } => {
            commands::topics::run_status(&mut app, &topic, status, &cli.format)?
        }
        Command::Mood { mood, date } => {
            commands::mood::run_record(&mut app, &mood, date.as_deref(), &cli.format)?
        }
        Command::Trend => commands::mood::run_trend(&app, &cli.format, use_color)?,
        Command::Report => commands::report::run(&app, &cli.format, use_color)?,
        Command::Mistake(subcmd) => match subcmd {
            MistakeCommand::Add { detail, topic } => {
                commands::mistakes::run_add(&mut app, &detail, topic.as_deref(), &cli.format)?
            }
            MistakeCommand::List => commands::mistakes::run_list(&app, &cli.format)?,
            MistakeCommand::Delete { id } => {
                commands::mistakes::run_delete(&mut app, &id, &cli.format)?
            }
        },
        Command::Schedule => commands::today::run_schedule(&app, &cli.format, use_color)?,
    }

    Ok(())
}
