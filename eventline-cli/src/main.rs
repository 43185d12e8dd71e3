//! Eventline - browse community events and register for them
//!
//! Main entry point: parses the command line, resolves configuration and
//! dispatches to the catalog, registration and settings commands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use eventline_core::{EventId, EventlineConfig};

mod events_cli;
mod register_cli;
mod settings_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "eventline",
    about = "Browse community events and register for them",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Use this configuration file instead of the default location
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Override the base URL serving GET /events
    #[clap(long, global = true)]
    events_url: Option<String>,

    /// Override the base URL serving POST /users and /registrations
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// Override the per-request timeout in seconds
    #[clap(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Parser, Debug)]
enum Command {
    /// List events, optionally filtered by category ("Today" for today's events)
    Events {
        /// Category to filter by
        #[clap(long)]
        category: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search event names by prefix (shows up to 6 suggestions)
    Search {
        /// Start of the event name, case-insensitive
        query: String,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show the three featured events of the day
    Featured {
        /// Day to pick for (YYYY-MM-DD, defaults to today)
        #[clap(long)]
        date: Option<NaiveDate>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the categories present in the catalog
    Categories,

    /// Show details of a single event
    Show {
        /// Event identifier
        id: EventId,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Register for an event
    Register(register_cli::RegisterArgs),

    /// Show or change display settings
    Settings {
        #[clap(subcommand)]
        command: settings_cli::SettingsCommand,
    },
}

/// Initialize tracing from the --log-level flag, honoring RUST_LOG when set
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Logs to stderr, results to stdout
        .init();
}

impl Cli {
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => EventlineConfig::default_config_path(),
        }
    }

    /// Load the config file and apply command-line overrides
    fn resolve_config(&self, path: &Path) -> Result<EventlineConfig> {
        let mut config = EventlineConfig::load_from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

        if let Some(url) = &self.events_url {
            config.api.events_url = url.clone();
        }
        if let Some(url) = &self.api_url {
            config.api.registration_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }

        tracing::debug!(
            "Resolved config: events_url={}, registration_url={}, timeout={}s",
            config.api.events_url,
            config.api.registration_url,
            config.api.timeout_seconds
        );
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let config_path = cli.config_path()?;
    let config = cli.resolve_config(&config_path)?;

    match cli.command {
        Command::Events { category, json } => {
            events_cli::list(&config, category.as_deref(), json).await
        }
        Command::Search { query, json } => events_cli::search(&config, &query, json).await,
        Command::Featured { date, json } => events_cli::featured(&config, date, json).await,
        Command::Categories => events_cli::categories(&config).await,
        Command::Show { id, json } => events_cli::show(&config, &id, json).await,
        Command::Register(args) => register_cli::execute(&config, args).await,
        Command::Settings { command } => {
            // Persist file values only, not this invocation's URL overrides
            command.execute(EventlineConfig::load_from_path(&config_path)?, &config_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events_with_category() {
        let cli = Cli::try_parse_from(["eventline", "events", "--category", "Today", "--json"])
            .unwrap();
        match cli.command {
            Command::Events { category, json } => {
                assert_eq!(category.as_deref(), Some("Today"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_featured_date() {
        let cli = Cli::try_parse_from(["eventline", "featured", "--date", "2025-01-03"]).unwrap();
        match cli.command {
            Command::Featured { date, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 3));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Cli::try_parse_from(["eventline", "featured", "--date", "tomorrow"]).is_err());
    }

    #[test]
    fn test_parse_show_numeric_and_text_ids() {
        let cli = Cli::try_parse_from(["eventline", "show", "12"]).unwrap();
        assert!(matches!(cli.command, Command::Show { id: EventId::Number(12), .. }));

        let cli = Cli::try_parse_from(["eventline", "show", "abc"]).unwrap();
        assert!(matches!(cli.command, Command::Show { id: EventId::Text(_), .. }));
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "eventline",
            "categories",
            "--events-url",
            "http://localhost:1234",
            "--timeout",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.events_url.as_deref(), Some("http://localhost:1234"));
        assert_eq!(cli.timeout, Some(3));
    }

    #[test]
    fn test_overrides_applied_over_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "api:\n  events_url: http://from-file\n  timeout_seconds: 20\n")
            .unwrap();

        let cli = Cli::try_parse_from([
            "eventline",
            "categories",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://override",
        ])
        .unwrap();
        let config = cli.resolve_config(&path).unwrap();

        assert_eq!(config.api.events_url, "http://from-file");
        assert_eq!(config.api.registration_url, "http://override");
        assert_eq!(config.api.timeout_seconds, 20);
    }
}
