//! Command-line interface definition.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use laneboard_core::{LogFormat, parse_instant};

/// laneboard - resource timeline demo host
#[derive(Debug, Parser)]
#[command(name = "laneboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "LANEBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Log format on stderr: text, or json with one span per signal
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the built-in sample dataset as JSON
    Sample {
        /// First day of the sample week, as an RFC 3339 instant (default: today)
        #[arg(long, value_parser = parse_instant)]
        from: Option<DateTime<Utc>>,
    },

    /// Replay a recorded signal script against a dataset
    Replay {
        /// JSON-lines script of signals and host updates
        script: PathBuf,

        /// Dataset file (default: the built-in sample)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Anchor day of the built-in sample, and the clock used for
        /// "add event" and generated ids (default: now)
        #[arg(long, value_parser = parse_instant)]
        at: Option<DateTime<Utc>>,

        /// Output host messages as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn replay_arguments() {
        let cli = Cli::try_parse_from([
            "laneboard",
            "-v",
            "replay",
            "session.jsonl",
            "--at",
            "2024-01-01T09:00:00+01:00",
            "--json",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Command::Replay { script, data, at, json } => {
                assert_eq!(script, PathBuf::from("session.jsonl"));
                assert!(data.is_none());
                assert_eq!(at.unwrap().to_rfc3339(), "2024-01-01T08:00:00+00:00");
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn log_format_flag() {
        let cli = Cli::try_parse_from(["laneboard", "replay", "s.jsonl", "--log-format", "json"])
            .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);

        let cli = Cli::try_parse_from(["laneboard", "sample"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Text);

        assert!(Cli::try_parse_from(["laneboard", "--log-format", "xml", "sample"]).is_err());
    }

    #[test]
    fn bad_instant_is_rejected() {
        assert!(Cli::try_parse_from(["laneboard", "sample", "--from", "tomorrow"]).is_err());
    }
}
