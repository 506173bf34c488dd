//! laneboard CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use laneboard_cli::cli::{Cli, Command, ConfigAction};
use laneboard_cli::commands;
use laneboard_cli::config::CliConfig;
use laneboard_cli::error::CliResult;
use laneboard_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    }
    .with_format(cli.log_format);
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    // Run the command
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path)?,
        None => CliConfig::load()?,
    };

    match cli.command {
        Command::Sample { from } => commands::sample::sample(from),
        Command::Replay {
            script,
            data,
            at,
            json,
        } => commands::replay::replay(&config, &script, data.as_deref(), at, json),
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
