//! Log subscriber setup.
//!
//! The library crates only emit through the `tracing` macros. The `laneboard`
//! binary, or an application embedding the controller, installs a subscriber
//! once with [`init_tracing`]. Logs go to stderr so they never interleave with
//! host messages on stdout.

use std::str::FromStr;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[derive(Debug, Error)]
pub enum TracingError {
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("invalid log filter {directive:?}: {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("unknown log format {0:?}, expected text or json")]
    UnknownFormat(String),
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One short human-readable line per event.
    #[default]
    Text,
    /// One JSON object per line. Each dispatched signal also logs its span
    /// closing, with its duration.
    Json,
}

impl FromStr for LogFormat {
    type Err = TracingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(TracingError::UnknownFormat(s.to_string())),
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for the `laneboard` targets when `RUST_LOG` is unset.
    pub level: Level,
    pub format: LogFormat,
    /// Add source file and line to every line.
    pub include_location: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Text,
            include_location: false,
        }
    }
}

impl TracingConfig {
    /// Settings for `laneboard --debug`.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            level: Level::DEBUG,
            include_location: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn directive(&self) -> String {
        format!("laneboard={}", self.level)
    }
}

/// Installs the global subscriber. `RUST_LOG`, when set, replaces the
/// configured level.
///
/// # Errors
///
/// Fails if a subscriber is already installed or the filter does not parse.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        let directive = config.directive();
        EnvFilter::try_new(&directive).map_err(|source| TracingError::Filter { directive, source })
    })?;
    let location = config.include_location;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => {
            let layer = fmt::layer()
                .compact()
                .without_time()
                .with_file(location)
                .with_line_number(location)
                .with_writer(std::io::stderr);
            tracing::subscriber::set_global_default(registry.with(layer))?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_file(location)
                .with_line_number(location)
                .with_writer(std::io::stderr);
            tracing::subscriber::set_global_default(registry.with(layer))?;
        }
    }
    Ok(())
}
