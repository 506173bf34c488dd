//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/laneboard/config.toml` by default. Only the `[timeline]` table
//! is read today:
//!
//! ```toml
//! [timeline]
//! default_duration_minutes = 30
//! default_background_color = "#34A853"
//! ```

use std::path::{Path, PathBuf};

use laneboard_controller::TimelineConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Configuration for the laneboard CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Draft defaults and id generation.
    pub timeline: TimelineConfig,
}

impl CliConfig {
    /// Loads configuration from the default path, or the defaults if there is
    /// no file there.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("laneboard")
    }
}
