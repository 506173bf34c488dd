//! Timeline configuration.

use chrono::{DateTime, Duration, Utc};
use laneboard_core::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_DURATION_MINUTES, DEFAULT_TEXT_COLOR, EventIdGenerator,
};
use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, ControllerResult};

/// Longest accepted default draft duration: one leap year.
pub const MAX_DURATION_MINUTES: i64 = 366 * 24 * 60;

/// Fixed values the controller uses when building and committing drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Length of a new draft in minutes.
    pub default_duration_minutes: i64,

    /// Background color of a new draft, and of a commit without one.
    pub default_background_color: String,

    /// Text color applied on every commit from the event dialog.
    pub commit_text_color: String,

    /// Prefix of generated event ids.
    pub id_prefix: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            default_background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            commit_text_color: DEFAULT_TEXT_COLOR.to_string(),
            id_prefix: EventIdGenerator::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl TimelineConfig {
    /// Builder: set the default draft duration.
    pub fn with_default_duration_minutes(mut self, minutes: i64) -> Self {
        self.default_duration_minutes = minutes;
        self
    }

    /// Builder: set the default background color.
    pub fn with_default_background_color(mut self, color: impl Into<String>) -> Self {
        self.default_background_color = color.into();
        self
    }

    /// Builder: set the id prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Returns the default draft duration.
    ///
    /// Out-of-range values are clamped to `1..=MAX_DURATION_MINUTES`;
    /// [`TimelineConfig::validate`] reports them.
    pub fn default_duration(&self) -> Duration {
        Duration::minutes(self.default_duration_minutes.clamp(1, MAX_DURATION_MINUTES))
    }

    /// Returns `start` plus the default duration, or `start` itself if that
    /// would leave the representable range.
    pub fn default_end(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        start
            .checked_add_signed(self.default_duration())
            .unwrap_or(start)
    }

    /// Checks that drafts built from this config will be well formed.
    pub fn validate(&self) -> ControllerResult<()> {
        if !(1..=MAX_DURATION_MINUTES).contains(&self.default_duration_minutes) {
            return Err(ControllerError::config(format!(
                "default_duration_minutes must be between 1 and {MAX_DURATION_MINUTES}, got {}",
                self.default_duration_minutes
            )));
        }
        if self.default_background_color.trim().is_empty() {
            return Err(ControllerError::config(
                "default_background_color must not be empty",
            ));
        }
        if self.commit_text_color.trim().is_empty() {
            return Err(ControllerError::config("commit_text_color must not be empty"));
        }
        if self.id_prefix.is_empty() {
            return Err(ControllerError::config("id_prefix must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TimelineConfig::default();
        assert_eq!(config.default_duration(), Duration::hours(1));
        assert_eq!(config.default_background_color, "#3788d8");
        assert_eq!(config.commit_text_color, "#ffffff");
        assert_eq!(config.id_prefix, "event-");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_config() {
        let config = TimelineConfig::default()
            .with_default_duration_minutes(30)
            .with_default_background_color("#8E44AD")
            .with_id_prefix("slot-");

        assert_eq!(config.default_duration(), Duration::minutes(30));
        assert_eq!(config.default_background_color, "#8E44AD");
        assert_eq!(config.id_prefix, "slot-");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_duration() {
        let err = TimelineConfig::default()
            .with_default_duration_minutes(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("default_duration_minutes"));
    }

    #[test]
    fn rejects_oversized_duration() {
        let config = TimelineConfig::default().with_default_duration_minutes(i64::MAX / 2);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("between 1 and 527040"));

        assert_eq!(config.default_duration(), Duration::days(366));
    }

    #[test]
    fn out_of_range_duration_is_clamped() {
        let config = TimelineConfig::default().with_default_duration_minutes(i64::MIN);
        assert_eq!(config.default_duration(), Duration::minutes(1));

        let last = DateTime::<Utc>::MAX_UTC;
        assert_eq!(TimelineConfig::default().default_end(last), last);
    }

    #[test]
    fn rejects_empty_prefix() {
        let config = TimelineConfig::default().with_id_prefix("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_input_keeps_defaults() {
        let config: TimelineConfig =
            serde_json::from_str(r##"{"default_background_color": "#34A853"}"##).unwrap();
        assert_eq!(config.default_background_color, "#34A853");
        assert_eq!(config.default_duration_minutes, 60);
        assert_eq!(config.id_prefix, "event-");
    }
}
