//! Instant helpers.
//!
//! Events carry absolute instants as [`DateTime<Utc>`]. Strings coming from a
//! renderer may use any RFC 3339 offset; they are normalised to UTC on parse.
//! Parsing is strict: anything that is not RFC 3339 is rejected rather than
//! guessed at.

use chrono::{DateTime, NaiveTime, SecondsFormat, Utc};

use crate::error::{CoreError, CoreResult};

/// Length of a freshly created draft, in minutes.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Parses an RFC 3339 instant and converts it to UTC.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInstant`] if the string is not RFC 3339.
pub fn parse_instant(value: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::invalid_instant(value, e))
}

/// Formats an instant the way it is exchanged with hosts (`2024-01-01T10:00:00Z`).
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Returns midnight UTC of the day `instant` falls on.
pub fn start_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}
