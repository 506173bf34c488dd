//! Identifier generation for newly created events.

use chrono::{DateTime, Utc};

/// Produces `<prefix><unix-millis>` identifiers.
///
/// Tokens are strictly increasing per generator: a second id requested within
/// the same millisecond, or after the clock stepped backwards, gets the
/// previous token plus one.
#[derive(Debug, Clone)]
pub struct EventIdGenerator {
    prefix: String,
    last_token: Option<i64>,
}

impl Default for EventIdGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

impl EventIdGenerator {
    /// Prefix used unless configured otherwise.
    pub const DEFAULT_PREFIX: &'static str = "event-";

    /// Creates a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            last_token: None,
        }
    }

    /// Generates the next id for the given instant.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let mut token = now.timestamp_millis();
        if let Some(last) = self.last_token {
            if token <= last {
                token = last + 1;
            }
        }
        self.last_token = Some(token);
        format!("{}{}", self.prefix, token)
    }
}
