//! Calendar events placed on resource lanes.
//!
//! [`CalendarEvent`] is the committed, canonical record. Its JSON shape is the
//! one hosts and renderers exchange (`resourceId`, `backgroundColor`, ...),
//! with any host-defined attributes flattened alongside the known fields.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Background color used when none was chosen.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#3788d8";

/// Text color forced on every event committed from the editor.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Open-ended host attributes carried by resources and events.
pub type Extensions = BTreeMap<String, serde_json::Value>;

/// A time-bounded assignment of a title to one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Unique identifier, never regenerated once assigned.
    pub id: String,
    /// The resource lane this event sits on.
    pub resource_id: String,
    /// Display label.
    pub title: String,
    /// When the event starts.
    pub start: DateTime<Utc>,
    /// When the event ends.
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Host-defined attributes, passed through untouched.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl CalendarEvent {
    /// Creates an event without colors or extension attributes.
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_id: resource_id.into(),
            title: title.into(),
            start,
            end,
            background_color: None,
            border_color: None,
            text_color: None,
            extensions: Extensions::new(),
        }
    }

    /// Builder: set the background color (the border follows it).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self.normalize_border();
        self
    }

    /// Builder: set the text color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Builder: attach an extension attribute.
    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Makes the border mirror the background.
    pub fn normalize_border(&mut self) {
        self.border_color = self.background_color.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn standup() -> CalendarEvent {
        CalendarEvent::new(
            "event-1",
            "resource-1",
            "Standup",
            utc(2024, 1, 1, 10, 0, 0),
            utc(2024, 1, 1, 11, 0, 0),
        )
    }

    #[test]
    fn with_color_mirrors_border() {
        let event = standup().with_color("#34A853");
        assert_eq!(event.background_color.as_deref(), Some("#34A853"));
        assert_eq!(event.border_color, event.background_color);
    }

    #[test]
    fn host_json_shape() {
        let event = standup()
            .with_color("#3788d8")
            .with_text_color("#ffffff")
            .with_extension("priority", json!("high"));

        insta::assert_json_snapshot!(event, @r###"
        {
          "id": "event-1",
          "resourceId": "resource-1",
          "title": "Standup",
          "start": "2024-01-01T10:00:00Z",
          "end": "2024-01-01T11:00:00Z",
          "backgroundColor": "#3788d8",
          "borderColor": "#3788d8",
          "textColor": "#ffffff",
          "priority": "high"
        }
        "###);
    }

    #[test]
    fn parses_host_json_with_offsets_and_extensions() {
        let event: CalendarEvent = serde_json::from_value(json!({
            "id": "event-2",
            "resourceId": "resource-2",
            "title": "Afternoon Session",
            "start": "2024-01-02T14:00:00+02:00",
            "end": "2024-01-02T16:00:00+02:00",
            "backgroundColor": "#34A853",
            "location": "Hall 3"
        }))
        .unwrap();

        assert_eq!(event.start, utc(2024, 1, 2, 12, 0, 0));
        assert_eq!(event.border_color, None);
        assert_eq!(event.text_color, None);
        assert_eq!(event.extensions["location"], json!("Hall 3"));
    }

    #[test]
    fn rejects_malformed_instant() {
        let result: Result<CalendarEvent, _> = serde_json::from_value(json!({
            "id": "event-3",
            "resourceId": "resource-1",
            "title": "Broken",
            "start": "yesterday-ish",
            "end": "2024-01-02T16:00:00Z"
        }));
        assert!(result.is_err());
    }
}
