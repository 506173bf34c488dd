//! Signal and message types exchanged with renderers and hosts.

use chrono::{DateTime, Utc};
use laneboard_core::{CalendarEvent, Draft, Resource};
use serde::{Deserialize, Serialize};

/// A reference to a resource as the renderer reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: String,
}

impl ResourceRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An event as the renderer currently displays it.
///
/// After a drag or resize this carries the new position; the rest of the
/// record is looked up in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "startStr")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endStr")]
    pub end: DateTime<Utc>,
    /// Resources the event is attached to; the first one is its lane.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl RenderedEvent {
    /// Returns the lane the event sits on, or `""` if it has none.
    pub fn resource_id(&self) -> &str {
        self.resources.first().map(|r| r.id.as_str()).unwrap_or("")
    }

    /// Builder: move the event to another lane and time.
    pub fn moved_to(
        mut self,
        resource_id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        self.resources = vec![ResourceRef::new(resource_id)];
        self.start = start;
        self.end = end;
        self
    }
}

impl From<&CalendarEvent> for RenderedEvent {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            resources: vec![ResourceRef::new(event.resource_id.clone())],
            background_color: event.background_color.clone(),
            border_color: event.border_color.clone(),
            text_color: event.text_color.clone(),
        }
    }
}

impl From<CalendarEvent> for RenderedEvent {
    fn from(event: CalendarEvent) -> Self {
        Self::from(&event)
    }
}

/// Interaction signals raised by the renderer and the event dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Signal {
    /// An empty slot was clicked.
    SlotClick {
        #[serde(rename = "dateStr")]
        date: DateTime<Utc>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource: Option<ResourceRef>,
    },
    /// An event was clicked.
    EventClick { event: RenderedEvent },
    /// An event was dragged to a new lane or time.
    EventDrop { event: RenderedEvent },
    /// An event was resized.
    EventResize { event: RenderedEvent },
    /// The toolbar "Add event" command.
    AddEvent,
    /// Field edits in the event dialog.
    EditDraft { fields: Draft },
    /// "Create" / "Update" in the event dialog.
    Save,
    /// "Delete" in the event dialog.
    RequestDelete,
    /// "Delete" in the confirmation dialog.
    ConfirmDelete,
    /// "Cancel" in whichever dialog is on top.
    Cancel,
}

impl Signal {
    /// Creates a slot click on a resource lane.
    pub fn slot_click(date: DateTime<Utc>, resource_id: impl Into<String>) -> Self {
        Self::SlotClick {
            date,
            resource: Some(ResourceRef::new(resource_id)),
        }
    }

    pub fn event_click(event: impl Into<RenderedEvent>) -> Self {
        Self::EventClick {
            event: event.into(),
        }
    }

    pub fn event_drop(event: RenderedEvent) -> Self {
        Self::EventDrop { event }
    }

    pub fn event_resize(event: RenderedEvent) -> Self {
        Self::EventResize { event }
    }

    pub fn edit(fields: Draft) -> Self {
        Self::EditDraft { fields }
    }

    /// Creates a title edit.
    pub fn set_title(title: impl Into<String>) -> Self {
        Self::edit(Draft {
            title: Some(title.into()),
            ..Default::default()
        })
    }

    /// Returns the wire name of the signal.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SlotClick { .. } => "slot_click",
            Self::EventClick { .. } => "event_click",
            Self::EventDrop { .. } => "event_drop",
            Self::EventResize { .. } => "event_resize",
            Self::AddEvent => "add_event",
            Self::EditDraft { .. } => "edit_draft",
            Self::Save => "save",
            Self::RequestDelete => "request_delete",
            Self::ConfirmDelete => "confirm_delete",
            Self::Cancel => "cancel",
        }
    }
}

/// Collections pushed by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostUpdate {
    #[serde(rename = "host_resources")]
    Resources { resources: Vec<Resource> },
    #[serde(rename = "host_events")]
    Events { events: Vec<CalendarEvent> },
}

/// One decoded input line: either a renderer/dialog signal or host data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Signal(Signal),
    Host(HostUpdate),
}

/// Severity of an operator notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Everything a host observes, as one stream of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    EventAdded {
        event: CalendarEvent,
    },
    EventChanged {
        event: CalendarEvent,
    },
    EventDeleted {
        #[serde(rename = "eventId")]
        event_id: String,
    },
    Notified {
        notification: Notification,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn slot_click_renderer_shape() {
        let signal: Signal = serde_json::from_value(json!({
            "type": "slot_click",
            "dateStr": "2024-01-01T10:00:00Z",
            "resource": {"id": "resource-1"}
        }))
        .unwrap();

        assert_eq!(
            signal,
            Signal::slot_click(utc(2024, 1, 1, 10, 0, 0), "resource-1")
        );
    }

    #[test]
    fn slot_click_without_resource() {
        let signal: Signal = serde_json::from_value(json!({
            "type": "slot_click",
            "dateStr": "2024-01-01T10:00:00Z"
        }))
        .unwrap();

        assert!(matches!(signal, Signal::SlotClick { resource: None, .. }));
    }

    #[test]
    fn malformed_instant_fails_to_decode() {
        let result: Result<Signal, _> = serde_json::from_value(json!({
            "type": "slot_click",
            "dateStr": "not-a-date"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rendered_event_shape() {
        let signal: Signal = serde_json::from_value(json!({
            "type": "event_drop",
            "event": {
                "id": "event-1",
                "title": "Standup",
                "startStr": "2024-01-01T14:00:00Z",
                "endStr": "2024-01-01T15:00:00Z",
                "resources": [{"id": "resource-2"}],
                "backgroundColor": "#3788d8"
            }
        }))
        .unwrap();

        let Signal::EventDrop { event } = signal else {
            panic!("expected event_drop");
        };
        assert_eq!(event.resource_id(), "resource-2");
        assert_eq!(event.start, utc(2024, 1, 1, 14, 0, 0));
        assert_eq!(event.border_color, None);
    }

    #[test]
    fn rendered_event_without_resources_has_empty_lane() {
        let event = RenderedEvent {
            id: "event-1".into(),
            title: "Floating".into(),
            start: utc(2024, 1, 1, 10, 0, 0),
            end: utc(2024, 1, 1, 11, 0, 0),
            resources: vec![],
            background_color: None,
            border_color: None,
            text_color: None,
        };
        assert_eq!(event.resource_id(), "");
    }

    #[test]
    fn edit_draft_carries_partial_fields() {
        let signal: Signal = serde_json::from_value(json!({
            "type": "edit_draft",
            "fields": {"title": "Standup", "backgroundColor": "#34A853"}
        }))
        .unwrap();

        let Signal::EditDraft { fields } = signal else {
            panic!("expected edit_draft");
        };
        assert_eq!(fields.title.as_deref(), Some("Standup"));
        assert_eq!(fields.background_color.as_deref(), Some("#34A853"));
        assert!(fields.start.is_none());
    }

    #[test]
    fn unit_signals_by_name() {
        for (name, expected) in [
            ("add_event", Signal::AddEvent),
            ("save", Signal::Save),
            ("request_delete", Signal::RequestDelete),
            ("confirm_delete", Signal::ConfirmDelete),
            ("cancel", Signal::Cancel),
        ] {
            let signal: Signal = serde_json::from_value(json!({"type": name})).unwrap();
            assert_eq!(signal, expected);
            assert_eq!(signal.kind(), name);
        }
    }

    #[test]
    fn host_update_tags() {
        let update: HostUpdate = serde_json::from_value(json!({
            "type": "host_resources",
            "resources": [{"id": "resource-1", "title": "Resource A"}]
        }))
        .unwrap();
        assert_eq!(
            update,
            HostUpdate::Resources {
                resources: vec![Resource::new("resource-1", "Resource A")]
            }
        );
    }

    #[test]
    fn outbound_delete_shape() {
        let message = Outbound::EventDeleted {
            event_id: "event-1".into(),
        };
        insta::assert_json_snapshot!(message, @r###"
        {
          "type": "event_deleted",
          "eventId": "event-1"
        }
        "###);
    }

    #[test]
    fn notification_constructors() {
        assert!(Notification::error("Please fill in all required fields").is_error());
        assert!(!Notification::success("Event added successfully").is_error());
    }
}
