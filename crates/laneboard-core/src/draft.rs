//! Draft staging for the event editor.
//!
//! A [`Draft`] is a partial [`CalendarEvent`] being created or edited. The
//! [`DraftEditor`] holds at most one of them together with the create/edit
//! mode. It performs no validation; committing is the controller's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::{CalendarEvent, Extensions};

/// A possibly incomplete event record.
///
/// The same shape doubles as a patch for [`DraftEditor::update`]: every field
/// that is set overwrites the draft's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Draft {
    /// Creates a blank draft for a new event on `resource_id`.
    pub fn blank(
        resource_id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: Some(resource_id.into()),
            title: Some(String::new()),
            start: Some(start),
            end: Some(end),
            background_color: Some(background_color.into()),
            ..Default::default()
        }
    }

    /// Returns true if the draft may be committed: it needs a non-empty title
    /// and a non-empty resource id. Nothing else is checked.
    pub fn is_committable(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        filled(&self.title) && filled(&self.resource_id)
    }

    /// Overwrites every field that is set in `patch`.
    ///
    /// Extension attributes are overwritten key by key; their values are
    /// replaced whole, never merged.
    pub fn merge(&mut self, patch: Draft) {
        let Draft {
            id,
            resource_id,
            title,
            start,
            end,
            background_color,
            border_color,
            text_color,
            extensions,
        } = patch;

        if id.is_some() {
            self.id = id;
        }
        if resource_id.is_some() {
            self.resource_id = resource_id;
        }
        if title.is_some() {
            self.title = title;
        }
        if start.is_some() {
            self.start = start;
        }
        if end.is_some() {
            self.end = end;
        }
        if background_color.is_some() {
            self.background_color = background_color;
        }
        if border_color.is_some() {
            self.border_color = border_color;
        }
        if text_color.is_some() {
            self.text_color = text_color;
        }
        self.extensions.extend(extensions);
    }
}

impl From<&CalendarEvent> for Draft {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            id: Some(event.id.clone()),
            resource_id: Some(event.resource_id.clone()),
            title: Some(event.title.clone()),
            start: Some(event.start),
            end: Some(event.end),
            background_color: event.background_color.clone(),
            border_color: event.border_color.clone(),
            text_color: event.text_color.clone(),
            extensions: event.extensions.clone(),
        }
    }
}

/// Holds the single draft being edited and whether it edits an existing event.
#[derive(Debug, Clone, Default)]
pub struct DraftEditor {
    draft: Option<Draft>,
    editing: bool,
}

impl DraftEditor {
    /// Creates an empty editor in create mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new draft, discarding whatever was staged before.
    pub fn begin(&mut self, initial: Draft, editing: bool) {
        self.draft = Some(initial);
        self.editing = editing;
    }

    /// Merges `patch` into the current draft, starting one if none exists.
    pub fn update(&mut self, patch: Draft) {
        self.draft.get_or_insert_with(Draft::default).merge(patch);
    }

    /// Drops the draft and returns to create mode.
    pub fn clear(&mut self) {
        self.draft = None;
        self.editing = false;
    }

    /// Returns the current draft.
    pub fn current(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Returns true when the draft edits an existing event.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns the id of the draft, if it has one.
    pub fn draft_id(&self) -> Option<&str> {
        self.draft.as_ref().and_then(|d| d.id.as_deref())
    }
}
