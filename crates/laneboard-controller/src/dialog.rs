//! Dialog state and the data a dialog surface needs to draw itself.

use laneboard_core::{Draft, Resource};
use serde::Serialize;

/// Whether the event dialog creates a new event or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogMode {
    Create,
    Edit,
}

/// Which dialogs are open.
///
/// The delete confirmation is nested on top of the event dialog in edit mode;
/// while it is shown the event dialog is still open underneath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "mode", rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Idle,
    EventDialog(DialogMode),
    DeleteConfirm,
}

impl DialogState {
    /// Returns true if the event dialog is visible (possibly under the
    /// delete confirmation).
    pub fn is_event_dialog_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if the delete confirmation is visible.
    pub fn is_delete_confirm_open(&self) -> bool {
        matches!(self, Self::DeleteConfirm)
    }

    /// Returns the mode of the event dialog, if it is open.
    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            Self::Idle => None,
            Self::EventDialog(mode) => Some(*mode),
            Self::DeleteConfirm => Some(DialogMode::Edit),
        }
    }
}

/// Everything the event dialog shows, derived from controller state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogView<'a> {
    pub mode: DialogMode,
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
    /// The delete button only exists when editing.
    pub show_delete: bool,
    pub confirm_open: bool,
    pub draft: Option<&'a Draft>,
    /// Choices for the resource field.
    pub resources: &'a [Resource],
}

impl<'a> DialogView<'a> {
    pub(crate) fn new(
        state: DialogState,
        draft: Option<&'a Draft>,
        resources: &'a [Resource],
    ) -> Option<Self> {
        let mode = state.mode()?;
        let (title, description, submit_label) = match mode {
            DialogMode::Create => (
                "Add New Event",
                "Fill in the details for your new event.",
                "Create",
            ),
            DialogMode::Edit => ("Edit Event", "Make changes to your event here.", "Update"),
        };

        Some(Self {
            mode,
            title,
            description,
            submit_label,
            show_delete: mode == DialogMode::Edit,
            confirm_open: state.is_delete_confirm_open(),
            draft,
            resources,
        })
    }
}
