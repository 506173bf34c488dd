//! The interaction state machine.
//!
//! [`Controller`] turns renderer and dialog [`Signal`]s into store mutations,
//! host callbacks and operator notifications. It exclusively owns the event
//! store, the draft editor and the dialog state. Every signal runs to
//! completion inside [`Controller::dispatch`]; there is no error path, only an
//! [`Outcome`] describing what happened.
//!
//! | Signal | Accepted in | Effect |
//! |---|---|---|
//! | `SlotClick`, `AddEvent` | any state | new draft, event dialog in create mode |
//! | `EventClick` | any state | draft copied from the event, edit mode |
//! | `EventDrop`, `EventResize` | any state | event moved in place, dialogs untouched |
//! | `EditDraft` | event dialog | fields merged into the draft |
//! | `Save` | event dialog | commit or reject |
//! | `RequestDelete` | event dialog, edit mode | delete confirmation opens |
//! | `ConfirmDelete` | delete confirmation | event removed, dialogs close |
//! | `Cancel` | any dialog | top dialog closes |
//!
//! Signals arriving outside the states listed are ignored.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use laneboard_core::{CalendarEvent, Draft, DraftEditor, EventIdGenerator, EventStore, Resource};
use laneboard_protocol::{HostUpdate, Notification, RenderedEvent, Signal};
use tracing::{debug, info, trace, warn};

use crate::config::TimelineConfig;
use crate::dialog::{DialogMode, DialogState, DialogView};
use crate::host::{HostBridge, HostCallbacks};
use crate::notify::{NotificationSink, TracingSink, messages};

/// What a dispatched signal did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new draft was staged and the event dialog opened.
    DraftOpened(DialogMode),
    /// Dialog field edits were merged into the draft.
    DraftEdited,
    /// A create-mode draft was committed as a new event.
    Added(CalendarEvent),
    /// An edit-mode draft was committed. `applied` is false when the edited
    /// event was no longer in the store, which leaves the store unchanged.
    Updated { event: CalendarEvent, applied: bool },
    /// An event was dragged or resized.
    Moved(CalendarEvent),
    /// A confirmed delete. `applied` is false when the event was already gone.
    Deleted { id: String, applied: bool },
    /// The draft lacked a title or resource; nothing was committed.
    Rejected,
    /// The delete confirmation opened.
    DeleteConfirmOpened,
    /// The top dialog closed without committing anything.
    Dismissed,
    /// A drag or resize referred to an event not in the store.
    Stale { id: String },
    /// The signal does not apply in the current state.
    Ignored,
}

/// Owns the store, the draft and the dialogs, and applies signals to them.
pub struct Controller {
    config: TimelineConfig,
    store: EventStore,
    editor: DraftEditor,
    dialog: DialogState,
    ids: EventIdGenerator,
    host: HostBridge,
    sink: Box<dyn NotificationSink>,
}

impl Controller {
    /// Creates a controller over the host's initial collections.
    ///
    /// Notifications go to the log until a sink is installed with
    /// [`Controller::with_sink`].
    pub fn new(
        config: TimelineConfig,
        resources: Arc<Vec<Resource>>,
        events: Arc<Vec<CalendarEvent>>,
    ) -> Self {
        let mut store = EventStore::default();
        let mut host = HostBridge::default();
        host.sync_resources(&mut store, resources);
        host.sync_events(&mut store, events);

        Self {
            ids: EventIdGenerator::new(config.id_prefix.clone()),
            config,
            store,
            editor: DraftEditor::new(),
            dialog: DialogState::Idle,
            host,
            sink: Box::new(TracingSink),
        }
    }

    /// Builder: install the host callbacks.
    pub fn with_callbacks(mut self, callbacks: HostCallbacks) -> Self {
        self.host.set_callbacks(callbacks);
        self
    }

    /// Builder: install the notification sink.
    pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Returns the current event snapshot, as the renderer should display it.
    pub fn events(&self) -> &Arc<Vec<CalendarEvent>> {
        self.store.events()
    }

    /// Returns the current resource snapshot.
    pub fn resources(&self) -> &Arc<Vec<Resource>> {
        self.store.resources()
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.editor.current()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    /// Returns what the event dialog should show, if it is open.
    pub fn dialog_view(&self) -> Option<DialogView<'_>> {
        DialogView::new(self.dialog, self.editor.current(), self.store.resources())
    }

    /// Takes a resource set from the host. See [`HostBridge::sync_resources`].
    pub fn sync_resources(&mut self, resources: Arc<Vec<Resource>>) -> bool {
        self.host.sync_resources(&mut self.store, resources)
    }

    /// Takes an event collection from the host. See [`HostBridge::sync_events`].
    pub fn sync_events(&mut self, events: Arc<Vec<CalendarEvent>>) -> bool {
        self.host.sync_events(&mut self.store, events)
    }

    /// Applies a decoded host update.
    pub fn apply_host_update(&mut self, update: HostUpdate) -> bool {
        match update {
            HostUpdate::Resources { resources } => self.sync_resources(Arc::new(resources)),
            HostUpdate::Events { events } => self.sync_events(Arc::new(events)),
        }
    }

    /// Handles a signal at the current wall-clock time.
    pub fn dispatch(&mut self, signal: Signal) -> Outcome {
        self.dispatch_at(signal, Utc::now())
    }

    /// Handles a signal, using `now` for the "Add event" default start and for
    /// generated ids.
    #[tracing::instrument(skip_all, fields(signal = signal.kind()))]
    pub fn dispatch_at(&mut self, signal: Signal, now: DateTime<Utc>) -> Outcome {
        let outcome = match signal {
            Signal::SlotClick { date, resource } => {
                let resource_id = resource.map(|r| r.id).unwrap_or_default();
                self.open_create(resource_id, date)
            }
            Signal::AddEvent => {
                let resource_id = self.store.first_resource_id().unwrap_or_default().to_string();
                self.open_create(resource_id, now)
            }
            Signal::EventClick { event } => self.open_edit(event),
            Signal::EventDrop { event } | Signal::EventResize { event } => self.move_event(event),
            Signal::EditDraft { fields } => self.edit_draft(fields),
            Signal::Save => self.save(now),
            Signal::RequestDelete => self.request_delete(),
            Signal::ConfirmDelete => self.confirm_delete(),
            Signal::Cancel => self.cancel(),
        };

        debug!(?outcome, dialog = ?self.dialog, "Signal handled");
        outcome
    }

    fn open_create(&mut self, resource_id: String, start: DateTime<Utc>) -> Outcome {
        let draft = Draft::blank(
            resource_id,
            start,
            self.config.default_end(start),
            self.config.default_background_color.clone(),
        );
        self.editor.begin(draft, false);
        self.dialog = DialogState::EventDialog(DialogMode::Create);
        Outcome::DraftOpened(DialogMode::Create)
    }

    fn open_edit(&mut self, event: RenderedEvent) -> Outcome {
        let draft = match self.store.get(&event.id) {
            Some(stored) => Draft::from(stored),
            None => Draft {
                id: Some(event.id.clone()),
                resource_id: Some(event.resource_id().to_string()),
                title: Some(event.title),
                start: Some(event.start),
                end: Some(event.end),
                background_color: event.background_color,
                ..Default::default()
            },
        };
        self.editor.begin(draft, true);
        self.dialog = DialogState::EventDialog(DialogMode::Edit);
        Outcome::DraftOpened(DialogMode::Edit)
    }

    fn move_event(&mut self, event: RenderedEvent) -> Outcome {
        let Some(current) = self.store.get(&event.id) else {
            debug!(id = %event.id, "Moved event is not in the store");
            return Outcome::Stale { id: event.id };
        };

        let resource_id = match event.resource_id() {
            "" => current.resource_id.clone(),
            id => id.to_string(),
        };
        let mut updated = CalendarEvent {
            resource_id,
            start: event.start,
            end: event.end,
            background_color: event.background_color.or_else(|| current.background_color.clone()),
            ..current.clone()
        };
        updated.normalize_border();

        self.store.update_by_id(&updated.id, updated.clone());
        info!(id = %updated.id, resource_id = %updated.resource_id, "Event moved");
        self.host.event_changed(&updated);
        self.notify(Notification::success(messages::EVENT_UPDATED));
        Outcome::Moved(updated)
    }

    fn edit_draft(&mut self, mut fields: Draft) -> Outcome {
        if !matches!(self.dialog, DialogState::EventDialog(_)) {
            trace!("Draft edit outside the event dialog");
            return Outcome::Ignored;
        }
        // The id is fixed when the draft opens.
        if fields.id.take().is_some() {
            debug!("Dropping id from draft edit");
        }
        if fields.background_color.is_some() && fields.border_color.is_none() {
            fields.border_color = fields.background_color.clone();
        }
        self.editor.update(fields);
        Outcome::DraftEdited
    }

    fn save(&mut self, now: DateTime<Utc>) -> Outcome {
        if !matches!(self.dialog, DialogState::EventDialog(_)) {
            trace!("Save outside the event dialog");
            return Outcome::Ignored;
        }

        let committable = self.editor.current().filter(|d| d.is_committable()).cloned();
        let Some(draft) = committable else {
            warn!("Draft is missing a title or resource");
            self.notify(Notification::error(messages::MISSING_FIELDS));
            return Outcome::Rejected;
        };

        let editing = self.editor.is_editing();
        let event = self.commit_record(draft, now);

        let outcome = if editing {
            let applied = self.store.update_by_id(&event.id, event.clone());
            if applied {
                info!(id = %event.id, "Event updated");
                self.host.event_changed(&event);
            } else {
                debug!(id = %event.id, "Edited event is no longer in the store");
            }
            self.notify(Notification::success(messages::EVENT_UPDATED));
            Outcome::Updated { event, applied }
        } else {
            self.store.insert(event.clone());
            info!(id = %event.id, "Event added");
            self.host.event_added(&event);
            self.notify(Notification::success(messages::EVENT_ADDED));
            Outcome::Added(event)
        };

        self.editor.clear();
        self.dialog = DialogState::Idle;
        outcome
    }

    /// Builds the canonical record for a committable draft, filling defaults.
    fn commit_record(&mut self, draft: Draft, now: DateTime<Utc>) -> CalendarEvent {
        let id = match draft.id {
            Some(id) if !id.is_empty() => id,
            _ => self.fresh_id(now),
        };
        let start = draft.start.unwrap_or(now);
        let end = draft.end.unwrap_or_else(|| self.config.default_end(start));
        let background = draft
            .background_color
            .unwrap_or_else(|| self.config.default_background_color.clone());

        CalendarEvent {
            id,
            resource_id: draft.resource_id.unwrap_or_default(),
            title: draft.title.unwrap_or_default(),
            start,
            end,
            border_color: Some(background.clone()),
            background_color: Some(background),
            text_color: Some(self.config.commit_text_color.clone()),
            extensions: draft.extensions,
        }
    }

    /// Next generated id that no stored event already uses.
    fn fresh_id(&mut self, now: DateTime<Utc>) -> String {
        loop {
            let id = self.ids.next_id(now);
            if !self.store.contains(&id) {
                return id;
            }
            debug!(id = %id, "Generated id is taken, skipping");
        }
    }

    fn request_delete(&mut self) -> Outcome {
        if self.dialog != DialogState::EventDialog(DialogMode::Edit) {
            trace!("Delete requested outside the edit dialog");
            return Outcome::Ignored;
        }
        self.dialog = DialogState::DeleteConfirm;
        Outcome::DeleteConfirmOpened
    }

    fn confirm_delete(&mut self) -> Outcome {
        if self.dialog != DialogState::DeleteConfirm {
            trace!("Delete confirmed without the confirmation dialog");
            return Outcome::Ignored;
        }

        let outcome = match self.editor.draft_id().map(str::to_string) {
            Some(id) => {
                let applied = self.store.remove_by_id(&id);
                if applied {
                    info!(id = %id, "Event deleted");
                    self.host.event_deleted(&id);
                } else {
                    debug!(id = %id, "Deleted event is no longer in the store");
                }
                self.notify(Notification::success(messages::EVENT_DELETED));
                Outcome::Deleted { id, applied }
            }
            None => Outcome::Dismissed,
        };

        self.editor.clear();
        self.dialog = DialogState::Idle;
        outcome
    }

    fn cancel(&mut self) -> Outcome {
        match self.dialog {
            DialogState::Idle => Outcome::Ignored,
            DialogState::DeleteConfirm => {
                self.dialog = DialogState::EventDialog(DialogMode::Edit);
                Outcome::Dismissed
            }
            DialogState::EventDialog(_) => {
                self.editor.clear();
                self.dialog = DialogState::Idle;
                Outcome::Dismissed
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.sink.notify(&notification);
    }
}
