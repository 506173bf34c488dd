//! Bridge between the controller and the embedding host application.
//!
//! Outbound, the bridge forwards every committed mutation to the host's
//! optional callbacks. Inbound, it takes the collections the host supplies and
//! replaces the store's copy whenever the host hands over a different
//! snapshot. Change detection is by identity: a new `Arc` always replaces,
//! even with equal contents; the same `Arc` again never does.

use std::fmt;
use std::sync::Arc;

use laneboard_core::{CalendarEvent, EventStore, Resource};
use tracing::{debug, trace};

/// Callback receiving a committed event record.
pub type EventCallback = Box<dyn FnMut(&CalendarEvent)>;

/// Callback receiving the id of a deleted event.
pub type DeleteCallback = Box<dyn FnMut(&str)>;

/// The host's optional change callbacks.
#[derive(Default)]
pub struct HostCallbacks {
    on_event_add: Option<EventCallback>,
    on_event_change: Option<EventCallback>,
    on_event_delete: Option<DeleteCallback>,
}

impl fmt::Debug for HostCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostCallbacks")
            .field("on_event_add", &self.on_event_add.is_some())
            .field("on_event_change", &self.on_event_change.is_some())
            .field("on_event_delete", &self.on_event_delete.is_some())
            .finish()
    }
}

impl HostCallbacks {
    /// Creates an empty set of callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the callback for added events.
    pub fn with_on_event_add(mut self, callback: impl FnMut(&CalendarEvent) + 'static) -> Self {
        self.on_event_add = Some(Box::new(callback));
        self
    }

    /// Builder: set the callback for changed events.
    pub fn with_on_event_change(
        mut self,
        callback: impl FnMut(&CalendarEvent) + 'static,
    ) -> Self {
        self.on_event_change = Some(Box::new(callback));
        self
    }

    /// Builder: set the callback for deleted events.
    pub fn with_on_event_delete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_event_delete = Some(Box::new(callback));
        self
    }
}

/// Syncs host-supplied collections into the store and reports changes back.
#[derive(Debug, Default)]
pub struct HostBridge {
    callbacks: HostCallbacks,
    last_resources: Option<Arc<Vec<Resource>>>,
    last_events: Option<Arc<Vec<CalendarEvent>>>,
}

impl HostBridge {
    /// Creates a bridge with the given callbacks.
    pub fn new(callbacks: HostCallbacks) -> Self {
        Self {
            callbacks,
            last_resources: None,
            last_events: None,
        }
    }

    /// Swaps the callbacks, keeping the remembered snapshots.
    pub fn set_callbacks(&mut self, callbacks: HostCallbacks) {
        self.callbacks = callbacks;
    }

    /// Replaces the store's resources if `resources` is a snapshot the host
    /// has not supplied before. Returns true if a replace happened.
    pub fn sync_resources(&mut self, store: &mut EventStore, resources: Arc<Vec<Resource>>) -> bool {
        if is_same(self.last_resources.as_ref(), &resources) {
            trace!("Host resources unchanged");
            return false;
        }
        debug!(count = resources.len(), "Host supplied resources");
        store.replace_resources(Arc::clone(&resources));
        self.last_resources = Some(resources);
        true
    }

    /// Replaces the store's events if `events` is a snapshot the host has not
    /// supplied before. Returns true if a replace happened.
    ///
    /// An open draft is left alone, even if the event it edits is gone.
    pub fn sync_events(&mut self, store: &mut EventStore, events: Arc<Vec<CalendarEvent>>) -> bool {
        if is_same(self.last_events.as_ref(), &events) {
            trace!("Host events unchanged");
            return false;
        }
        debug!(count = events.len(), "Host supplied events");
        store.replace_events(Arc::clone(&events));
        self.last_events = Some(events);
        true
    }

    pub(crate) fn event_added(&mut self, event: &CalendarEvent) {
        if let Some(callback) = self.callbacks.on_event_add.as_mut() {
            callback(event);
        }
    }

    pub(crate) fn event_changed(&mut self, event: &CalendarEvent) {
        if let Some(callback) = self.callbacks.on_event_change.as_mut() {
            callback(event);
        }
    }

    pub(crate) fn event_deleted(&mut self, id: &str) {
        if let Some(callback) = self.callbacks.on_event_delete.as_mut() {
            callback(id);
        }
    }
}

fn is_same<T>(last: Option<&Arc<T>>, next: &Arc<T>) -> bool {
    last.is_some_and(|last| Arc::ptr_eq(last, next))
}
