//! The authoritative in-memory collection of resources and events.
//!
//! Both collections are kept as shared immutable snapshots. Every mutation
//! builds a new `Vec` behind a new `Arc`, so a renderer holding the previous
//! snapshot can detect a change with [`Arc::ptr_eq`] and never sees a
//! collection change underneath it.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::event::CalendarEvent;
use crate::resource::Resource;

/// Owns the current resource set and event collection.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    resources: Arc<Vec<Resource>>,
    events: Arc<Vec<CalendarEvent>>,
}

impl EventStore {
    /// Returns the current resource snapshot.
    pub fn resources(&self) -> &Arc<Vec<Resource>> {
        &self.resources
    }

    /// Returns the current event snapshot.
    pub fn events(&self) -> &Arc<Vec<CalendarEvent>> {
        &self.events
    }

    /// Returns the first event with the given id.
    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Returns true if an event with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the id of the first resource, if any.
    pub fn first_resource_id(&self) -> Option<&str> {
        self.resources.first().map(|r| r.id.as_str())
    }

    /// Replaces the resource set wholesale.
    ///
    /// Events referring to resources that are no longer present are left as
    /// they are.
    pub fn replace_resources(&mut self, resources: Arc<Vec<Resource>>) {
        debug!(count = resources.len(), "Replacing resources");
        self.resources = resources;
    }

    /// Replaces the event collection wholesale.
    pub fn replace_events(&mut self, events: Arc<Vec<CalendarEvent>>) {
        debug!(count = events.len(), "Replacing events");
        self.events = events;
    }

    /// Appends an event.
    ///
    /// No duplicate check is made: inserting an id that already exists leaves
    /// two events with that id.
    pub fn insert(&mut self, event: CalendarEvent) {
        debug!(id = %event.id, "Inserting event");
        let mut next = Vec::with_capacity(self.events.len() + 1);
        next.extend(self.events.iter().cloned());
        next.push(event);
        self.events = Arc::new(next);
    }

    /// Replaces every event whose id is `id` with `event`.
    ///
    /// Returns false, leaving the snapshot untouched, when nothing matches.
    pub fn update_by_id(&mut self, id: &str, event: CalendarEvent) -> bool {
        if !self.contains(id) {
            trace!(id = %id, "Update skipped, no such event");
            return false;
        }

        debug!(id = %id, "Updating event");
        let next: Vec<_> = self
            .events
            .iter()
            .map(|e| if e.id == id { event.clone() } else { e.clone() })
            .collect();
        self.events = Arc::new(next);
        true
    }

    /// Removes every event whose id is `id`.
    ///
    /// Returns false, leaving the snapshot untouched, when nothing matches.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            trace!(id = %id, "Remove skipped, no such event");
            return false;
        }

        debug!(id = %id, "Removing event");
        let next: Vec<_> = self.events.iter().filter(|e| e.id != id).cloned().collect();
        self.events = Arc::new(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn event(id: &str, resource: &str, title: &str) -> CalendarEvent {
        CalendarEvent::new(
            id,
            resource,
            title,
            utc(2024, 1, 1, 8, 0, 0),
            utc(2024, 1, 1, 12, 0, 0),
        )
    }

    fn store() -> EventStore {
        let mut store = EventStore::default();
        store.replace_resources(Arc::new(vec![
            Resource::new("resource-1", "Resource A"),
            Resource::new("resource-2", "Resource B"),
        ]));
        store.replace_events(Arc::new(vec![
            event("event-1", "resource-1", "Morning Meeting"),
            event("event-2", "resource-2", "Afternoon Session"),
        ]));
        store
    }

    #[test]
    fn initial_events_read_back_unchanged() {
        let initial = Arc::new(vec![
            event("event-1", "resource-1", "Morning Meeting"),
            event("event-2", "resource-2", "Afternoon Session"),
        ]);
        let mut store = EventStore::default();
        store.replace_events(Arc::clone(&initial));
        assert_eq!(store.events().as_slice(), initial.as_slice());
    }

    #[test]
    fn insert_appends_into_new_snapshot() {
        let mut store = store();
        let before = Arc::clone(store.events());

        store.insert(event("event-3", "resource-1", "Evening Review"));

        assert!(!Arc::ptr_eq(&before, store.events()));
        assert_eq!(before.len(), 2);
        assert_eq!(store.events().len(), 3);
        assert_eq!(store.events()[2].id, "event-3");
    }

    #[test]
    fn insert_allows_duplicate_ids() {
        let mut store = store();
        store.insert(event("event-1", "resource-2", "Shadow"));

        let matching = store.events().iter().filter(|e| e.id == "event-1").count();
        assert_eq!(matching, 2);
    }

    #[test]
    fn update_replaces_matching_event() {
        let mut store = store();
        let updated = event("event-1", "resource-2", "Moved Meeting");

        assert!(store.update_by_id("event-1", updated.clone()));
        assert_eq!(store.get("event-1"), Some(&updated));
        assert_eq!(store.events()[1].id, "event-2");
    }

    #[test]
    fn update_replaces_every_duplicate() {
        let mut store = store();
        store.insert(event("event-1", "resource-2", "Shadow"));
        let updated = event("event-1", "resource-1", "Unified");

        store.update_by_id("event-1", updated.clone());

        let titles: Vec<_> = store
            .events()
            .iter()
            .filter(|e| e.id == "event-1")
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Unified", "Unified"]);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut store = store();
        let before = Arc::clone(store.events());

        assert!(!store.update_by_id("event-404", event("event-404", "resource-1", "Ghost")));

        assert!(Arc::ptr_eq(&before, store.events()));
        assert_eq!(store.events().as_slice(), before.as_slice());
    }

    #[test]
    fn remove_drops_event() {
        let mut store = store();
        assert!(store.remove_by_id("event-2"));
        assert!(!store.contains("event-2"));
        assert_eq!(store.events().len(), 1);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut store = store();
        let before = Arc::clone(store.events());

        assert!(!store.remove_by_id("event-404"));

        assert!(Arc::ptr_eq(&before, store.events()));
    }

    #[test]
    fn replacing_resources_leaves_dangling_events() {
        let mut store = store();
        store.replace_resources(Arc::new(vec![Resource::new("resource-9", "Resource Z")]));

        assert_eq!(store.first_resource_id(), Some("resource-9"));
        assert_eq!(store.get("event-1").map(|e| e.resource_id.as_str()), Some("resource-1"));
    }

    #[test]
    fn first_resource_of_empty_set() {
        let store = EventStore::default();
        assert_eq!(store.first_resource_id(), None);
        assert!(store.events().is_empty());
    }
}
