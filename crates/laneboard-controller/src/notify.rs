//! Operator notifications.
//!
//! The controller decides which notification to raise; how it is shown is up
//! to the [`NotificationSink`] the embedder installs. Any
//! `FnMut(&Notification)` closure is a sink.

use laneboard_protocol::{Notification, NotificationLevel};
use tracing::{info, warn};

/// Message texts raised by the controller.
pub mod messages {
    pub const EVENT_ADDED: &str = "Event added successfully";
    pub const EVENT_UPDATED: &str = "Event updated successfully";
    pub const EVENT_DELETED: &str = "Event deleted successfully";
    pub const MISSING_FIELDS: &str = "Please fill in all required fields";
}

/// Receives transient operator notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// Sink that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => info!(message = %notification.message, "Notification"),
            NotificationLevel::Error => warn!(message = %notification.message, "Notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |n: &Notification| seen.push(n.clone());
            sink.notify(&Notification::success(messages::EVENT_ADDED));
            sink.notify(&Notification::error(messages::MISSING_FIELDS));
        }

        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_error());
        assert_eq!(seen[1].message, "Please fill in all required fields");
    }

    #[test]
    fn tracing_sink_accepts_both_levels() {
        let mut sink = TracingSink;
        sink.notify(&Notification::success(messages::EVENT_DELETED));
        sink.notify(&Notification::error(messages::MISSING_FIELDS));
    }
}
