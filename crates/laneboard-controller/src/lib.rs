//! Interaction controller, host bridge, notifications.
//!
//! This crate drives a resource timeline's editing session:
//! - the dialog state machine fed by renderer and dialog signals
//! - commit of drafts into the event store
//! - host callbacks for every committed mutation
//! - operator notifications through a pluggable sink
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::{TimeZone, Utc};
//! use laneboard_controller::{Controller, HostCallbacks, Outcome, TimelineConfig};
//! use laneboard_core::Resource;
//! use laneboard_protocol::Signal;
//!
//! let resources = Arc::new(vec![Resource::new("resource-1", "Resource A")]);
//! let mut controller = Controller::new(TimelineConfig::default(), resources, Arc::new(Vec::new()))
//!     .with_callbacks(HostCallbacks::new().with_on_event_add(|e| println!("added {}", e.id)));
//!
//! let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
//! controller.dispatch(Signal::slot_click(at, "resource-1"));
//! controller.dispatch(Signal::set_title("Standup"));
//! assert!(matches!(controller.dispatch(Signal::Save), Outcome::Added(_)));
//! assert_eq!(controller.events().len(), 1);
//! ```

mod config;
mod controller;
mod dialog;
mod error;
mod host;
mod notify;


pub use config::{MAX_DURATION_MINUTES, TimelineConfig};
pub use controller::{Controller, Outcome};
pub use dialog::{DialogMode, DialogState, DialogView};
pub use error::{ControllerError, ControllerResult};
pub use host::{DeleteCallback, EventCallback, HostBridge, HostCallbacks};
pub use notify::{NotificationSink, TracingSink, messages};
