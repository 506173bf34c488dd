//! Core types: resources, events, drafts, event store

pub mod draft;
pub mod error;
pub mod event;
pub mod id;
pub mod resource;
pub mod store;
pub mod time;
pub mod tracing;

pub use draft::{Draft, DraftEditor};
pub use error::{CoreError, CoreResult};
pub use event::{CalendarEvent, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR, Extensions};
pub use id::EventIdGenerator;
pub use resource::Resource;
pub use store::EventStore;
pub use time::{DEFAULT_DURATION_MINUTES, format_instant, parse_instant, start_of_day};
pub use tracing::{LogFormat, TracingConfig, TracingError, init_tracing};
