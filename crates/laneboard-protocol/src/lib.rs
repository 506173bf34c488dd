//! Renderer signals, notifications and the JSON-lines codec for laneboard.
//!
//! Renderers and dialogs talk to the controller through [`Signal`] values;
//! hosts push collections as [`HostUpdate`] values and observe
//! [`Outbound`] messages. On the wire every message is one JSON object per
//! line, tagged by its `type` field:
//!
//! ```text
//! {"type":"slot_click","dateStr":"2024-01-01T10:00:00Z","resource":{"id":"resource-1"}}
//! {"type":"edit_draft","fields":{"title":"Standup"}}
//! {"type":"save"}
//! ```
//!
//! # Example
//!
//! ```rust
//! use laneboard_protocol::{Inbound, Signal, decode_line, encode_line};
//!
//! let line = encode_line(&Signal::Save).unwrap();
//! assert_eq!(line, r#"{"type":"save"}"#);
//! assert_eq!(decode_line(&line).unwrap(), Inbound::Signal(Signal::Save));
//! ```

mod codec;
mod error;
mod types;

pub use codec::{LineReader, decode_line, decode_signal, encode_line};
pub use error::{ProtocolError, ProtocolResult};
pub use types::{
    HostUpdate, Inbound, Notification, NotificationLevel, Outbound, RenderedEvent, ResourceRef,
    Signal,
};
