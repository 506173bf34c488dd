//! JSON-lines encoding of signals and host messages.
//!
//! Each message is a single JSON object on its own line. When reading a
//! stream, blank lines and lines starting with `#` are skipped so recorded
//! scripts can be annotated.

use std::io::BufRead;

use serde::Serialize;

use crate::error::{ProtocolError, ProtocolResult};
use crate::types::{HostUpdate, Inbound, Signal};

/// Tag prefix that marks host data rather than a renderer signal.
const HOST_TAG_PREFIX: &str = "host_";

/// Encodes a message as a single JSON line (without the trailing newline).
pub fn encode_line<T: Serialize>(message: &T) -> ProtocolResult<String> {
    Ok(serde_json::to_string(message)?)
}

/// Decodes a renderer or dialog signal.
pub fn decode_signal(line: &str) -> ProtocolResult<Signal> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ProtocolError::EmptyMessage);
    }
    Ok(serde_json::from_str(line)?)
}

/// Decodes either a signal or a host update, dispatching on the `type` tag.
pub fn decode_line(line: &str) -> ProtocolResult<Inbound> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ProtocolError::EmptyMessage);
    }

    let value: serde_json::Value = serde_json::from_str(line)?;
    let is_host = match value.get("type").and_then(|t| t.as_str()) {
        Some(tag) => tag.starts_with(HOST_TAG_PREFIX),
        None => return Err(ProtocolError::MissingType),
    };

    if is_host {
        Ok(Inbound::Host(serde_json::from_value::<HostUpdate>(value)?))
    } else {
        Ok(Inbound::Signal(serde_json::from_value::<Signal>(value)?))
    }
}

/// Reads inbound messages from a line-oriented stream.
pub struct LineReader<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a new LineReader wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    /// Reads the next message, skipping blank and comment lines.
    ///
    /// Returns `Ok(None)` at end of stream. Decode errors carry the 1-based
    /// line number they occurred on.
    pub fn read_message(&mut self) -> ProtocolResult<Option<Inbound>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            return decode_line(line)
                .map(Some)
                .map_err(|e| ProtocolError::at_line(self.line_no, e));
        }
    }

    /// Returns the number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = ProtocolResult<Inbound>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_message().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Notification, Outbound};
    use std::io::Cursor;

    #[test]
    fn encode_unit_signal() {
        assert_eq!(encode_line(&Signal::Cancel).unwrap(), r#"{"type":"cancel"}"#);
    }

    #[test]
    fn decode_signal_line() {
        let signal = decode_signal(r#"  {"type":"add_event"}  "#).unwrap();
        assert_eq!(signal, Signal::AddEvent);
    }

    #[test]
    fn decode_empty_line() {
        assert!(matches!(decode_signal("   "), Err(ProtocolError::EmptyMessage)));
        assert!(matches!(decode_line(""), Err(ProtocolError::EmptyMessage)));
    }

    #[test]
    fn decode_line_routes_host_updates() {
        let inbound = decode_line(r#"{"type":"host_events","events":[]}"#).unwrap();
        assert_eq!(inbound, Inbound::Host(HostUpdate::Events { events: vec![] }));

        let inbound = decode_line(r#"{"type":"save"}"#).unwrap();
        assert_eq!(inbound, Inbound::Signal(Signal::Save));
    }

    #[test]
    fn decode_line_without_tag() {
        assert!(matches!(
            decode_line(r#"{"dateStr":"2024-01-01T10:00:00Z"}"#),
            Err(ProtocolError::MissingType)
        ));
    }

    #[test]
    fn decode_line_unknown_tag() {
        assert!(matches!(
            decode_line(r#"{"type":"teleport"}"#),
            Err(ProtocolError::Serialization(_))
        ));
    }

    #[test]
    fn reader_skips_blank_and_comment_lines() {
        let script = "# create a standup\n\n{\"type\":\"add_event\"}\n  \n{\"type\":\"save\"}\n";
        let reader = LineReader::new(Cursor::new(script));
        let messages: Vec<_> = reader.collect::<ProtocolResult<_>>().unwrap();

        assert_eq!(
            messages,
            vec![Inbound::Signal(Signal::AddEvent), Inbound::Signal(Signal::Save)]
        );
    }

    #[test]
    fn reader_reports_line_of_bad_instant() {
        let script = "{\"type\":\"add_event\"}\n{\"type\":\"slot_click\",\"dateStr\":\"soon\"}\n";
        let mut reader = LineReader::new(Cursor::new(script));

        assert!(reader.read_message().unwrap().is_some());
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, ProtocolError::Line { line: 2, .. }));
        assert_eq!(reader.line_no(), 2);
    }

    #[test]
    fn reader_empty_stream() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert!(reader.read_message().unwrap().is_none());
    }

    #[test]
    fn encoded_lines_read_back() {
        let script = [Signal::AddEvent, Signal::set_title("Standup")]
            .iter()
            .map(|s| encode_line(s).unwrap() + "\n")
            .collect::<String>();

        let messages: Vec<_> = LineReader::new(Cursor::new(script))
            .collect::<ProtocolResult<_>>()
            .unwrap();
        assert_eq!(
            messages,
            vec![
                Inbound::Signal(Signal::AddEvent),
                Inbound::Signal(Signal::set_title("Standup")),
            ]
        );
    }

    #[test]
    fn encode_notification() {
        let line = encode_line(&Outbound::Notified {
            notification: Notification::success("Event added successfully"),
        })
        .unwrap();
        assert_eq!(
            line,
            "{\"type\":\"notified\",\"notification\":{\"level\":\"success\",\"message\":\"Event added successfully\"}}"
        );
    }
}
