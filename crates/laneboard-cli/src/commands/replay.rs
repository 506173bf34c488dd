//! Script replay: the CLI acting as an embedding host.
//!
//! The host keeps its own copy of the events. Every callback from the
//! controller is applied to that copy, and the copy is handed back to the
//! controller as a fresh snapshot, the way a page re-renders with new props.

use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use laneboard_controller::{Controller, HostCallbacks, Outcome, TimelineConfig};
use laneboard_core::{CalendarEvent, format_instant};
use laneboard_protocol::{
    HostUpdate, Inbound, LineReader, Notification, NotificationLevel, Outbound, encode_line,
};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::sample::{Dataset, sample_dataset};

/// How a replay renders its output.
#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    /// Clock for "add event" and generated ids.
    pub now: DateTime<Utc>,
    /// Write host messages as JSON lines instead of text.
    pub json: bool,
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub signals: usize,
    pub host_updates: usize,
    /// Signals that changed nothing because they did not apply.
    pub ignored: usize,
    /// The host's copy of the events after the last line.
    pub events: Vec<CalendarEvent>,
}

/// The host side of the session.
#[derive(Default)]
struct Host {
    events: Vec<CalendarEvent>,
    dirty: bool,
    messages: Vec<Outbound>,
}

/// Replays `script` against `dataset`, writing one line per host message to
/// `out`.
pub fn run<R: BufRead, W: Write>(
    config: &TimelineConfig,
    dataset: Dataset,
    script: R,
    mut out: W,
    options: ReplayOptions,
) -> CliResult<ReplayReport> {
    let host = Rc::new(RefCell::new(Host {
        events: dataset.events.clone(),
        ..Default::default()
    }));

    let mut controller = Controller::new(
        config.clone(),
        Arc::new(dataset.resources),
        Arc::new(dataset.events),
    )
    .with_callbacks(callbacks(&host))
    .with_sink({
        let host = Rc::clone(&host);
        move |n: &Notification| {
            host.borrow_mut().messages.push(Outbound::Notified {
                notification: n.clone(),
            })
        }
    });

    let mut report = ReplayReport::default();
    let mut reader = LineReader::new(script);

    while let Some(inbound) = reader.read_message()? {
        match inbound {
            Inbound::Signal(signal) => {
                report.signals += 1;
                let outcome = controller.dispatch_at(signal, options.now);
                if matches!(outcome, Outcome::Ignored | Outcome::Stale { .. }) {
                    report.ignored += 1;
                }
            }
            Inbound::Host(update) => {
                report.host_updates += 1;
                if let HostUpdate::Events { events } = &update {
                    host.borrow_mut().events = events.clone();
                }
                controller.apply_host_update(update);
            }
        }

        let (messages, pushed) = {
            let mut host = host.borrow_mut();
            let pushed = std::mem::take(&mut host.dirty).then(|| host.events.clone());
            (std::mem::take(&mut host.messages), pushed)
        };
        for message in &messages {
            let line = if options.json {
                encode_line(message)?
            } else {
                describe(message)
            };
            writeln!(out, "{line}")?;
        }
        if let Some(events) = pushed {
            debug!(line = reader.line_no(), "Host pushes its events back");
            controller.sync_events(Arc::new(events));
        }
    }
    out.flush()?;

    report.events = host.borrow().events.clone();
    info!(
        signals = report.signals,
        host_updates = report.host_updates,
        events = report.events.len(),
        "Replay finished"
    );
    Ok(report)
}

/// The `replay` command: run a script file and print the final events.
pub fn replay(
    config: &CliConfig,
    script: &Path,
    data: Option<&Path>,
    at: Option<DateTime<Utc>>,
    json: bool,
) -> CliResult<()> {
    config.timeline.validate()?;

    let now = at.unwrap_or_else(Utc::now);
    let dataset = match data {
        Some(path) => Dataset::load(path)?,
        None => sample_dataset(now),
    };
    let file = std::fs::File::open(script)?;

    let stdout = std::io::stdout();
    let report = run(
        &config.timeline,
        dataset,
        BufReader::new(file),
        stdout.lock(),
        ReplayOptions { now, json },
    )?;

    if json {
        println!("{}", serde_json::to_string(&report.events)?);
    } else {
        println!();
        println!(
            "{} signals, {} host updates, {} ignored; {} events:",
            report.signals,
            report.host_updates,
            report.ignored,
            report.events.len()
        );
        for event in &report.events {
            println!("  {}", describe_event(event));
        }
    }
    Ok(())
}

fn callbacks(host: &Rc<RefCell<Host>>) -> HostCallbacks {
    let (add, change, delete) = (Rc::clone(host), Rc::clone(host), Rc::clone(host));

    HostCallbacks::new()
        .with_on_event_add(move |event| {
            let mut host = add.borrow_mut();
            host.events.push(event.clone());
            host.dirty = true;
            host.messages.push(Outbound::EventAdded {
                event: event.clone(),
            });
        })
        .with_on_event_change(move |event| {
            let mut host = change.borrow_mut();
            for slot in host.events.iter_mut().filter(|e| e.id == event.id) {
                *slot = event.clone();
            }
            host.dirty = true;
            host.messages.push(Outbound::EventChanged {
                event: event.clone(),
            });
        })
        .with_on_event_delete(move |id| {
            let mut host = delete.borrow_mut();
            host.events.retain(|e| e.id != id);
            host.dirty = true;
            host.messages.push(Outbound::EventDeleted {
                event_id: id.to_string(),
            });
        })
}

fn describe(message: &Outbound) -> String {
    match message {
        Outbound::EventAdded { event } => format!("added    {}", describe_event(event)),
        Outbound::EventChanged { event } => format!("changed  {}", describe_event(event)),
        Outbound::EventDeleted { event_id } => format!("deleted  {event_id}"),
        Outbound::Notified { notification } => {
            let level = match notification.level {
                NotificationLevel::Success => "ok",
                NotificationLevel::Error => "error",
            };
            format!("[{level}] {}", notification.message)
        }
    }
}

fn describe_event(event: &CalendarEvent) -> String {
    format!(
        "{} {:?} on {} {}..{}",
        event.id,
        event.title,
        event.resource_id,
        format_instant(event.start),
        format_instant(event.end)
    )
}
