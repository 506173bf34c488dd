//! The built-in demo dataset and dataset files.
//!
//! A dataset is the pair of collections a host hands to the controller. On
//! disk it is one JSON object: `{"resources": [...], "events": [...]}`.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use laneboard_core::{CalendarEvent, Resource, start_of_day};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Resources and events as supplied by a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub resources: Vec<Resource>,
    pub events: Vec<CalendarEvent>,
}

impl Dataset {
    /// Reads a dataset file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| CliError::Dataset {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Slot boundaries, in hours after midnight.
const MORNING: i64 = 8;
const AFTERNOON: i64 = 12;
const EVENING: i64 = 16;
const END_OF_DAY: i64 = 20;

/// Builds the demo dataset: five lanes and one event on each, spread over
/// five consecutive days starting with the day of `from`.
pub fn sample_dataset(from: DateTime<Utc>) -> Dataset {
    let day0 = start_of_day(from);
    let at = |day: i64, hour: i64| day0 + Duration::days(day) + Duration::hours(hour);

    let resources = ["A", "B", "C", "D", "E"]
        .iter()
        .enumerate()
        .map(|(i, name)| Resource::new(format!("resource-{}", i + 1), format!("Resource {name}")))
        .collect();

    let slots = [
        ("Morning Meeting", 0, MORNING, AFTERNOON, "#4285F4", "#ffffff"),
        ("Afternoon Session", 1, AFTERNOON, EVENING, "#34A853", "#ffffff"),
        ("Evening Review", 2, EVENING, END_OF_DAY, "#FBBC05", "#333333"),
        ("Morning Workshop", 3, MORNING, AFTERNOON, "#EA4335", "#ffffff"),
        ("Afternoon Training", 4, AFTERNOON, EVENING, "#8E44AD", "#ffffff"),
    ];
    let events = slots
        .into_iter()
        .enumerate()
        .map(|(i, (title, day, start, end, color, text))| {
            let n = i + 1;
            CalendarEvent::new(
                format!("event-{n}"),
                format!("resource-{n}"),
                title,
                at(day, start),
                at(day, end),
            )
            .with_color(color)
            .with_text_color(text)
        })
        .collect();

    Dataset { resources, events }
}
