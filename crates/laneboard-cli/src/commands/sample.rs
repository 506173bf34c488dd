//! Sample dataset command.

use chrono::{DateTime, Utc};

use crate::error::CliResult;
use crate::sample::sample_dataset;

/// Print the sample dataset, anchored on the day of `from` (default: today).
pub fn sample(from: Option<DateTime<Utc>>) -> CliResult<()> {
    let dataset = sample_dataset(from.unwrap_or_else(Utc::now));
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}
