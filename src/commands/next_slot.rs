//! The `next-slot` command: default start/end times for a new-event form.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use daygrid_core::rounding::{DEFAULT_SLOT_MINUTES, round_to_next_slot};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::utils::resolve_timezone;

pub fn run(duration: Option<i64>, tz: Option<&str>, now: Option<&str>, json: bool) -> Result<()> {
    let tz = resolve_timezone(tz)?;

    let now = match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid RFC3339 timestamp '{}'", s))?
            .with_timezone(&tz),
        None => Utc::now().with_timezone(&tz),
    };

    let slot = round_to_next_slot(now, duration.unwrap_or(DEFAULT_SLOT_MINUTES));

    if json {
        let out = json!({
            "startTime": slot.start_time.to_rfc3339(),
            "endTime": slot.end_time.to_rfc3339(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{} {}",
            "Start".dimmed(),
            slot.start_time.format("%Y-%m-%d %H:%M %Z")
        );
        println!(
            "{}   {}",
            "End".dimmed(),
            slot.end_time.format("%Y-%m-%d %H:%M %Z")
        );
    }

    Ok(())
}
