//! The `week` command: bucket events onto a day window and lay out
//! overlap columns for each day.

use anyhow::Result;
use chrono::Utc;
use daygrid_core::day::window_from_args;
use daygrid_core::event::events_from_json;
use daygrid_core::{bucket_events, layout_overlaps};
use serde::Serialize;

use crate::render::render_week;
use crate::utils::{read_input, resolve_timezone};

/// JSON output shape for one day cell.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayOut {
    day: String,
    all_day: Vec<String>,
    timed: Vec<TimedOut>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimedOut {
    id: String,
    title: String,
    column: usize,
    total_columns: usize,
}

pub fn run(
    file: Option<&str>,
    tz: Option<&str>,
    start: Option<&str>,
    days: Option<usize>,
    aligned: bool,
    json: bool,
) -> Result<()> {
    let tz = resolve_timezone(tz)?;
    let events = events_from_json(&read_input(file)?)?;

    let today = Utc::now().with_timezone(&tz).date_naive();
    let window = window_from_args(start, days, aligned, today)?;
    let buckets = bucket_events(&events, &window, tz);

    if json {
        let out: Vec<DayOut> = buckets
            .iter()
            .map(|bucket| {
                let columns = layout_overlaps(&bucket.events);
                DayOut {
                    day: bucket.key(),
                    all_day: bucket
                        .events
                        .iter()
                        .filter(|e| e.is_all_day)
                        .map(|e| e.id.clone())
                        .collect(),
                    timed: bucket
                        .events
                        .iter()
                        .filter(|e| !e.is_all_day)
                        .map(|e| TimedOut {
                            id: e.id.clone(),
                            title: e.title.clone(),
                            column: columns[&e.id].column,
                            total_columns: columns[&e.id].total_columns,
                        })
                        .collect(),
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render_week(&buckets, tz));
    }

    Ok(())
}
