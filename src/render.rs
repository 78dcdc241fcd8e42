//! Terminal rendering for daygrid output.
//!
//! Turns day buckets and column assignments into a colored text grid
//! using owo_colors.

use chrono_tz::Tz;
use daygrid_core::{DayBucket, layout_overlaps};
use owo_colors::OwoColorize;

/// Render a full day window, one block per day.
pub fn render_week(buckets: &[DayBucket], tz: Tz) -> String {
    buckets
        .iter()
        .map(|bucket| render_day(bucket, tz))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_day(bucket: &DayBucket, tz: Tz) -> String {
    let mut lines = Vec::new();

    let header = format!("{} {}", bucket.key(), bucket.date.format("%A"));
    lines.push(header.bold().to_string());

    if bucket.events.is_empty() {
        lines.push(format!("   {}", "No events".dimmed()));
        return lines.join("\n");
    }

    let columns = layout_overlaps(&bucket.events);

    for event in &bucket.events {
        if event.is_all_day {
            // All-day banners sort first within the bucket
            lines.push(format!("   {} {}", "■".green(), event.title.green()));
            continue;
        }

        let start = event.start_time.with_timezone(&tz).format("%H:%M");
        let end = event.end_time.with_timezone(&tz).format("%H:%M");
        let slot = columns[&event.id];

        let mut line = format!(
            "   {} {}",
            format!("{}-{}", start, end).dimmed(),
            event.title
        );
        if slot.total_columns > 1 {
            let marker = format!("[{}/{}]", slot.column + 1, slot.total_columns);
            line.push_str(&format!(" {}", marker.yellow()));
        }
        if let Some(location) = &event.location {
            line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
        }
        lines.push(line);
    }

    lines.join("\n")
}
