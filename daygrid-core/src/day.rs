//! Day windows for the week grid.
//!
//! The engine buckets into whatever window it is given; these helpers build
//! the two windows the dashboard uses (rolling N days, calendar-aligned
//! week) and parse CLI-style window arguments.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{DayGridError, DayGridResult};

/// `count` consecutive days starting at `start`.
pub fn rolling_window(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| start + Duration::days(i as i64))
        .collect()
}

/// The 7 days of the week containing `anchor`, beginning on `week_start`.
pub fn week_aligned_window(anchor: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let offset = (7 + i64::from(anchor.weekday().num_days_from_monday())
        - i64::from(week_start.num_days_from_monday()))
        % 7;
    rolling_window(anchor - Duration::days(offset), 7)
}

/// Build a day window from CLI-style arguments.
/// - `start`: anchor date as `YYYY-MM-DD`, defaulting to `today`
/// - `days`: window length for rolling windows, defaulting to 7
/// - `aligned`: Monday-aligned calendar week instead of a rolling window
pub fn window_from_args(
    start: Option<&str>,
    days: Option<usize>,
    aligned: bool,
    today: NaiveDate,
) -> DayGridResult<Vec<NaiveDate>> {
    let anchor = match start {
        Some(s) => parse_day(s)?,
        None => today,
    };

    if aligned {
        Ok(week_aligned_window(anchor, Weekday::Mon))
    } else {
        Ok(rolling_window(anchor, days.unwrap_or(7)))
    }
}

/// Parse a `YYYY-MM-DD` day key.
pub fn parse_day(s: &str) -> DayGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        DayGridError::InvalidDate(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}
