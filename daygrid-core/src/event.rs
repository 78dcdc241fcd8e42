//! Dashboard-API event types.
//!
//! Events arrive from the REST API as a JSON array; this module defines the
//! wire shape and the local-time interpretation the layout algorithms use.
//! The engine never fetches or mutates events, it only reads them.

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};

/// A calendar event as delivered by the dashboard API.
///
/// `calendar_id`, `title` and `location` are passthrough display fields;
/// the layout algorithms only look at the times and the all-day flag.
/// Timestamps keep the offset they were delivered with: all-day dates are
/// read off the written timestamp, so normalizing to UTC would corrupt
/// events sent with a nonzero offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    #[serde(default)]
    pub is_all_day: bool,
}

impl Event {
    /// The event's `[start, end)` span as local wall-clock time in `tz`.
    ///
    /// All-day events encode a calendar date as a midnight timestamp.
    /// Their span is the date component of that timestamp as written,
    /// ignoring its embedded offset, and is NOT converted into `tz` —
    /// converting naively would shift the visible day by one for viewers
    /// offset from the event's source zone.
    pub fn effective_span(&self, tz: Tz) -> (NaiveDateTime, NaiveDateTime) {
        if self.is_all_day {
            (
                self.start_time.naive_local().date().and_time(NaiveTime::MIN),
                self.end_time.naive_local().date().and_time(NaiveTime::MIN),
            )
        } else {
            (
                self.start_time.with_timezone(&tz).naive_local(),
                self.end_time.with_timezone(&tz).naive_local(),
            )
        }
    }
}

/// Deserialize a JSON array of API events.
pub fn events_from_json(json: &str) -> DayGridResult<Vec<Event>> {
    serde_json::from_str(json).map_err(|e| DayGridError::Serialization(e.to_string()))
}

/// Parse an IANA timezone name (e.g. "Europe/Stockholm").
pub fn parse_timezone(name: &str) -> DayGridResult<Tz> {
    name.parse()
        .map_err(|_| DayGridError::UnknownTimezone(name.to_string()))
}
