//! Default start/end times for new-event forms.
//!
//! Snaps "now" up to the next half-hour boundary. The caller supplies the
//! clock, keeping the function deterministic and testable.

use chrono::{DateTime, Duration, TimeZone, Timelike};

/// Slot duration used by the new-event form when none is given.
pub const DEFAULT_SLOT_MINUTES: i64 = 60;

/// A snapped `(start, end)` pair, valid only at the moment of computation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedSlot<Z: TimeZone> {
    pub start_time: DateTime<Z>,
    pub end_time: DateTime<Z>,
}

/// Snap `now` up to the next `:00`/`:30` boundary and span `duration_minutes`.
///
/// Minute 0 keeps the hour, minutes 1..=30 round up to `:30` (so `:30`
/// exactly stays put), and anything later rolls to the next hour. The
/// rollover is plain duration arithmetic, so it cascades through day,
/// month and year boundaries. Seconds and subseconds are always zeroed.
pub fn round_to_next_slot<Z: TimeZone>(now: DateTime<Z>, duration_minutes: i64) -> RoundedSlot<Z> {
    let minute = i64::from(now.minute());
    let into_minute =
        Duration::seconds(i64::from(now.second())) + Duration::nanoseconds(i64::from(now.nanosecond()));
    let floor = now - into_minute;

    let start_time = if minute == 0 {
        floor
    } else if minute <= 30 {
        floor + Duration::minutes(30 - minute)
    } else {
        floor + Duration::minutes(60 - minute)
    };

    let end_time = start_time.clone() + Duration::minutes(duration_minutes);

    RoundedSlot {
        start_time,
        end_time,
    }
}
