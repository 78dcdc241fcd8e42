//! Day bucketing for week-grid rendering.
//!
//! Assigns each event to every day cell its span overlaps, so multi-day
//! events repeat across cells and all-day events land on their calendar
//! date regardless of the viewer's UTC offset.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::event::Event;

/// One grid cell: a calendar date plus the events visible on it.
///
/// Events are ordered for rendering: all-day events first (banners above
/// the timed agenda), then timed events by start time.
#[derive(Debug, Clone)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl DayBucket {
    /// Canonical `yyyy-MM-dd` key for this cell.
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Canonical `yyyy-MM-dd` key for a calendar date.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Bucket `events` onto `days`, preserving the input day order.
///
/// An event belongs to a day iff its effective local span overlaps
/// `[00:00:00, 23:59:59.999]` of that day. The span end is exclusive, so
/// an event ending exactly at midnight is not shown on the day it ends.
/// Events overlapping no day are dropped silently.
pub fn bucket_events(events: &[Event], days: &[NaiveDate], tz: Tz) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = days
        .iter()
        .map(|d| DayBucket {
            date: *d,
            events: Vec::new(),
        })
        .collect();

    for event in events {
        let (event_start, event_end) = event.effective_span(tz);

        for bucket in &mut buckets {
            let day_start = bucket.date.and_time(NaiveTime::MIN);
            let day_end = bucket.date.and_hms_milli_opt(23, 59, 59, 999).unwrap();

            if event_start <= day_end && event_end > day_start {
                bucket.events.push(event.clone());
            }
        }
    }

    // All-day banners first, then timed events by start. The sort is stable,
    // so ties keep their input order (no secondary key is defined).
    for bucket in &mut buckets {
        bucket.events.sort_by(|a, b| match (a.is_all_day, b.is_all_day) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => Ordering::Equal,
            (false, false) => a.start_time.cmp(&b.start_time),
        });
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::Tz;

    fn timed(id: &str, day: u32, start_hm: (u32, u32), end_hm: (u32, u32)) -> Event {
        Event {
            id: id.to_string(),
            calendar_id: "cal".to_string(),
            title: id.to_string(),
            location: None,
            start_time: Utc
                .with_ymd_and_hms(2024, 5, day, start_hm.0, start_hm.1, 0)
                .unwrap()
                .fixed_offset(),
            end_time: Utc
                .with_ymd_and_hms(2024, 5, day, end_hm.0, end_hm.1, 0)
                .unwrap()
                .fixed_offset(),
            is_all_day: false,
        }
    }

    fn all_day(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Event {
        Event {
            id: id.to_string(),
            calendar_id: "cal".to_string(),
            title: id.to_string(),
            location: None,
            start_time: Utc
                .with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0)
                .unwrap()
                .fixed_offset(),
            end_time: Utc
                .with_ymd_and_hms(end.0, end.1, end.2, 0, 0, 0)
                .unwrap()
                .fixed_offset(),
            is_all_day: true,
        }
    }

    fn days(from: (i32, u32, u32), count: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap();
        (0..count)
            .map(|i| start + Duration::days(i as i64))
            .collect()
    }

    fn ids(bucket: &DayBucket) -> Vec<&str> {
        bucket.events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_days_yield_empty_output() {
        let events = vec![timed("a", 6, (9, 0), (10, 0))];
        assert!(bucket_events(&events, &[], chrono_tz::UTC).is_empty());
    }

    #[test]
    fn test_empty_events_yield_empty_buckets() {
        let buckets = bucket_events(&[], &days((2024, 5, 6), 7), chrono_tz::UTC);
        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|b| b.events.is_empty()));
    }

    #[test]
    fn test_single_day_event_lands_on_its_day_only() {
        let events = vec![timed("a", 7, (9, 0), (10, 0))];
        let buckets = bucket_events(&events, &days((2024, 5, 6), 3), chrono_tz::UTC);

        assert!(buckets[0].events.is_empty());
        assert_eq!(ids(&buckets[1]), vec!["a"]);
        assert!(buckets[2].events.is_empty());
    }

    #[test]
    fn test_multi_day_event_repeats_across_cells() {
        let mut event = timed("span", 6, (22, 0), (10, 0));
        event.end_time = Utc
            .with_ymd_and_hms(2024, 5, 8, 10, 0, 0)
            .unwrap()
            .fixed_offset();

        let buckets = bucket_events(&[event], &days((2024, 5, 6), 4), chrono_tz::UTC);
        assert_eq!(ids(&buckets[0]), vec!["span"]);
        assert_eq!(ids(&buckets[1]), vec!["span"]);
        assert_eq!(ids(&buckets[2]), vec!["span"]);
        assert!(buckets[3].events.is_empty());
    }

    #[test]
    fn test_event_ending_at_midnight_excluded_from_that_day() {
        let mut event = timed("late", 6, (22, 0), (23, 0));
        event.end_time = Utc
            .with_ymd_and_hms(2024, 5, 7, 0, 0, 0)
            .unwrap()
            .fixed_offset();

        let buckets = bucket_events(&[event], &days((2024, 5, 6), 2), chrono_tz::UTC);
        assert_eq!(ids(&buckets[0]), vec!["late"]);
        assert!(buckets[1].events.is_empty());
    }

    #[test]
    fn test_event_starting_before_window_still_shown() {
        let mut event = timed("early", 5, (22, 0), (23, 0));
        event.end_time = Utc
            .with_ymd_and_hms(2024, 5, 6, 2, 0, 0)
            .unwrap()
            .fixed_offset();

        let buckets = bucket_events(&[event], &days((2024, 5, 6), 2), chrono_tz::UTC);
        assert_eq!(ids(&buckets[0]), vec!["early"]);
    }

    #[test]
    fn test_event_outside_window_dropped_silently() {
        let events = vec![timed("gone", 1, (9, 0), (10, 0))];
        let buckets = bucket_events(&events, &days((2024, 5, 6), 7), chrono_tz::UTC);
        assert!(buckets.iter().all(|b| b.events.is_empty()));
    }

    #[test]
    fn test_all_day_span_is_half_open() {
        // 2024-03-10T00:00:00Z .. 2024-03-12T00:00:00Z shows on the 10th
        // and 11th, not the 12th.
        let event = all_day("trip", (2024, 3, 10), (2024, 3, 12));
        let buckets = bucket_events(&[event], &days((2024, 3, 9), 4), chrono_tz::UTC);

        assert!(buckets[0].events.is_empty());
        assert_eq!(ids(&buckets[1]), vec!["trip"]);
        assert_eq!(ids(&buckets[2]), vec!["trip"]);
        assert!(buckets[3].events.is_empty());
    }

    #[test]
    fn test_all_day_event_stays_on_date_for_western_viewer() {
        // Stored as midnight UTC; a naive conversion to New York time would
        // pull the event back to March 9th.
        let event = all_day("bday", (2024, 3, 10), (2024, 3, 11));
        let tz: Tz = chrono_tz::America::New_York;
        let buckets = bucket_events(&[event], &days((2024, 3, 9), 3), tz);

        assert!(buckets[0].events.is_empty());
        assert_eq!(ids(&buckets[1]), vec!["bday"]);
        assert!(buckets[2].events.is_empty());
    }

    #[test]
    fn test_all_day_event_with_embedded_offset_keeps_its_date() {
        // Delivered as midnight in the source zone rather than midnight UTC;
        // the date component as written still decides the bucket.
        let event = Event {
            id: "offset".to_string(),
            calendar_id: "cal".to_string(),
            title: "offset".to_string(),
            location: None,
            start_time: DateTime::parse_from_rfc3339("2024-03-10T00:00:00+02:00").unwrap(),
            end_time: DateTime::parse_from_rfc3339("2024-03-11T00:00:00+02:00").unwrap(),
            is_all_day: true,
        };
        let buckets = bucket_events(&[event], &days((2024, 3, 9), 3), chrono_tz::UTC);

        assert!(buckets[0].events.is_empty());
        assert_eq!(ids(&buckets[1]), vec!["offset"]);
        assert!(buckets[2].events.is_empty());
    }

    #[test]
    fn test_timed_event_buckets_by_local_day() {
        // 23:00 UTC on the 6th is already the 7th in Stockholm (UTC+2 in May).
        let event = timed("late", 6, (23, 0), (23, 30));
        let buckets = bucket_events(
            &[event],
            &days((2024, 5, 6), 2),
            chrono_tz::Europe::Stockholm,
        );

        assert!(buckets[0].events.is_empty());
        assert_eq!(ids(&buckets[1]), vec!["late"]);
    }

    #[test]
    fn test_all_day_events_sort_before_timed() {
        let events = vec![
            timed("t1", 6, (8, 0), (9, 0)),
            all_day("a1", (2024, 5, 6), (2024, 5, 7)),
            timed("t2", 6, (7, 0), (7, 30)),
            all_day("a2", (2024, 5, 6), (2024, 5, 7)),
        ];
        let buckets = bucket_events(&events, &days((2024, 5, 6), 1), chrono_tz::UTC);

        // All-day banners first in input order, then timed by start time.
        assert_eq!(ids(&buckets[0]), vec!["a1", "a2", "t2", "t1"]);
    }

    #[test]
    fn test_identical_start_times_keep_input_order() {
        let events = vec![
            timed("first", 6, (9, 0), (10, 0)),
            timed("second", 6, (9, 0), (11, 0)),
        ];
        let buckets = bucket_events(&events, &days((2024, 5, 6), 1), chrono_tz::UTC);
        assert_eq!(ids(&buckets[0]), vec!["first", "second"]);
    }

    #[test]
    fn test_day_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(day_key(date), "2024-03-05");
        let bucket = DayBucket {
            date,
            events: Vec::new(),
        };
        assert_eq!(bucket.key(), "2024-03-05");
    }
}
