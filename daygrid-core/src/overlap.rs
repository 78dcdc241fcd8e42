//! Side-by-side column layout for overlapping timed events.
//!
//! Overlapping events on one day are grouped into clusters (maximal runs of
//! transitively overlapping events) and each event is assigned a display
//! column, Google-Calendar style. All events in a cluster share one
//! `total_columns` so their rendered widths are uniform.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::event::Event;

/// Display slot for one event within its day's layout pass.
///
/// A renderer derives the horizontal geometry directly:
/// width `100% / total_columns`, left offset `column * width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// 0-indexed column within the cluster.
    pub column: usize,
    /// Number of columns in the cluster, same for every member.
    pub total_columns: usize,
}

/// Assign display columns to the timed events of a single day.
///
/// All-day events are skipped; they render as banners and never stack.
/// Recomputed from scratch on every call; the result is only meaningful
/// for the day's event set it was computed from.
pub fn layout_overlaps(day_events: &[Event]) -> HashMap<String, ColumnAssignment> {
    let mut timed: Vec<&Event> = day_events.iter().filter(|e| !e.is_all_day).collect();

    // Start ascending; on equal starts the longer event first, so it claims
    // column 0 and shorter events stack around it.
    timed.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then(b.end_time.cmp(&a.end_time))
    });

    let mut assignments = HashMap::new();
    let mut cluster: Vec<&Event> = Vec::new();
    let mut cluster_end: Option<DateTime<FixedOffset>> = None;

    for event in timed {
        match cluster_end {
            // Strictly inside the running cluster: join it and extend the
            // frontier. Overlap is transitive here, a chain of events
            // competes for the same horizontal space.
            Some(end) if event.start_time < end => {
                cluster_end = Some(end.max(event.end_time));
                cluster.push(event);
            }
            _ => {
                assign_columns(&cluster, &mut assignments);
                cluster.clear();
                cluster.push(event);
                cluster_end = Some(event.end_time);
            }
        }
    }
    assign_columns(&cluster, &mut assignments);

    assignments
}

/// Greedy column assignment within one cluster.
///
/// Slots hold the end time of their current occupant; each event takes the
/// leftmost slot free by its start time, or opens a new column. The column
/// count this produces is minimal: it equals the maximum number of events
/// simultaneously open at any instant in the cluster.
fn assign_columns(cluster: &[&Event], assignments: &mut HashMap<String, ColumnAssignment>) {
    if cluster.is_empty() {
        return;
    }

    let mut slots: Vec<DateTime<FixedOffset>> = Vec::new();
    let mut placed: Vec<(String, usize)> = Vec::with_capacity(cluster.len());

    for event in cluster {
        let column = match slots.iter().position(|end| *end <= event.start_time) {
            Some(i) => {
                slots[i] = event.end_time;
                i
            }
            None => {
                slots.push(event.end_time);
                slots.len() - 1
            }
        };
        placed.push((event.id.clone(), column));
    }

    let total_columns = slots.len();
    for (id, column) in placed {
        assignments.insert(
            id,
            ColumnAssignment {
                column,
                total_columns,
            },
        );
    }
}
