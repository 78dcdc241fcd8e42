//! Pure layout engine for the daygrid calendar views.
//!
//! This crate provides the three algorithms the rendering layer needs:
//! - `bucket`: assigns events (including multi-day and all-day) to day cells
//! - `overlap`: side-by-side column layout for overlapping timed events
//! - `rounding`: default start/end times for new-event forms
//!
//! Everything here is a pure function over plain data: no I/O, no caching,
//! no shared state. Callers recompute on every input change.

pub mod bucket;
pub mod day;
pub mod error;
pub mod event;
pub mod overlap;
pub mod rounding;

// Re-export the main types and entry points at crate root for convenience
pub use bucket::{DayBucket, bucket_events};
pub use error::{DayGridError, DayGridResult};
pub use event::Event;
pub use overlap::{ColumnAssignment, layout_overlaps};
pub use rounding::{RoundedSlot, round_to_next_slot};
