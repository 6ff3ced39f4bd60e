//! Candidate slot generation for a business day.
//!
//! Slots start on the business granularity (every 30 minutes by default) but
//! last as long as the requested service. A slot that would run past closing
//! is dropped; one that ends exactly at closing is kept.

use crate::clock::TimeOfDay;
use crate::hours::BusinessHours;
use crate::interval::Interval;

/// Generate every candidate interval for a service of `duration_minutes`.
///
/// Starts are `opening + k * granularity` for as long as the start is before
/// closing. Returns an empty list when the duration or granularity is zero, or
/// when the hours are otherwise invalid.
///
/// With the default 9:00-18:00 window and 30-minute granularity, a 60-minute
/// service yields 17 slots, 9:00 AM through 5:00 PM.
pub fn generate_slots(hours: &BusinessHours, duration_minutes: u32) -> Vec<Interval> {
    if duration_minutes == 0 || hours.validate().is_err() {
        return Vec::new();
    }

    let open = hours.opening_minutes();
    let close = hours.closing_minutes();
    let step = hours.granularity_minutes as usize;

    (open..close)
        .step_by(step)
        .filter(|start| start.saturating_add(duration_minutes) <= close)
        .filter_map(|start| {
            // `close` is at most 1440 and `start < close`, so this cannot fail.
            let start = TimeOfDay::from_minutes(start).ok()?;
            Some(Interval {
                start,
                duration_minutes,
            })
        })
        .collect()
}
