//! Detect overlaps between a requested interval and a staff member's bookings.
//!
//! Intervals are half-open. Adjacent intervals (where one ends exactly when
//! another starts) are NOT conflicts, and only live bookings (pending or
//! confirmed) can block a slot.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::ExistingBooking;
use crate::interval::Interval;

/// An existing booking that collides with a requested interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub booking: ExistingBooking,
    pub overlap_minutes: u32,
}

/// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
pub fn overlaps(a: &Interval, b: &Interval) -> bool {
    a.start_minutes() < b.end_minutes() && b.start_minutes() < a.end_minutes()
}

/// Minutes shared by `a` and `b`, zero when they do not overlap.
pub fn overlap_minutes(a: &Interval, b: &Interval) -> u32 {
    let start = a.start_minutes().max(b.start_minutes());
    let end = a.end_minutes().min(b.end_minutes());
    end.saturating_sub(start)
}

/// Whether `candidate` collides with any live booking for `staff_id` on `date`.
///
/// Bookings for other staff members or other dates are ignored, so callers may
/// pass an unfiltered list.
pub fn has_conflict(
    staff_id: &str,
    date: NaiveDate,
    candidate: &Interval,
    existing: &[ExistingBooking],
) -> bool {
    blocking(staff_id, date, candidate, existing).next().is_some()
}

/// Every live booking for `staff_id` on `date` that collides with `candidate`,
/// in input order.
pub fn find_conflicts(
    staff_id: &str,
    date: NaiveDate,
    candidate: &Interval,
    existing: &[ExistingBooking],
) -> Vec<Conflict> {
    blocking(staff_id, date, candidate, existing)
        .map(|booking| Conflict {
            booking: booking.clone(),
            overlap_minutes: overlap_minutes(candidate, &booking.interval()),
        })
        .collect()
}

fn blocking<'a>(
    staff_id: &'a str,
    date: NaiveDate,
    candidate: &'a Interval,
    existing: &'a [ExistingBooking],
) -> impl Iterator<Item = &'a ExistingBooking> + 'a {
    existing.iter().filter(move |booking| {
        booking.is_for(staff_id, date)
            && booking.is_live()
            && overlaps(candidate, &booking.interval())
    })
}
