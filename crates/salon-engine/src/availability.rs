//! Per-staff availability for a single day.
//!
//! Combines the slot generator with the conflict detector: every candidate slot
//! for the service is returned, flagged available unless a live booking for the
//! same staff member and date overlaps it. The result is deterministic and in
//! ascending start order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::ExistingBooking;
use crate::clock::TimeOfDay;
use crate::conflict;
use crate::hours::BusinessHours;
use crate::interval::Interval;
use crate::slots;

/// A generated slot and whether it can still be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub interval: Interval,
    pub available: bool,
}

impl CandidateSlot {
    /// Start time of the slot.
    pub fn time(&self) -> TimeOfDay {
        self.interval.start
    }
}

/// Resolve which slots `staff_id` can offer on `date` for a service lasting
/// `service_duration_minutes`.
///
/// `existing` may contain bookings for any staff member or date; it is
/// re-filtered here rather than trusted to be pre-filtered.
pub fn resolve_availability(
    staff_id: &str,
    date: NaiveDate,
    service_duration_minutes: u32,
    existing: &[ExistingBooking],
    hours: &BusinessHours,
) -> Vec<CandidateSlot> {
    let relevant: Vec<ExistingBooking> = existing
        .iter()
        .filter(|booking| booking.is_for(staff_id, date) && booking.is_live())
        .cloned()
        .collect();

    slots::generate_slots(hours, service_duration_minutes)
        .into_iter()
        .map(|interval| CandidateSlot {
            interval,
            available: !conflict::has_conflict(staff_id, date, &interval, &relevant),
        })
        .collect()
}

/// Only the slots that are still free, in ascending order.
pub fn available_slots(
    staff_id: &str,
    date: NaiveDate,
    service_duration_minutes: u32,
    existing: &[ExistingBooking],
    hours: &BusinessHours,
) -> Vec<Interval> {
    resolve_availability(staff_id, date, service_duration_minutes, existing, hours)
        .into_iter()
        .filter(|slot| slot.available)
        .map(|slot| slot.interval)
        .collect()
}
