//! Booking admission gate.
//!
//! Run at booking-creation time, after availability has been shown to the
//! client, to re-check the requested interval against the live bookings. The
//! gate decides; it never inserts. Persisting an admitted booking (with status
//! pending) is the booking store's job, and doing the check and the insert
//! atomically is too.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking::ExistingBooking;
use crate::conflict::{self, Conflict};
use crate::interval::Interval;

/// The slot a new booking asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub staff_id: String,
    pub date: NaiveDate,
    pub interval: Interval,
}

/// Rejection from [`try_admit`]: the requested slot is held by live bookings.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("this time slot is already booked ({} conflicting booking(s)); choose a different time", .conflicts.len())]
pub struct SlotConflict {
    pub conflicts: Vec<Conflict>,
}

impl SlotConflict {
    /// The conflicting bookings, without overlap detail.
    pub fn bookings(&self) -> impl Iterator<Item = &ExistingBooking> {
        self.conflicts.iter().map(|c| &c.booking)
    }
}

/// Decide whether `request` can be admitted given `existing` bookings.
///
/// # Errors
/// Returns `SlotConflict` listing every live booking for the same staff member
/// and date that overlaps the requested interval. No alternative slot is
/// suggested.
pub fn try_admit(request: &SlotRequest, existing: &[ExistingBooking]) -> Result<(), SlotConflict> {
    let conflicts =
        conflict::find_conflicts(&request.staff_id, request.date, &request.interval, existing);
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(SlotConflict { conflicts })
    }
}
