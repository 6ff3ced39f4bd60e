//! Existing bookings as seen by the scheduling core.
//!
//! The core never owns bookings. Callers hand it whatever their booking store
//! returned and it reads only the fields below.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::EngineError;
use crate::interval::Interval;

/// Duration assumed for a booking that does not record one.
pub const DEFAULT_BOOKING_MINUTES: u32 = 60;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Rejected,
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 6] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Rejected,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ];

    /// Live bookings occupy their slot. Every other status frees it, even when
    /// the booking still sits at the same time.
    pub fn is_live(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownStatus(s.to_string()))
    }
}

/// A booking already on a staff member's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub id: u64,
    pub staff_id: String,
    #[serde(rename = "appointment_date")]
    pub date: NaiveDate,
    #[serde(rename = "appointment_time")]
    pub start: TimeOfDay,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: BookingStatus,
}

fn default_duration() -> u32 {
    DEFAULT_BOOKING_MINUTES
}

impl ExistingBooking {
    /// The time this booking occupies. A recorded duration of zero counts as
    /// the default duration.
    pub fn interval(&self) -> Interval {
        let duration_minutes = if self.duration_minutes == 0 {
            DEFAULT_BOOKING_MINUTES
        } else {
            self.duration_minutes
        };
        Interval {
            start: self.start,
            duration_minutes,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Whether this booking is on `staff_id`'s calendar for `date`.
    pub fn is_for(&self, staff_id: &str, date: NaiveDate) -> bool {
        self.staff_id == staff_id && self.date == date
    }
}
