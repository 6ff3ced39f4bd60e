//! 12-hour clock arithmetic.
//!
//! Appointment times travel through the system as display strings such as
//! `"9:30 AM"` or `"2:00 PM"`. Everything that compares or adds times works on
//! [`TimeOfDay`], a count of minutes since midnight, and converts back to the
//! display form only at the edges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, Result};

/// Minutes in a day; every [`TimeOfDay`] is strictly below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

const NOON: u32 = 12 * 60;

/// A time of day as minutes since midnight, in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Build a time from minutes since midnight.
    ///
    /// # Errors
    /// Returns `EngineError::TimeOutOfRange` if `minutes >= 1440`.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(EngineError::TimeOutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    /// Build a time from a 24-hour clock reading.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        let minutes = hour.saturating_mul(60).saturating_add(minute);
        if minute >= 60 {
            return Err(EngineError::TimeOutOfRange(minutes));
        }
        Self::from_minutes(minutes)
    }

    /// Parse a `"H:MM AM"` / `"H:MM PM"` display string.
    ///
    /// `12:xx AM` is the hour after midnight and `12:xx PM` the hour after noon.
    /// The period is matched case-insensitively; hour must be 1-12 and minute
    /// 0-59, written with one or two digits.
    ///
    /// # Errors
    /// Returns `EngineError::MalformedTimeString` for anything else, including
    /// out-of-range hours and minutes.
    pub fn parse(display: &str) -> Result<Self> {
        let malformed = || EngineError::MalformedTimeString(display.to_string());

        let mut tokens = display.split_whitespace();
        let (time, period) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(time), Some(period), None) => (time, period),
            _ => return Err(malformed()),
        };

        let (hour, minute) = time.split_once(':').ok_or_else(malformed)?;
        let hour = parse_clock_field(hour).ok_or_else(malformed)?;
        let minute = parse_clock_field(minute).ok_or_else(malformed)?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(malformed());
        }

        let is_pm = if period.eq_ignore_ascii_case("PM") {
            true
        } else if period.eq_ignore_ascii_case("AM") {
            false
        } else {
            return Err(malformed());
        };

        let mut total = hour * 60 + minute;
        if is_pm && hour != 12 {
            total += NOON;
        } else if !is_pm && hour == 12 {
            total -= NOON;
        }
        Ok(Self(total))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Render as `"H:MM AM"` / `"H:MM PM"`.
    pub fn to_display(self) -> String {
        self.to_string()
    }
}

/// One or two ASCII digits. Rejects signs and empty fields, which `u32::from_str`
/// would otherwise accept or report less precisely.
fn parse_clock_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.0 / 60;
        let minute = self.0 % 60;
        let (hour12, period) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        write!(f, "{}:{:02} {}", hour12, minute, period)
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
