//! Business-hours configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::interval::Interval;

/// The daily window in which appointments may be offered.
///
/// Hours are on the 24-hour clock. `closing_hour` is exclusive for slot starts
/// and inclusive for slot ends: an appointment may finish exactly at closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub opening_hour: u32,
    pub closing_hour: u32,
    pub granularity_minutes: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            opening_hour: 9,
            closing_hour: 18,
            granularity_minutes: 30,
        }
    }
}

impl BusinessHours {
    /// # Errors
    /// Returns `EngineError::InvalidBusinessHours` if the window is empty,
    /// closes after midnight, or the granularity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.closing_hour > 24 {
            return Err(EngineError::InvalidBusinessHours(format!(
                "closing hour {} is past midnight",
                self.closing_hour
            )));
        }
        if self.opening_hour >= self.closing_hour {
            return Err(EngineError::InvalidBusinessHours(format!(
                "opening hour {} is not before closing hour {}",
                self.opening_hour, self.closing_hour
            )));
        }
        if self.granularity_minutes == 0 {
            return Err(EngineError::InvalidBusinessHours(
                "slot granularity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn opening_minutes(&self) -> u32 {
        self.opening_hour.saturating_mul(60)
    }

    pub fn closing_minutes(&self) -> u32 {
        self.closing_hour.saturating_mul(60)
    }

    /// Whether `interval` starts at or after opening and ends at or before closing.
    pub fn contains(&self, interval: &Interval) -> bool {
        interval.start_minutes() >= self.opening_minutes()
            && interval.end_minutes() <= self.closing_minutes()
    }
}
