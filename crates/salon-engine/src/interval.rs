//! Appointment intervals within a single day.

use serde::{Deserialize, Serialize};

use crate::clock::TimeOfDay;
use crate::error::{EngineError, Result};

/// A start time plus a positive duration.
///
/// The end is `start + duration_minutes` and is allowed to run past midnight;
/// business-hours clamping is the slot generator's job, not the interval's.
/// Deserialization goes through [`Interval::new`], so a zero duration is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    pub start: TimeOfDay,
    pub duration_minutes: u32,
}

impl Interval {
    /// # Errors
    /// Returns `EngineError::InvalidDuration` if `duration_minutes` is zero.
    pub fn new(start: TimeOfDay, duration_minutes: u32) -> Result<Self> {
        if duration_minutes == 0 {
            return Err(EngineError::InvalidDuration(duration_minutes));
        }
        Ok(Self {
            start,
            duration_minutes,
        })
    }

    /// Start in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start.minutes()
    }

    /// Exclusive end in minutes since midnight. Saturates at `u32::MAX`, which
    /// is past any closing time.
    pub fn end_minutes(&self) -> u32 {
        self.start.minutes().saturating_add(self.duration_minutes)
    }
}

#[derive(Deserialize)]
struct RawInterval {
    start: TimeOfDay,
    duration_minutes: u32,
}

impl TryFrom<RawInterval> for Interval {
    type Error = EngineError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.start, raw.duration_minutes)
    }
}
