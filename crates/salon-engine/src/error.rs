//! Error types for salon-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Malformed time string '{0}': expected \"H:MM AM\" or \"H:MM PM\"")]
    MalformedTimeString(String),

    #[error("Time of day out of range: {0} minutes (must be below 1440)")]
    TimeOutOfRange(u32),

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(u32),

    #[error("Invalid business hours: {0}")]
    InvalidBusinessHours(String),

    #[error("Unknown booking status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
