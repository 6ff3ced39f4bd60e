//! Error types for the catalog and booking store.

use salon_engine::{EngineError, SlotConflict, TimeOfDay};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Service not found: {0}")]
    UnknownService(String),

    #[error("Staff member not found: {0}")]
    UnknownStaff(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(u64),

    #[error("Offer not found: {0}")]
    OfferNotFound(u64),

    #[error("Invalid offer: {0}")]
    InvalidOffer(String),

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{start} for {duration_minutes} minutes falls outside business hours")]
    OutsideBusinessHours {
        start: TimeOfDay,
        duration_minutes: u32,
    },

    #[error(transparent)]
    SlotConflict(#[from] SlotConflict),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
