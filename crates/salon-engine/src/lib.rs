//! # salon-engine
//!
//! Deterministic appointment scheduling for a salon: which start times a staff
//! member can offer for a service, and whether a new booking collides with the
//! ones already taken.
//!
//! Everything here is a pure function of its inputs. Bookings and the service
//! catalog live elsewhere; callers pass in what they hold and act on the result.
//!
//! ## Modules
//!
//! - [`clock`] — `"H:MM AM/PM"` strings ↔ minutes since midnight
//! - [`interval`] — start + duration intervals
//! - [`hours`] — business-hours configuration
//! - [`slots`] — candidate slot generation within business hours
//! - [`booking`] — booking status and the booking view the core reads
//! - [`conflict`] — overlap detection against live bookings
//! - [`availability`] — per-staff, per-day slot availability
//! - [`admission`] — the booking admission gate
//! - [`error`] — Error types

pub mod admission;
pub mod availability;
pub mod booking;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod hours;
pub mod interval;
pub mod slots;

pub use admission::{try_admit, SlotConflict, SlotRequest};
pub use availability::{available_slots, resolve_availability, CandidateSlot};
pub use booking::{BookingStatus, ExistingBooking};
pub use clock::TimeOfDay;
pub use conflict::{find_conflicts, has_conflict, overlaps, Conflict};
pub use error::EngineError;
pub use hours::BusinessHours;
pub use interval::Interval;
pub use slots::generate_slots;
