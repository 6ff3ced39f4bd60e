//! # salon-store
//!
//! In-memory catalog and booking store for the salon, wired to
//! [`salon_engine`] for availability and admission.
//!
//! There is exactly one store per entity type. The public booking flow and the
//! admin screens read and write the same bookings.
//!
//! ## Modules
//!
//! - [`catalog`] — services and staff
//! - [`offers`] — promotional offers and their codes
//! - [`bookings`] — the booking store; admission and insert under one lock
//! - [`salon`] — request validation and the two booking boundaries
//! - [`report`] — revenue reporting and the dashboard summary
//! - [`error`] — Error types

pub mod bookings;
pub mod catalog;
pub mod error;
pub mod offers;
pub mod report;
pub mod salon;

pub use bookings::{Booking, BookingFilter, BookingStore, ClientInfo, NewBooking};
pub use catalog::{Catalog, Service, StaffMember};
pub use error::StoreError;
pub use offers::{NewOffer, Offer, OfferStatus, Offers};
pub use report::{dashboard_stats, revenue_report, Dashboard, DashboardStats, RevenueReport};
pub use salon::{BookingRequest, Salon, SalonSnapshot};
