//! The salon facade: catalog, offers, bookings and business hours.
//!
//! This is where request-level validation lives. The scheduling core is only
//! called once the staff member and service are known to exist, and durations
//! and prices come from the catalog, never from the client.

use chrono::NaiveDate;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use tracing::debug;

use salon_engine::{resolve_availability, BusinessHours, CandidateSlot, Interval, TimeOfDay};

use crate::bookings::{Booking, BookingStore, ClientInfo, NewBooking};
use crate::catalog::{Catalog, Service, StaffMember};
use crate::error::{Result, StoreError};
use crate::offers::{Offer, Offers};
use crate::report::{self, Dashboard, RevenueReport};

/// A booking request from the public booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub client_name: String,
    pub client_phone: String,
    #[serde(default)]
    pub client_email: Option<String>,
    pub service_id: String,
    pub staff_id: String,
    pub appointment_date: NaiveDate,
    /// `"H:MM AM/PM"` as shown to the client.
    pub appointment_time: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Everything the salon holds, in a form that can be written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalonSnapshot {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl SalonSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug)]
pub struct Salon {
    catalog: RwLock<Catalog>,
    offers: RwLock<Offers>,
    bookings: BookingStore,
    hours: BusinessHours,
}

impl Salon {
    /// # Errors
    /// Returns `StoreError::Engine` if `hours` is not a valid window.
    pub fn new(catalog: Catalog, bookings: BookingStore, hours: BusinessHours) -> Result<Self> {
        hours.validate()?;
        Ok(Self {
            catalog: RwLock::new(catalog),
            offers: RwLock::new(Offers::default()),
            bookings,
            hours,
        })
    }

    pub fn from_snapshot(snapshot: SalonSnapshot, hours: BusinessHours) -> Result<Self> {
        let catalog = Catalog::new(snapshot.services, snapshot.staff)?;
        let offers = Offers::from_offers(snapshot.offers)?;
        let bookings = BookingStore::from_bookings(snapshot.bookings)?;
        Ok(Self::new(catalog, bookings, hours)?.with_offers(offers))
    }

    pub fn with_offers(self, offers: Offers) -> Self {
        Self {
            offers: RwLock::new(offers),
            ..self
        }
    }

    pub fn snapshot(&self) -> SalonSnapshot {
        let catalog = self.catalog.read();
        SalonSnapshot {
            services: catalog.services().to_vec(),
            staff: catalog.staff().to_vec(),
            offers: self.offers.read().list().to_vec(),
            bookings: self.bookings.all(),
        }
    }

    pub fn hours(&self) -> &BusinessHours {
        &self.hours
    }

    pub fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read()
    }

    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write()
    }

    pub fn offers(&self) -> RwLockReadGuard<'_, Offers> {
        self.offers.read()
    }

    pub fn offers_mut(&self) -> RwLockWriteGuard<'_, Offers> {
        self.offers.write()
    }

    pub fn bookings(&self) -> &BookingStore {
        &self.bookings
    }

    /// Slots `staff_id` can offer on `date` for `service_id`, taken ones included.
    ///
    /// # Errors
    /// Returns `UnknownStaff` / `UnknownService` when either id is missing or
    /// inactive.
    pub fn available_slots(
        &self,
        staff_id: &str,
        date: NaiveDate,
        service_id: &str,
    ) -> Result<Vec<CandidateSlot>> {
        let duration = {
            let catalog = self.catalog.read();
            catalog.bookable_staff(staff_id)?;
            catalog.bookable_service(service_id)?.duration_minutes
        };

        let existing = self.bookings.existing_for(staff_id, date);
        let slots = resolve_availability(staff_id, date, duration, &existing, &self.hours);
        debug!(
            staff_id,
            %date,
            service_id,
            offered = slots.iter().filter(|s| s.available).count(),
            "resolved availability"
        );
        Ok(slots)
    }

    /// Create a pending booking for `request`.
    ///
    /// # Errors
    /// - `MissingField` when the client name or phone is blank.
    /// - `UnknownStaff` / `UnknownService` for missing or inactive ids.
    /// - `Engine(MalformedTimeString)` when the time cannot be parsed.
    /// - `OutsideBusinessHours` when the service would start before opening or
    ///   run past closing.
    /// - `SlotConflict` carrying the bookings that hold the slot.
    pub fn book(&self, request: BookingRequest) -> Result<Booking> {
        if request.client_name.trim().is_empty() {
            return Err(StoreError::MissingField("client_name"));
        }
        if request.client_phone.trim().is_empty() {
            return Err(StoreError::MissingField("client_phone"));
        }

        let (duration, price) = {
            let catalog = self.catalog.read();
            catalog.bookable_staff(&request.staff_id)?;
            let service = catalog.bookable_service(&request.service_id)?;
            (service.duration_minutes, service.price)
        };

        let start = TimeOfDay::parse(&request.appointment_time)?;
        let interval = Interval::new(start, duration)?;
        if !self.hours.contains(&interval) {
            return Err(StoreError::OutsideBusinessHours {
                start,
                duration_minutes: duration,
            });
        }

        self.bookings.admit_and_insert(NewBooking {
            staff_id: request.staff_id,
            service_id: request.service_id,
            client: ClientInfo {
                name: request.client_name,
                phone: request.client_phone,
                email: request.client_email.filter(|e| !e.trim().is_empty()),
            },
            date: request.appointment_date,
            interval,
            total_price: price,
            notes: request.special_requests.unwrap_or_default(),
        })
    }

    /// Revenue between `from` and `to` inclusive.
    pub fn revenue_report(&self, from: NaiveDate, to: NaiveDate) -> RevenueReport {
        let bookings = self.bookings.all();
        report::revenue_report(&bookings, &self.catalog.read(), from, to)
    }

    /// The admin dashboard as of `today`.
    pub fn dashboard(&self, today: NaiveDate) -> Dashboard {
        let bookings = self.bookings.all();
        report::dashboard_stats(&bookings, &self.catalog.read(), today)
    }
}
