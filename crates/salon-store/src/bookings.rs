//! The booking store.
//!
//! One store holds every booking, whether it came from the public booking flow
//! or the admin screens. Admission and insertion happen under the same write
//! lock, so two requests for the same slot cannot both pass the conflict check.

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use salon_engine::{try_admit, BookingStatus, ExistingBooking, Interval, SlotRequest, TimeOfDay};

use crate::error::{Result, StoreError};

/// Contact details captured with a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A stored booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub staff_id: String,
    pub service_id: String,
    pub client: ClientInfo,
    #[serde(rename = "appointment_date")]
    pub date: NaiveDate,
    #[serde(rename = "appointment_time")]
    pub start: TimeOfDay,
    pub duration_minutes: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The scheduling view of this booking.
    pub fn as_existing(&self) -> ExistingBooking {
        ExistingBooking {
            id: self.id,
            staff_id: self.staff_id.clone(),
            date: self.date,
            start: self.start,
            duration_minutes: self.duration_minutes,
            status: self.status,
        }
    }

    pub fn interval(&self) -> Interval {
        self.as_existing().interval()
    }
}

/// A booking that has not been admitted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub staff_id: String,
    pub service_id: String,
    pub client: ClientInfo,
    pub date: NaiveDate,
    pub interval: Interval,
    pub total_price: f64,
    pub notes: String,
}

/// Admin list filter. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        self.status.is_none_or(|s| booking.status == s)
            && self.date_from.is_none_or(|from| booking.date >= from)
            && self.date_to.is_none_or(|to| booking.date <= to)
    }
}

#[derive(Debug)]
struct Inner {
    bookings: Vec<Booking>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: u64) -> Result<usize> {
        self.bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::BookingNotFound(id))
    }

    fn existing_for(&self, staff_id: &str, date: NaiveDate, except: Option<u64>) -> Vec<ExistingBooking> {
        self.bookings
            .iter()
            .filter(|b| b.staff_id == staff_id && b.date == date && Some(b.id) != except)
            .map(Booking::as_existing)
            .collect()
    }
}

#[derive(Debug)]
pub struct BookingStore {
    inner: RwLock<Inner>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                bookings: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Load previously stored bookings. Ids must be unique; new ids continue
    /// after the largest one.
    pub fn from_bookings(bookings: Vec<Booking>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for booking in &bookings {
            if !seen.insert(booking.id) {
                return Err(StoreError::DuplicateId {
                    entity: "booking",
                    id: booking.id.to_string(),
                });
            }
        }
        let next_id = bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Ok(Self {
            inner: RwLock::new(Inner { bookings, next_id }),
        })
    }

    /// Run the admission gate and, if it passes, store the booking as pending.
    ///
    /// # Errors
    /// Returns `StoreError::SlotConflict` with the conflicting bookings when the
    /// slot is taken. Nothing is stored in that case.
    pub fn admit_and_insert(&self, new: NewBooking) -> Result<Booking> {
        let mut inner = self.inner.write();

        let request = SlotRequest {
            staff_id: new.staff_id.clone(),
            date: new.date,
            interval: new.interval,
        };
        let existing = inner.existing_for(&new.staff_id, new.date, None);
        if let Err(conflict) = try_admit(&request, &existing) {
            warn!(
                staff_id = %new.staff_id,
                date = %new.date,
                time = %new.interval.start,
                conflicts = conflict.conflicts.len(),
                "booking rejected: slot already taken"
            );
            return Err(conflict.into());
        }

        let now = Utc::now();
        let booking = Booking {
            id: inner.next_id,
            staff_id: new.staff_id,
            service_id: new.service_id,
            client: new.client,
            date: new.date,
            start: new.interval.start,
            duration_minutes: new.interval.duration_minutes,
            total_price: new.total_price,
            status: BookingStatus::Pending,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        inner.next_id += 1;
        inner.bookings.push(booking.clone());

        info!(
            booking_id = booking.id,
            staff_id = %booking.staff_id,
            date = %booking.date,
            time = %booking.start,
            "booking admitted"
        );
        Ok(booking)
    }

    /// Scheduling view of every booking for `staff_id` on `date`, any status.
    pub fn existing_for(&self, staff_id: &str, date: NaiveDate) -> Vec<ExistingBooking> {
        self.inner.read().existing_for(staff_id, date, None)
    }

    pub fn get(&self, id: u64) -> Option<Booking> {
        self.inner.read().bookings.iter().find(|b| b.id == id).cloned()
    }

    /// Every booking, in insertion order.
    pub fn all(&self) -> Vec<Booking> {
        self.inner.read().bookings.clone()
    }

    /// Bookings matching `filter`, ordered by date, then start time, then id.
    pub fn list(&self, filter: &BookingFilter) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .inner
            .read()
            .bookings
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| (b.date, b.start, b.id));
        bookings
    }

    /// Bookings awaiting an admin decision.
    pub fn pending(&self) -> Vec<Booking> {
        self.list(&BookingFilter {
            status: Some(BookingStatus::Pending),
            ..BookingFilter::default()
        })
    }

    /// A client's booking history, looked up by phone number.
    pub fn for_client_phone(&self, phone: &str) -> Vec<Booking> {
        let mut bookings: Vec<Booking> = self
            .inner
            .read()
            .bookings
            .iter()
            .filter(|b| b.client.phone == phone)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| (b.date, b.start, b.id));
        bookings
    }

    /// Change a booking's status, replacing its notes when given.
    ///
    /// Moving a booking back into a live status re-runs the admission gate
    /// against the other bookings, since its slot may have been given away.
    pub fn update_status(&self, id: u64, status: BookingStatus, notes: Option<String>) -> Result<Booking> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        let current = inner.bookings[index].clone();

        if status.is_live() && !current.status.is_live() {
            let request = SlotRequest {
                staff_id: current.staff_id.clone(),
                date: current.date,
                interval: current.interval(),
            };
            let others = inner.existing_for(&current.staff_id, current.date, Some(id));
            if let Err(conflict) = try_admit(&request, &others) {
                warn!(booking_id = id, %status, "status change rejected: slot already taken");
                return Err(conflict.into());
            }
        }

        let booking = &mut inner.bookings[index];
        booking.status = status;
        if let Some(notes) = notes {
            booking.notes = notes;
        }
        booking.updated_at = Utc::now();

        info!(booking_id = id, from = %current.status, to = %status, "booking status changed");
        Ok(booking.clone())
    }

    pub fn remove(&self, id: u64) -> Result<Booking> {
        let mut inner = self.inner.write();
        let index = inner.position(id)?;
        let removed = inner.bookings.remove(index);
        debug!(booking_id = id, "booking removed");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.inner.read().bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
