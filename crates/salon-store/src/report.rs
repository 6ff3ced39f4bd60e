//! Revenue reporting and the admin dashboard summary.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use salon_engine::BookingStatus;

use crate::bookings::Booking;
use crate::catalog::Catalog;

const UNKNOWN: &str = "Unknown";

/// Days ahead, counting from today, that the dashboard looks for upcoming bookings.
pub const UPCOMING_DAYS: u64 = 7;

/// Most upcoming bookings the dashboard lists.
pub const UPCOMING_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub revenue: f64,
    pub bookings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub total_revenue: f64,
    pub total_bookings: usize,
    pub average_booking_value: f64,
    pub service_breakdown: BTreeMap<String, Breakdown>,
    pub staff_breakdown: BTreeMap<String, Breakdown>,
}

/// Revenue earned between `from` and `to` inclusive.
///
/// Only confirmed and completed bookings count. Breakdowns are keyed by service
/// and staff name, falling back to `"Unknown"` for ids no longer in the catalog.
/// Money values are rounded to cents.
pub fn revenue_report(
    bookings: &[Booking],
    catalog: &Catalog,
    from: NaiveDate,
    to: NaiveDate,
) -> RevenueReport {
    let earning: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.date >= from && b.date <= to)
        .filter(|b| matches!(b.status, BookingStatus::Confirmed | BookingStatus::Completed))
        .collect();

    let mut service_breakdown: BTreeMap<String, Breakdown> = BTreeMap::new();
    let mut staff_breakdown: BTreeMap<String, Breakdown> = BTreeMap::new();
    let mut total_revenue = 0.0;

    for booking in &earning {
        total_revenue += booking.total_price;

        let service_name = catalog
            .service(&booking.service_id)
            .map_or(UNKNOWN, |s| s.name.as_str());
        add(&mut service_breakdown, service_name, booking.total_price);

        let staff_name = catalog
            .staff_member(&booking.staff_id)
            .map_or(UNKNOWN, |m| m.name.as_str());
        add(&mut staff_breakdown, staff_name, booking.total_price);
    }

    let total_bookings = earning.len();
    let average_booking_value = if total_bookings == 0 {
        0.0
    } else {
        total_revenue / total_bookings as f64
    };

    for entry in service_breakdown.values_mut().chain(staff_breakdown.values_mut()) {
        entry.revenue = round_cents(entry.revenue);
    }

    RevenueReport {
        date_from: from,
        date_to: to,
        total_revenue: round_cents(total_revenue),
        total_bookings,
        average_booking_value: round_cents(average_booking_value),
        service_breakdown,
        staff_breakdown,
    }
}

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today_bookings: usize,
    pub week_bookings: usize,
    pub month_bookings: usize,
    pub month_revenue: f64,
    pub total_clients: usize,
    pub active_staff: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub stats: DashboardStats,
    pub upcoming_bookings: Vec<Booking>,
}

/// The dashboard as of `today`.
///
/// Booking counts are confirmed bookings only:
/// - today's count covers `today` itself
/// - the week runs from the preceding Sunday through `today`
/// - the month is the calendar month containing `today`
///
/// Month revenue also counts completed bookings. Clients are distinct phone
/// numbers across all bookings. Upcoming bookings are confirmed ones from
/// `today` through [`UPCOMING_DAYS`] ahead, earliest first, at most
/// [`UPCOMING_LIMIT`].
pub fn dashboard_stats(bookings: &[Booking], catalog: &Catalog, today: NaiveDate) -> Dashboard {
    let week_start = today
        .checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_sunday())))
        .unwrap_or(today);
    let horizon = today
        .checked_add_days(Days::new(UPCOMING_DAYS))
        .unwrap_or(NaiveDate::MAX);
    let in_month = |date: NaiveDate| date.year() == today.year() && date.month() == today.month();
    let confirmed = |b: &&Booking| b.status == BookingStatus::Confirmed;

    let today_bookings = bookings.iter().filter(confirmed).filter(|b| b.date == today).count();
    let week_bookings = bookings
        .iter()
        .filter(confirmed)
        .filter(|b| b.date >= week_start && b.date <= today)
        .count();
    let month_bookings = bookings.iter().filter(confirmed).filter(|b| in_month(b.date)).count();
    let month_revenue: f64 = bookings
        .iter()
        .filter(|b| matches!(b.status, BookingStatus::Confirmed | BookingStatus::Completed))
        .filter(|b| in_month(b.date))
        .map(|b| b.total_price)
        .sum();
    let total_clients = bookings
        .iter()
        .map(|b| b.client.phone.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut upcoming_bookings: Vec<Booking> = bookings
        .iter()
        .filter(confirmed)
        .filter(|b| b.date >= today && b.date <= horizon)
        .cloned()
        .collect();
    upcoming_bookings.sort_by_key(|b| (b.date, b.start, b.id));
    upcoming_bookings.truncate(UPCOMING_LIMIT);

    Dashboard {
        today,
        stats: DashboardStats {
            today_bookings,
            week_bookings,
            month_bookings,
            month_revenue: round_cents(month_revenue),
            total_clients,
            active_staff: catalog.active_staff().count(),
        },
        upcoming_bookings,
    }
}

fn add(breakdown: &mut BTreeMap<String, Breakdown>, key: &str, revenue: f64) {
    let entry = breakdown.entry(key.to_string()).or_default();
    entry.revenue += revenue;
    entry.bookings += 1;
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
