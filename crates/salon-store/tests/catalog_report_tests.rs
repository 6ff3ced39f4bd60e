//! Tests for catalog management and revenue reporting.

mod common;

use chrono::NaiveDate;
use common::{catalog, request, salon, service, staff};
use salon_engine::{BookingStatus, EngineError};
use salon_store::{revenue_report, Catalog, StoreError};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
}

// ── Catalog ─────────────────────────────────────────────────────────────────

#[test]
fn active_listings_skip_inactive_entries() {
    let catalog = catalog();
    let services: Vec<&str> = catalog.active_services().map(|s| s.id.as_str()).collect();
    let staff: Vec<&str> = catalog.active_staff().map(|m| m.id.as_str()).collect();

    assert_eq!(services, vec!["cut", "color", "trim"]);
    assert_eq!(staff, vec!["S1", "S2"]);
    assert!(catalog.service("nails").is_some(), "inactive entries remain listed for admins");
}

#[test]
fn duplicate_ids_rejected() {
    let result = Catalog::new(
        vec![service("cut", "A", 30, 1.0), service("cut", "B", 30, 1.0)],
        vec![],
    );
    assert!(matches!(
        result,
        Err(StoreError::DuplicateId { entity: "service", .. })
    ));

    let mut catalog = catalog();
    assert!(matches!(
        catalog.add_staff(staff("S1", "Someone Else")),
        Err(StoreError::DuplicateId { entity: "staff", .. })
    ));
}

#[test]
fn zero_length_service_rejected() {
    let mut catalog = catalog();
    assert!(matches!(
        catalog.add_service(service("free", "Consultation", 0, 0.0)),
        Err(StoreError::Engine(EngineError::InvalidDuration(0)))
    ));
}

#[test]
fn update_and_remove_entries() {
    let mut catalog = catalog();

    let mut longer_cut = service("cut", "Classic Hair Cut", 90, 80.0);
    longer_cut.description = "Now with wash".to_string();
    catalog.update_service(longer_cut).unwrap();
    assert_eq!(catalog.service("cut").unwrap().duration_minutes, 90);

    let removed = catalog.remove_staff("S2").unwrap();
    assert_eq!(removed.name, "Maria Garcia");
    assert!(matches!(
        catalog.bookable_staff("S2"),
        Err(StoreError::UnknownStaff(_))
    ));
    assert!(matches!(
        catalog.update_service(service("perm", "Perm", 60, 1.0)),
        Err(StoreError::UnknownService(_))
    ));
}

#[test]
fn catalog_changes_drive_availability() {
    let salon = salon();
    salon
        .catalog_mut()
        .update_service(service("cut", "Classic Hair Cut", 120, 65.0))
        .unwrap();

    let slots = salon.available_slots("S1", day(25), "cut").unwrap();
    // Two-hour service: 9:00 AM .. 4:00 PM.
    assert_eq!(slots.len(), 15);
}

// ── Revenue report ──────────────────────────────────────────────────────────

#[test]
fn report_counts_confirmed_and_completed_in_range() {
    let salon = salon();
    let cut = salon.book(request("S1", "cut", "9:00 AM")).unwrap();
    let color = salon.book(request("S2", "color", "9:00 AM")).unwrap();
    let trim = salon.book(request("S1", "trim", "11:00 AM")).unwrap();
    salon.book(request("S1", "trim", "1:00 PM")).unwrap();

    let store = salon.bookings();
    store.update_status(cut.id, BookingStatus::Confirmed, None).unwrap();
    store.update_status(color.id, BookingStatus::Completed, None).unwrap();
    store.update_status(trim.id, BookingStatus::Cancelled, None).unwrap();

    let report = salon.revenue_report(day(25), day(25));

    assert_eq!(report.total_bookings, 2);
    assert_eq!(report.total_revenue, 185.0);
    assert_eq!(report.average_booking_value, 92.5);
    assert_eq!(report.service_breakdown["Classic Hair Cut"].revenue, 65.0);
    assert_eq!(report.service_breakdown["Hair Coloring"].bookings, 1);
    assert_eq!(report.staff_breakdown["Sarah Johnson"].revenue, 65.0);
    assert_eq!(report.staff_breakdown["Maria Garcia"].revenue, 120.0);
}

#[test]
fn report_outside_range_is_empty() {
    let salon = salon();
    let cut = salon.book(request("S1", "cut", "9:00 AM")).unwrap();
    salon
        .bookings()
        .update_status(cut.id, BookingStatus::Confirmed, None)
        .unwrap();

    let report = salon.revenue_report(day(26), day(31));
    assert_eq!(report.total_bookings, 0);
    assert_eq!(report.total_revenue, 0.0);
    assert_eq!(report.average_booking_value, 0.0);
    assert!(report.service_breakdown.is_empty());
}

#[test]
fn report_names_missing_catalog_entries_unknown() {
    let salon = salon();
    let cut = salon.book(request("S1", "cut", "9:00 AM")).unwrap();
    salon
        .bookings()
        .update_status(cut.id, BookingStatus::Completed, None)
        .unwrap();

    let mut catalog = catalog();
    catalog.remove_service("cut").unwrap();

    let report = revenue_report(&salon.bookings().all(), &catalog, day(25), day(25));
    assert_eq!(report.service_breakdown["Unknown"].bookings, 1);
    assert_eq!(report.staff_breakdown["Sarah Johnson"].bookings, 1);
}

#[test]
fn report_rounds_to_cents() {
    let salon = salon();
    salon
        .catalog_mut()
        .update_service(service("trim", "Fringe Trim", 30, 10.333))
        .unwrap();
    for time in ["9:00 AM", "9:30 AM", "10:00 AM"] {
        let booking = salon.book(request("S1", "trim", time)).unwrap();
        salon
            .bookings()
            .update_status(booking.id, BookingStatus::Confirmed, None)
            .unwrap();
    }

    let report = salon.revenue_report(day(25), day(25));
    assert_eq!(report.total_bookings, 3);
    assert_eq!(report.total_revenue, 31.0);
    assert_eq!(report.average_booking_value, 10.33);
}
