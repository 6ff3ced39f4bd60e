//! Tests for the booking admission gate.

use chrono::NaiveDate;
use salon_engine::booking::{BookingStatus, ExistingBooking};
use salon_engine::{try_admit, Interval, SlotRequest, TimeOfDay};

fn christmas() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
}

fn request(staff: &str, time: &str, duration: u32) -> SlotRequest {
    SlotRequest {
        staff_id: staff.to_string(),
        date: christmas(),
        interval: Interval::new(TimeOfDay::parse(time).unwrap(), duration).unwrap(),
    }
}

fn confirmed_ten_am() -> ExistingBooking {
    ExistingBooking {
        id: 1,
        staff_id: "S1".to_string(),
        date: christmas(),
        start: TimeOfDay::parse("10:00 AM").unwrap(),
        duration_minutes: 60,
        status: BookingStatus::Confirmed,
    }
}

#[test]
fn overlapping_request_rejected_with_conflict() {
    let existing = vec![confirmed_ten_am()];

    let rejection = try_admit(&request("S1", "10:30 AM", 30), &existing).unwrap_err();

    assert_eq!(rejection.conflicts.len(), 1);
    assert_eq!(rejection.conflicts[0].booking, existing[0]);
    assert_eq!(rejection.conflicts[0].overlap_minutes, 30);
    assert!(rejection.to_string().contains("already booked"));
}

#[test]
fn request_after_existing_booking_accepted() {
    let existing = vec![confirmed_ten_am()];
    assert!(try_admit(&request("S1", "11:00 AM", 30), &existing).is_ok());
}

#[test]
fn request_ending_at_existing_start_accepted() {
    let existing = vec![confirmed_ten_am()];
    assert!(try_admit(&request("S1", "9:00 AM", 60), &existing).is_ok());
}

#[test]
fn other_staff_member_unaffected() {
    let existing = vec![confirmed_ten_am()];
    assert!(try_admit(&request("S2", "10:00 AM", 60), &existing).is_ok());
}

#[test]
fn cancelled_booking_frees_the_slot() {
    let existing = vec![ExistingBooking {
        status: BookingStatus::Cancelled,
        ..confirmed_ten_am()
    }];
    assert!(try_admit(&request("S1", "10:00 AM", 60), &existing).is_ok());
}

#[test]
fn rejection_lists_every_conflicting_booking() {
    let existing = vec![
        confirmed_ten_am(),
        ExistingBooking {
            id: 2,
            start: TimeOfDay::parse("11:00 AM").unwrap(),
            status: BookingStatus::Pending,
            ..confirmed_ten_am()
        },
    ];

    let rejection = try_admit(&request("S1", "10:30 AM", 60), &existing).unwrap_err();
    let ids: Vec<u64> = rejection.bookings().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn gate_does_not_mutate_input() {
    let existing = vec![confirmed_ten_am()];
    let before = existing.clone();
    let _ = try_admit(&request("S1", "10:00 AM", 60), &existing);
    let _ = try_admit(&request("S1", "2:00 PM", 60), &existing);
    assert_eq!(existing, before);
}

#[test]
fn deserialized_request_cannot_carry_zero_duration() {
    let json = r#"{
        "staff_id": "S1",
        "date": "2024-12-25",
        "interval": {"start": "10:00 AM", "duration_minutes": 0}
    }"#;
    let err = serde_json::from_str::<SlotRequest>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid duration"));

    let ok = r#"{
        "staff_id": "S1",
        "date": "2024-12-25",
        "interval": {"start": "10:00 AM", "duration_minutes": 45}
    }"#;
    let parsed: SlotRequest = serde_json::from_str(ok).unwrap();
    assert_eq!(parsed, request("S1", "10:00 AM", 45));
}
