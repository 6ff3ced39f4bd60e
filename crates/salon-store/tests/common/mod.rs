//! Shared fixtures for salon-store tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use salon_engine::BusinessHours;
use salon_store::{BookingRequest, Catalog, Salon, Service, StaffMember, BookingStore};

pub fn christmas() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
}

pub fn service(id: &str, name: &str, duration: u32, price: f64) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: "Hair".to_string(),
        duration_minutes: duration,
        price,
        is_active: true,
    }
}

pub fn staff(id: &str, name: &str) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        role: "Stylist".to_string(),
        specialty: String::new(),
        email: String::new(),
        phone: String::new(),
        is_active: true,
    }
}

pub fn catalog() -> Catalog {
    let mut inactive_service = service("nails", "Manicure & Pedicure", 75, 55.0);
    inactive_service.is_active = false;
    let mut inactive_staff = staff("S4", "Lisa Chen");
    inactive_staff.is_active = false;

    Catalog::new(
        vec![
            service("cut", "Classic Hair Cut", 60, 65.0),
            service("color", "Hair Coloring", 180, 120.0),
            service("trim", "Fringe Trim", 30, 20.0),
            inactive_service,
        ],
        vec![
            staff("S1", "Sarah Johnson"),
            staff("S2", "Maria Garcia"),
            inactive_staff,
        ],
    )
    .unwrap()
}

pub fn salon() -> Salon {
    Salon::new(catalog(), BookingStore::new(), BusinessHours::default()).unwrap()
}

pub fn request(staff_id: &str, service_id: &str, time: &str) -> BookingRequest {
    BookingRequest {
        client_name: "Jane Smith".to_string(),
        client_phone: "8765432109".to_string(),
        client_email: Some("jane.smith@email.com".to_string()),
        service_id: service_id.to_string(),
        staff_id: staff_id.to_string(),
        appointment_date: christmas(),
        appointment_time: time.to_string(),
        special_requests: None,
    }
}
