//! WASM bindings for salon-engine.
//!
//! Exposes time conversion, slot generation, availability resolution, and the
//! booking admission gate to JavaScript via `wasm-bindgen`. Complex types cross
//! the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p salon-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/salon_engine_wasm.wasm
//! ```
//!
//! Each export is a thin wrapper over a plain function returning
//! `Result<_, String>`, so the JSON handling is testable on the host.

use chrono::NaiveDate;
use salon_engine::{
    BookingStatus, BusinessHours, CandidateSlot, Conflict, ExistingBooking, Interval, SlotRequest,
    TimeOfDay,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SlotDto {
    time: String,
    start_minutes: u32,
    end_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<bool>,
}

impl From<&Interval> for SlotDto {
    fn from(interval: &Interval) -> Self {
        Self {
            time: interval.start.to_display(),
            start_minutes: interval.start_minutes(),
            end_minutes: interval.end_minutes(),
            available: None,
        }
    }
}

impl From<&CandidateSlot> for SlotDto {
    fn from(slot: &CandidateSlot) -> Self {
        Self {
            available: Some(slot.available),
            ..Self::from(&slot.interval)
        }
    }
}

#[derive(Serialize)]
struct ConflictDto {
    id: u64,
    appointment_time: String,
    duration_minutes: u32,
    status: BookingStatus,
    overlap_minutes: u32,
}

impl From<&Conflict> for ConflictDto {
    fn from(c: &Conflict) -> Self {
        Self {
            id: c.booking.id,
            appointment_time: c.booking.start.to_display(),
            duration_minutes: c.booking.interval().duration_minutes,
            status: c.booking.status,
            overlap_minutes: c.overlap_minutes,
        }
    }
}

#[derive(Serialize)]
struct AdmissionDto {
    admitted: bool,
    conflicts: Vec<ConflictDto>,
}

/// Input format for a booking request passed from JavaScript.
#[derive(Deserialize)]
struct RequestInput {
    staff_id: String,
    date: String,
    start: String,
    duration_minutes: u32,
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Business hours from JSON. An empty string means the defaults; missing
/// fields take their default values.
fn parse_hours(json: &str) -> Result<BusinessHours, String> {
    if json.trim().is_empty() {
        return Ok(BusinessHours::default());
    }
    let hours: BusinessHours =
        serde_json::from_str(json).map_err(|e| format!("Invalid business hours JSON: {}", e))?;
    hours.validate().map_err(|e| e.to_string())?;
    Ok(hours)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    s.parse::<NaiveDate>()
        .map_err(|e| format!("Invalid date '{}': {}", s, e))
}

fn parse_bookings(json: &str) -> Result<Vec<ExistingBooking>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid bookings JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Host-side implementations
// ---------------------------------------------------------------------------

fn slots_json(hours_json: &str, duration_minutes: u32) -> Result<String, String> {
    let hours = parse_hours(hours_json)?;
    let dtos: Vec<SlotDto> = salon_engine::generate_slots(&hours, duration_minutes)
        .iter()
        .map(SlotDto::from)
        .collect();
    to_json(&dtos)
}

fn availability_json(
    staff_id: &str,
    date: &str,
    duration_minutes: u32,
    existing_json: &str,
    hours_json: &str,
) -> Result<String, String> {
    let date = parse_date(date)?;
    let existing = parse_bookings(existing_json)?;
    let hours = parse_hours(hours_json)?;

    let slots =
        salon_engine::resolve_availability(staff_id, date, duration_minutes, &existing, &hours);
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

fn admit_json(request_json: &str, existing_json: &str) -> Result<String, String> {
    let input: RequestInput =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {}", e))?;
    let start = TimeOfDay::parse(&input.start).map_err(|e| e.to_string())?;
    let request = SlotRequest {
        staff_id: input.staff_id,
        date: parse_date(&input.date)?,
        interval: Interval::new(start, input.duration_minutes).map_err(|e| e.to_string())?,
    };
    let existing = parse_bookings(existing_json)?;

    let outcome = match salon_engine::try_admit(&request, &existing) {
        Ok(()) => AdmissionDto {
            admitted: true,
            conflicts: Vec::new(),
        },
        Err(rejection) => AdmissionDto {
            admitted: false,
            conflicts: rejection.conflicts.iter().map(ConflictDto::from).collect(),
        },
    };
    to_json(&outcome)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Convert `"H:MM AM/PM"` to minutes since midnight.
#[wasm_bindgen(js_name = "toMinutes")]
pub fn to_minutes(display: &str) -> Result<u32, JsValue> {
    TimeOfDay::parse(display)
        .map(TimeOfDay::minutes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert minutes since midnight to `"H:MM AM/PM"`.
#[wasm_bindgen(js_name = "toDisplay")]
pub fn to_display(minutes: u32) -> Result<String, JsValue> {
    TimeOfDay::from_minutes(minutes)
        .map(TimeOfDay::to_display)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Candidate slots for a service of `duration_minutes`.
///
/// `hours_json` is a `{opening_hour, closing_hour, granularity_minutes}` object
/// or an empty string for the defaults. Returns a JSON array of
/// `{time, start_minutes, end_minutes}` objects.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(hours_json: &str, duration_minutes: u32) -> Result<String, JsValue> {
    slots_json(hours_json, duration_minutes).map_err(|e| JsValue::from_str(&e))
}

/// Every candidate slot for `staff_id` on `date` (`YYYY-MM-DD`), each flagged
/// `available` unless a live booking overlaps it.
///
/// `existing_json` is a JSON array of bookings with `id`, `staff_id`,
/// `appointment_date`, `appointment_time`, and optionally `duration_minutes`
/// and `status`.
#[wasm_bindgen(js_name = "resolveAvailability")]
pub fn resolve_availability(
    staff_id: &str,
    date: &str,
    duration_minutes: u32,
    existing_json: &str,
    hours_json: &str,
) -> Result<String, JsValue> {
    availability_json(staff_id, date, duration_minutes, existing_json, hours_json)
        .map_err(|e| JsValue::from_str(&e))
}

/// Run the admission gate for `{staff_id, date, start, duration_minutes}`.
///
/// Returns `{admitted, conflicts}`; a conflict is a normal outcome, not an
/// error. Errors are reserved for malformed input.
#[wasm_bindgen(js_name = "tryAdmit")]
pub fn try_admit(request_json: &str, existing_json: &str) -> Result<String, JsValue> {
    admit_json(request_json, existing_json).map_err(|e| JsValue::from_str(&e))
}
