//! Tests for business hours and candidate slot generation.

use salon_engine::{generate_slots, BusinessHours, EngineError, Interval, TimeOfDay};

fn display_starts(hours: &BusinessHours, duration: u32) -> Vec<String> {
    generate_slots(hours, duration)
        .iter()
        .map(|slot| slot.start.to_display())
        .collect()
}

#[test]
fn sixty_minute_service_yields_seventeen_slots() {
    // 9:00 AM .. 5:00 PM; 5:00 PM ends exactly at closing and is kept,
    // 5:30 PM would end at 6:30 PM and is dropped.
    let slots = generate_slots(&BusinessHours::default(), 60);

    assert_eq!(slots.len(), 17);
    assert_eq!(slots[0].start.to_display(), "9:00 AM");
    assert_eq!(slots[16].start.to_display(), "5:00 PM");
    assert_eq!(slots[16].end_minutes(), 18 * 60);
    assert!(slots.iter().all(|s| s.duration_minutes == 60));
}

#[test]
fn granularity_sized_service_fills_the_day() {
    let slots = generate_slots(&BusinessHours::default(), 30);
    assert_eq!(slots.len(), 18);
    assert_eq!(slots.last().unwrap().start.to_display(), "5:30 PM");
}

#[test]
fn long_service_drops_late_starts() {
    // Hair coloring: 180 minutes, last start 3:00 PM.
    let starts = display_starts(&BusinessHours::default(), 180);
    assert_eq!(starts.len(), 13);
    assert_eq!(starts.first().unwrap(), "9:00 AM");
    assert_eq!(starts.last().unwrap(), "3:00 PM");
}

#[test]
fn service_longer_than_the_day_yields_nothing() {
    assert!(generate_slots(&BusinessHours::default(), 10 * 60).is_empty());
}

#[test]
fn slots_are_ascending_and_on_granularity() {
    let hours = BusinessHours {
        opening_hour: 10,
        closing_hour: 14,
        granularity_minutes: 15,
    };
    let slots = generate_slots(&hours, 45);
    assert_eq!(slots.len(), 14);
    for pair in slots.windows(2) {
        assert_eq!(pair[1].start_minutes() - pair[0].start_minutes(), 15);
    }
    assert_eq!(slots[0].start, TimeOfDay::from_hm(10, 0).unwrap());
    assert_eq!(slots[13].start, TimeOfDay::from_hm(13, 15).unwrap());
}

#[test]
fn generation_is_restartable() {
    let hours = BusinessHours::default();
    assert_eq!(generate_slots(&hours, 75), generate_slots(&hours, 75));
}

#[test]
fn zero_duration_or_invalid_hours_yield_nothing() {
    assert!(generate_slots(&BusinessHours::default(), 0).is_empty());

    let inverted = BusinessHours {
        opening_hour: 18,
        closing_hour: 9,
        granularity_minutes: 30,
    };
    assert!(generate_slots(&inverted, 30).is_empty());
}

#[test]
fn validate_rejects_bad_windows() {
    assert!(BusinessHours::default().validate().is_ok());

    let cases = [
        BusinessHours {
            opening_hour: 9,
            closing_hour: 9,
            granularity_minutes: 30,
        },
        BusinessHours {
            opening_hour: 9,
            closing_hour: 25,
            granularity_minutes: 30,
        },
        BusinessHours {
            opening_hour: 9,
            closing_hour: 18,
            granularity_minutes: 0,
        },
    ];
    for hours in cases {
        assert!(matches!(
            hours.validate(),
            Err(EngineError::InvalidBusinessHours(_))
        ));
    }
}

#[test]
fn a_full_day_window_is_valid() {
    let hours = BusinessHours {
        opening_hour: 0,
        closing_hour: 24,
        granularity_minutes: 60,
    };
    let slots = generate_slots(&hours, 60);
    assert_eq!(slots.len(), 24);
    assert_eq!(slots[23].start.to_display(), "11:00 PM");
}

#[test]
fn contains_checks_both_ends() {
    let hours = BusinessHours::default();
    let slot = |display: &str, duration: u32| salon_engine::Interval {
        start: TimeOfDay::parse(display).unwrap(),
        duration_minutes: duration,
    };
    assert!(hours.contains(&slot("9:00 AM", 60)));
    assert!(hours.contains(&slot("5:00 PM", 60)));
    assert!(!hours.contains(&slot("5:30 PM", 60)));
    assert!(!hours.contains(&slot("8:30 AM", 30)));
}

#[test]
fn oversized_durations_never_fit() {
    let hours = BusinessHours::default();
    assert!(generate_slots(&hours, u32::MAX).is_empty());
    assert!(generate_slots(&hours, u32::MAX - 100).is_empty());
    // A full day cannot fit in a nine-hour window either.
    assert!(generate_slots(&hours, 24 * 60).is_empty());
}

#[test]
fn contains_rejects_interval_with_saturated_end() {
    let hours = BusinessHours::default();
    let huge = Interval::new(TimeOfDay::parse("9:00 AM").unwrap(), u32::MAX).unwrap();
    assert_eq!(huge.end_minutes(), u32::MAX);
    assert!(!hours.contains(&huge));
}
