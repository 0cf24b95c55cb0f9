use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use proptest::prelude::*;
use salonslots_core::{
    availability::{compute_available_slots, slot_duration},
    models::{booked_interval::BookedInterval, staff::StaffId, working_hours::WorkingHours},
};
use std::collections::HashSet;

const STAFF: [&str; 3] = ["1", "2", "3"];

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn at_minute(minute: u32) -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap() + TimeDelta::minutes(i64::from(minute))
}

fn arb_working_hours() -> impl Strategy<Value = WorkingHours> {
    (0u32..1439)
        .prop_flat_map(|start| (Just(start), (start + 1)..1440))
        .prop_map(|(start, end)| WorkingHours {
            start: NaiveTime::from_num_seconds_from_midnight_opt(start * 60, 0).unwrap(),
            end: NaiveTime::from_num_seconds_from_midnight_opt(end * 60, 0).unwrap(),
        })
}

fn arb_booking() -> impl Strategy<Value = BookedInterval> {
    (0..STAFF.len(), 0u32..1439, 1u32..240).prop_map(|(staff, start, length)| {
        BookedInterval::new(
            StaffId::from(STAFF[staff]),
            at_minute(start),
            at_minute(start + length),
        )
        .unwrap()
    })
}

fn covered(booked: &[BookedInterval], staff: &StaffId, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    booked
        .iter()
        .any(|b| &b.staff_id == staff && b.start <= start && b.end >= end)
}

proptest! {
    #[test]
    fn test_slot_invariants(
        hours in arb_working_hours(),
        booked in prop::collection::vec(arb_booking(), 0..12),
        staff in 0..STAFF.len(),
    ) {
        let staff = StaffId::from(STAFF[staff]);
        let slots = compute_available_slots(&hours, &staff, &booked, day()).unwrap();
        let (window_start, window_end) = hours.resolve(day());

        for pair in slots.windows(2) {
            prop_assert!(pair[0].start < pair[1].start, "slots out of order: {} then {}", pair[0], pair[1]);
        }

        for slot in &slots {
            prop_assert_eq!(slot.end - slot.start, slot_duration());
            prop_assert!(slot.start >= window_start && slot.end <= window_end, "slot {} outside hours", slot);
            prop_assert!(!covered(&booked, &staff, slot.start, slot.end), "slot {} is booked", slot);
            prop_assert_eq!(&slot.staff_id, &staff);
        }

        // Every uncovered candidate on the grid shows up exactly once.
        let emitted: Vec<NaiveDateTime> = slots.iter().map(|slot| slot.start).collect();
        let mut expected = Vec::new();
        let mut start = window_start;
        while start + slot_duration() <= window_end {
            if !covered(&booked, &staff, start, start + slot_duration()) {
                expected.push(start);
            }
            start += slot_duration();
        }
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn test_other_staff_bookings_are_ignored(
        hours in arb_working_hours(),
        booked in prop::collection::vec(arb_booking(), 0..12),
    ) {
        let staff = StaffId::from("1");
        let own: Vec<BookedInterval> = booked.iter().filter(|b| b.staff_id == staff).cloned().collect();

        let with_others = compute_available_slots(&hours, &staff, &booked, day()).unwrap();
        let without_others = compute_available_slots(&hours, &staff, &own, day()).unwrap();

        prop_assert_eq!(with_others, without_others);
    }

    #[test]
    fn test_repeated_calls_agree(
        hours in arb_working_hours(),
        booked in prop::collection::vec(arb_booking(), 0..12),
    ) {
        let staff = StaffId::from("2");
        let first = compute_available_slots(&hours, &staff, &booked, day()).unwrap();
        let second = compute_available_slots(&hours, &staff, &booked, day()).unwrap();

        let unique: HashSet<_> = first.iter().collect();
        prop_assert_eq!(unique.len(), first.len());
        prop_assert_eq!(first, second);
    }
}
