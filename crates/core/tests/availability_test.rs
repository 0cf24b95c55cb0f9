use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use salonslots_core::{
    availability::{compute_available_slots, slot_duration},
    errors::SlotError,
    models::{
        booked_interval::BookedInterval, slot::Slot, staff::StaffId, working_hours::WorkingHours,
    },
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap()
}

fn at(value: &str) -> NaiveDateTime {
    date().and_time(time(value))
}

fn hours(start: &str, end: &str) -> WorkingHours {
    WorkingHours {
        start: time(start),
        end: time(end),
    }
}

fn booking(staff: &str, start: &str, end: &str) -> BookedInterval {
    BookedInterval::new(StaffId::from(staff), at(start), at(end)).unwrap()
}

fn windows(slots: &[Slot]) -> Vec<String> {
    slots.iter().map(ToString::to_string).collect()
}

#[rstest]
#[case::no_bookings("09:00", "10:00", vec![], vec!["09:00-09:30", "09:30-10:00"])]
#[case::first_window_booked(
    "09:00", "10:00",
    vec![booking("7", "09:00", "09:30")],
    vec!["09:30-10:00"]
)]
#[case::partial_overlap_keeps_both(
    "09:00", "10:00",
    vec![booking("7", "09:15", "09:45")],
    vec!["09:00-09:30", "09:30-10:00"]
)]
#[case::other_staff_ignored(
    "09:00", "10:00",
    vec![booking("8", "09:00", "09:30")],
    vec!["09:00-09:30", "09:30-10:00"]
)]
#[case::trailing_remainder_dropped("09:00", "09:45", vec![], vec!["09:00-09:30"])]
#[case::fully_booked(
    "09:00", "10:00",
    vec![booking("7", "08:00", "12:00")],
    vec![]
)]
#[case::long_booking_covers_several(
    "09:00", "11:00",
    vec![booking("7", "09:30", "10:30")],
    vec!["09:00-09:30", "10:30-11:00"]
)]
#[case::duplicates_tolerated(
    "09:00", "10:00",
    vec![booking("7", "09:30", "10:00"), booking("7", "09:30", "10:00"), booking("7", "09:00", "10:00")],
    vec![]
)]
#[case::shorter_than_one_slot("09:00", "09:20", vec![], vec![])]
#[case::off_grid_opening("09:10", "10:15", vec![], vec!["09:10-09:40", "09:40-10:10"])]
fn test_compute_available_slots(
    #[case] start: &str,
    #[case] end: &str,
    #[case] booked: Vec<BookedInterval>,
    #[case] expected: Vec<&str>,
) {
    let slots =
        compute_available_slots(&hours(start, end), &StaffId::from("7"), &booked, date()).unwrap();

    assert_eq!(windows(&slots), expected);
}

#[rstest]
#[case::empty("09:00", "09:00")]
#[case::inverted("18:00", "09:00")]
fn test_invalid_working_hours(#[case] start: &str, #[case] end: &str) {
    let result = compute_available_slots(&hours(start, end), &StaffId::from("7"), &[], date());

    assert!(matches!(result, Err(SlotError::InvalidConfiguration(_))));
}

#[test]
fn test_slots_are_anchored_to_date_and_staff() {
    let staff = StaffId::from(42_i64);
    let slots = compute_available_slots(&hours("20:00", "21:00"), &staff, &[], date()).unwrap();

    assert_eq!(
        slots,
        vec![
            Slot {
                staff_id: staff.clone(),
                start: at("20:00"),
                end: at("20:30"),
            },
            Slot {
                staff_id: staff.clone(),
                start: at("20:30"),
                end: at("21:00"),
            },
        ]
    );
    assert!(slots.iter().all(|slot| slot.duration() == slot_duration()));
}

#[test]
fn test_bookings_on_other_days_do_not_block() {
    let next_day = date().succ_opt().unwrap();
    let booked = vec![
        BookedInterval::new(
            StaffId::from("7"),
            next_day.and_time(time("09:00")),
            next_day.and_time(time("10:00")),
        )
        .unwrap(),
    ];

    let slots =
        compute_available_slots(&hours("09:00", "10:00"), &StaffId::from("7"), &booked, date())
            .unwrap();

    assert_eq!(slots.len(), 2);
}

#[test]
fn test_full_business_day() {
    let slots =
        compute_available_slots(&hours("09:00", "21:00"), &StaffId::from("1"), &[], date()).unwrap();

    assert_eq!(slots.len(), 24);
    assert_eq!(slots.first().unwrap().start, at("09:00"));
    assert_eq!(slots.last().unwrap().end, at("21:00"));
}
