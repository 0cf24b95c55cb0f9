//! # Availability
//!
//! Computes the free 30-minute windows of one staff member on one day.
//!
//! The calculator walks the salon's working hours in fixed steps and drops
//! every candidate that a booking of the same staff member fully contains.
//! A booking that only partially overlaps a candidate does not remove it:
//! exclusion is a containment test (`booking.start <= slot.start` and
//! `booking.end >= slot.end`), not a general overlap test.

use chrono::{NaiveDate, TimeDelta};

use crate::{
    errors::SlotResult,
    models::{booked_interval::BookedInterval, slot::Slot, staff::StaffId, working_hours::WorkingHours},
};

/// Length of every generated slot, in minutes.
pub const SLOT_MINUTES: i64 = 30;

pub fn slot_duration() -> TimeDelta {
    TimeDelta::minutes(SLOT_MINUTES)
}

/// Lists the bookable slots of `staff_id` on `date`, ascending by start.
///
/// Bookings of other staff members are ignored. A trailing remainder shorter
/// than a full slot produces nothing; a slot ending exactly at closing time
/// is kept.
///
/// # Errors
///
/// * `SlotError::InvalidConfiguration` - the working hours are empty or inverted
pub fn compute_available_slots(
    working_hours: &WorkingHours,
    staff_id: &StaffId,
    booked_intervals: &[BookedInterval],
    date: NaiveDate,
) -> SlotResult<Vec<Slot>> {
    working_hours.validate()?;

    let (window_start, window_end) = working_hours.resolve(date);
    let step = slot_duration();

    let booked: Vec<&BookedInterval> = booked_intervals
        .iter()
        .filter(|interval| &interval.staff_id == staff_id)
        .collect();

    let mut slots = Vec::new();
    let mut start = window_start;
    while start + step <= window_end {
        let end = start + step;
        let is_booked = booked.iter().any(|interval| interval.covers(start, end));
        if !is_booked {
            slots.push(Slot {
                staff_id: staff_id.clone(),
                start,
                end,
            });
        }
        start = end;
    }

    Ok(slots)
}
