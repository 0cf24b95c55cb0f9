use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

use super::staff::StaffId;

/// A range during which a staff member is already committed to a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub staff_id: StaffId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BookedInterval {
    pub fn new(staff_id: StaffId, start: NaiveDateTime, end: NaiveDateTime) -> SlotResult<Self> {
        if start >= end {
            return Err(SlotError::Validation(format!(
                "booked interval for staff {staff_id} must start before it ends ({start} - {end})"
            )));
        }
        Ok(Self { staff_id, start, end })
    }

    /// True when this interval fully contains `[start, end]`.
    pub fn covers(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start <= start && self.end >= end
    }
}
