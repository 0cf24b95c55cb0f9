use chrono::NaiveDate;
use salonslots_core::{
    availability::compute_available_slots,
    errors::SlotResult,
    models::{slot::Slot, staff::StaffId},
};
use tracing::{info, warn};

use crate::{
    directory::{BookingDirectory, SalonDirectory},
    session::Session,
};

/// Which calendar to compute slots for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub salon_id: String,
    pub staff_id: StaffId,
    pub date: NaiveDate,
}

/// Fetches working hours and bookings, then runs the slot calculator.
pub struct AvailabilityService<S, B> {
    salons: S,
    bookings: B,
}

impl<S, B> AvailabilityService<S, B>
where
    S: SalonDirectory,
    B: BookingDirectory,
{
    pub fn new(salons: S, bookings: B) -> Self {
        Self { salons, bookings }
    }

    /// Both lookups run concurrently; the first failure aborts the call.
    ///
    /// # Errors
    ///
    /// * `SlotError::InvalidConfiguration` - the salon's hours are missing or inverted
    /// * `SlotError::NotFound` - the salon does not exist
    /// * `SlotError::Validation` - a booking record is malformed
    /// * `SlotError::Upstream` - a backend service failed
    pub async fn available_slots(&self, session: &Session, query: &SlotQuery) -> SlotResult<Vec<Slot>> {
        info!(
            salon = %query.salon_id,
            staff = %query.staff_id,
            date = %query.date,
            "Looking up available slots"
        );

        let (working_hours, booked) = tokio::try_join!(
            self.salons.working_hours(session, &query.salon_id),
            self.bookings.booked_intervals(session, &query.salon_id, query.date),
        )
        .inspect_err(|e| warn!(salon = %query.salon_id, "Directory lookup failed: {}", e))?;

        let slots = compute_available_slots(&working_hours, &query.staff_id, &booked, query.date)
            .inspect_err(|e| warn!(salon = %query.salon_id, "Cannot compute slots: {}", e))?;

        info!(slots = slots.len(), bookings = booked.len(), "Computed available slots");
        Ok(slots)
    }
}
