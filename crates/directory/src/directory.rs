use async_trait::async_trait;
use chrono::NaiveDate;
use salonslots_core::{
    errors::SlotResult,
    models::{booked_interval::BookedInterval, working_hours::WorkingHours},
};

use crate::session::Session;

/// Source of a salon's opening hours
#[async_trait]
pub trait SalonDirectory: Send + Sync {
    async fn working_hours(&self, session: &Session, salon_id: &str) -> SlotResult<WorkingHours>;
}

/// Source of the bookings already occupying a salon's calendar
#[async_trait]
pub trait BookingDirectory: Send + Sync {
    /// Booked intervals of every staff member of `salon_id` on `date`
    async fn booked_intervals(
        &self,
        session: &Session,
        salon_id: &str,
        date: NaiveDate,
    ) -> SlotResult<Vec<BookedInterval>>;
}
