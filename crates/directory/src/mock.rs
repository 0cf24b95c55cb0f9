use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use salonslots_core::{
    errors::SlotResult,
    models::{booked_interval::BookedInterval, working_hours::WorkingHours},
};

use crate::{
    directory::{BookingDirectory, SalonDirectory},
    session::Session,
};

// Mock collaborators for testing
mock! {
    pub Salons {}

    #[async_trait]
    impl SalonDirectory for Salons {
        async fn working_hours(&self, session: &Session, salon_id: &str) -> SlotResult<WorkingHours>;
    }
}

mock! {
    pub Bookings {}

    #[async_trait]
    impl BookingDirectory for Bookings {
        async fn booked_intervals(
            &self,
            session: &Session,
            salon_id: &str,
            date: NaiveDate,
        ) -> SlotResult<Vec<BookedInterval>>;
    }
}
