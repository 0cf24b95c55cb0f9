pub mod booked_interval;
pub mod slot;
pub mod staff;
pub mod working_hours;
