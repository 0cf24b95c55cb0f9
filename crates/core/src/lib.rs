//! # SalonSlots Core
//!
//! Domain types and pure computations for the salon booking dashboards.
//!
//! - **Models**: staff ids, working hours, booked intervals and slots
//! - **Availability**: the 30-minute slot calculator
//! - **Payload**: parsing of loosely typed backend responses into models
//! - **Reports**: booking aggregates used by the reporting views
//!
//! Nothing in this crate performs I/O.

pub mod availability;
pub mod errors;
pub mod models;
pub mod payload;
pub mod reports;
