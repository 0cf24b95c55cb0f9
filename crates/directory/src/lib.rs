//! # SalonSlots Directory
//!
//! Client side of the salon and booking backend services.
//!
//! - **Config**: service URLs and timeouts from the environment
//! - **Session**: the caller's credentials, passed explicitly to every call
//! - **Directory**: the `SalonDirectory` and `BookingDirectory` seams
//! - **Http**: the reqwest implementation of both seams
//! - **Service**: fetches what the slot calculator needs and runs it

/// Configuration for the backend service endpoints
pub mod config;
/// Collaborator traits consumed by the availability service
pub mod directory;
/// HTTP implementation of the collaborators
pub mod http;
/// mockall doubles of the collaborators
pub mod mock;
/// Availability lookup combining both collaborators with the calculator
pub mod service;
/// Explicit session context
pub mod session;
