use std::error::Error;
use salonslots_core::errors::{SlotError, SlotResult};

#[test]
fn test_slot_error_display() {
    let configuration = SlotError::InvalidConfiguration("working hours are inverted".to_string());
    let validation = SlotError::Validation("booking has no staff id".to_string());
    let not_found = SlotError::NotFound("salon 12".to_string());
    let upstream = SlotError::Upstream(eyre::eyre!("connection refused"));
    let internal = SlotError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        configuration.to_string(),
        "Invalid configuration: working hours are inverted"
    );
    assert_eq!(validation.to_string(), "Validation error: booking has no staff id");
    assert_eq!(not_found.to_string(), "Resource not found: salon 12");
    assert!(upstream.to_string().contains("Upstream service error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_eyre_conversion() {
    let report = eyre::eyre!("booking service returned 502");
    let slot_error: SlotError = report.into();

    assert!(matches!(slot_error, SlotError::Upstream(_)));
    assert!(slot_error.to_string().contains("502"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let slot_error: SlotError = boxed_error.into();

    assert!(slot_error.source().is_some());
    assert!(slot_error.to_string().contains("IO error"));
}

#[test]
fn test_slot_result() {
    let result: SlotResult<usize> = Ok(2);
    assert_eq!(result.unwrap(), 2);

    let result: SlotResult<usize> = Err(SlotError::InvalidConfiguration("empty".to_string()));
    assert!(result.is_err());
}
