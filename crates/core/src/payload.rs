//! Parsing of backend responses into strongly typed models.
//!
//! The salon and booking services answer with loosely typed JSON: fields may
//! be absent and ids may be numbers or strings. Everything is checked here so
//! the calculator only ever receives validated `WorkingHours` and
//! `BookedInterval` values.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::{
    errors::{SlotError, SlotResult},
    models::{booked_interval::BookedInterval, staff::StaffId, working_hours::WorkingHours},
};

/// Salon lookup response. Fields other than the opening hours are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonPayload {
    #[serde(default, alias = "openTime")]
    pub opening_time: Option<String>,
    #[serde(default, alias = "closeTime")]
    pub closing_time: Option<String>,
}

impl TryFrom<SalonPayload> for WorkingHours {
    type Error = SlotError;

    fn try_from(payload: SalonPayload) -> SlotResult<Self> {
        let opening = payload.opening_time.ok_or_else(|| {
            SlotError::InvalidConfiguration("salon has no opening time".to_string())
        })?;
        let closing = payload.closing_time.ok_or_else(|| {
            SlotError::InvalidConfiguration("salon has no closing time".to_string())
        })?;
        WorkingHours::parse(&opening, &closing)
    }
}

/// One entry of the booked-slot feed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[serde(default)]
    pub staff_id: Option<StaffId>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl TryFrom<BookingPayload> for BookedInterval {
    type Error = SlotError;

    fn try_from(payload: BookingPayload) -> SlotResult<Self> {
        let staff_id = payload
            .staff_id
            .ok_or_else(|| SlotError::Validation("booking has no staff id".to_string()))?;
        let start = payload
            .start_time
            .as_deref()
            .ok_or_else(|| SlotError::Validation("booking has no start time".to_string()))
            .and_then(parse_timestamp)?;
        let end = payload
            .end_time
            .as_deref()
            .ok_or_else(|| SlotError::Validation("booking has no end time".to_string()))
            .and_then(parse_timestamp)?;
        BookedInterval::new(staff_id, start, end)
    }
}

/// Converts a whole feed, failing on the first malformed record.
pub fn parse_booked_intervals(payloads: Vec<BookingPayload>) -> SlotResult<Vec<BookedInterval>> {
    payloads.into_iter().map(BookedInterval::try_from).collect()
}

/// Parses an RFC 3339 timestamp (keeping the wall clock of its offset) or a
/// naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` timestamp.
pub fn parse_timestamp(value: &str) -> SlotResult<NaiveDateTime> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.naive_local());
    }

    const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| SlotError::Validation(format!("Invalid timestamp: {value:?}")))
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
