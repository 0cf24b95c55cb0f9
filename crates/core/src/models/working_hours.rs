use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

/// Opening and closing time of a salon on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingHours {
    /// Builds working hours, rejecting empty or inverted ranges.
    pub fn new(start: NaiveTime, end: NaiveTime) -> SlotResult<Self> {
        let hours = Self { start, end };
        hours.validate()?;
        Ok(hours)
    }

    /// Parses `"HH:MM"` or `"HH:MM:SS"` bounds, e.g. `("09:00", "21:00")`.
    pub fn parse(start: &str, end: &str) -> SlotResult<Self> {
        Self::new(parse_time_of_day(start)?, parse_time_of_day(end)?)
    }

    pub fn validate(&self) -> SlotResult<()> {
        if self.start >= self.end {
            return Err(SlotError::InvalidConfiguration(format!(
                "working hours must start before they end (got {} - {})",
                self.start.format("%H:%M"),
                self.end.format("%H:%M"),
            )));
        }
        Ok(())
    }

    /// Anchors both bounds to `date`.
    pub fn resolve(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (date.and_time(self.start), date.and_time(self.end))
    }
}

pub fn parse_time_of_day(value: &str) -> SlotResult<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| SlotError::InvalidConfiguration(format!("Invalid time of day: {value:?}")))
}
