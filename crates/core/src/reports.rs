//! Booking aggregates behind the dashboard charts.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{collections::BTreeMap, fmt};

use crate::{
    errors::{SlotError, SlotResult},
    payload::deserialize_timestamp,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Success,
    Cancelled,
}

/// An amount of money in minor units (cents).
///
/// On the wire it is a decimal number of major units, rounded to two places,
/// and at most `Money::MAX_CENTS` once converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Largest single amount accepted from the wire: ten trillion major units.
    pub const MAX_CENTS: u64 = 1_000_000_000_000_000;

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(de::Error::custom(format!("invalid amount: {amount}")));
        }
        let cents = (amount * 100.0).round();
        if cents > Money::MAX_CENTS as f64 {
            return Err(de::Error::custom(format!(
                "amount {amount} exceeds the maximum of {}",
                Money(Money::MAX_CENTS)
            )));
        }
        Ok(Money(cents as u64))
    }
}

/// A booking as listed by the booking service for reporting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub status: BookingStatus,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: NaiveDateTime,
    pub total_price: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingReport {
    pub total_bookings: usize,
    pub status_counts: BTreeMap<BookingStatus, usize>,
    pub total_revenue: Money,
    pub daily_revenue: BTreeMap<NaiveDate, Money>,
}

/// Folds bookings into status counts and revenue.
///
/// Cancelled bookings are counted but earn nothing, and a day with only
/// cancelled bookings has no revenue entry.
///
/// # Errors
///
/// * `SlotError::Validation` - the revenue total does not fit in `Money`
pub fn summarize_bookings(bookings: &[BookingRecord]) -> SlotResult<BookingReport> {
    bookings.iter().try_fold(BookingReport::default(), |mut report, booking| {
        report.total_bookings += 1;
        *report.status_counts.entry(booking.status).or_default() += 1;

        if booking.status != BookingStatus::Cancelled {
            let overflow = || {
                SlotError::Validation(format!(
                    "revenue overflows after booking at {}",
                    booking.start_time
                ))
            };
            report.total_revenue = report
                .total_revenue
                .checked_add(booking.total_price)
                .ok_or_else(overflow)?;
            let day = report
                .daily_revenue
                .entry(booking.start_time.date())
                .or_default();
            *day = day.checked_add(booking.total_price).ok_or_else(overflow)?;
        }

        Ok(report)
    })
}
