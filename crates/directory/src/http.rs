//! # HTTP Directory
//!
//! `HttpDirectory` talks to the salon and booking services over REST:
//!
//! - `GET {SALON_SERVICE_URL}/api/salons/{salon_id}`
//! - `GET {BOOKING_SERVICE_URL}/api/bookings/slots/salon/{salon_id}/date/{YYYY-MM-DD}`
//!
//! Responses are parsed through `salonslots_core::payload`, so callers only
//! ever see validated models.

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::WrapErr;
use reqwest::{Client, StatusCode, Url, header::AUTHORIZATION};
use salonslots_core::{
    errors::{SlotError, SlotResult},
    models::{booked_interval::BookedInterval, working_hours::WorkingHours},
    payload::{BookingPayload, SalonPayload, parse_booked_intervals},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config::DirectoryConfig,
    directory::{BookingDirectory, SalonDirectory},
    session::Session,
};

/// REST client for both backend services
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    config: DirectoryConfig,
}

impl HttpDirectory {
    pub fn new(config: DirectoryConfig) -> eyre::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn salon_url(&self, salon_id: &str) -> SlotResult<Url> {
        endpoint(&self.config.salon_service_url, &["api", "salons", salon_id])
    }

    pub fn booked_slots_url(&self, salon_id: &str, date: NaiveDate) -> SlotResult<Url> {
        let date = date.format("%Y-%m-%d").to_string();
        endpoint(
            &self.config.booking_service_url,
            &["api", "bookings", "slots", "salon", salon_id, "date", &date],
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        url: Url,
        resource: &str,
    ) -> SlotResult<T> {
        debug!(%url, user = ?session.user_id, "Requesting {}", resource);

        let mut request = self.client.get(url.clone());
        if let Some(bearer) = session.bearer() {
            request = request.header(AUTHORIZATION, bearer);
        }

        let response = request
            .send()
            .await
            .wrap_err_with(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SlotError::NotFound(format!("{resource} at {url}")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, %status, "Backend service rejected request");
            return Err(SlotError::Upstream(eyre::eyre!(
                "{url} returned {status}: {body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SlotError::Validation(format!("Malformed {resource} response: {e}")))
    }
}

#[async_trait]
impl SalonDirectory for HttpDirectory {
    async fn working_hours(&self, session: &Session, salon_id: &str) -> SlotResult<WorkingHours> {
        let url = self.salon_url(salon_id)?;
        let payload: SalonPayload = self.get_json(session, url, "salon").await?;
        WorkingHours::try_from(payload)
    }
}

#[async_trait]
impl BookingDirectory for HttpDirectory {
    async fn booked_intervals(
        &self,
        session: &Session,
        salon_id: &str,
        date: NaiveDate,
    ) -> SlotResult<Vec<BookedInterval>> {
        let url = self.booked_slots_url(salon_id, date)?;
        let payloads: Vec<BookingPayload> = self.get_json(session, url, "booked slots").await?;
        debug!(count = payloads.len(), "Received booked slots");
        parse_booked_intervals(payloads)
    }
}

fn endpoint(base: &Url, segments: &[&str]) -> SlotResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| SlotError::InvalidConfiguration(format!("{base} cannot be a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
