//! # Directory Configuration Module
//!
//! Loads the backend endpoints from environment variables:
//!
//! - `BOOKING_SERVICE_URL`: booking service base URL (default: "http://localhost:5005")
//! - `SALON_SERVICE_URL`: salon service base URL (default: "http://localhost:5002")
//! - `DIRECTORY_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 10)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use reqwest::Url;
use std::{env, time::Duration};
use tracing::Level;

/// Endpoints and limits for talking to the backend services
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use salonslots_directory::config::DirectoryConfig;
///
/// fn example() -> Result<()> {
///     let config = DirectoryConfig::from_env()?;
///     println!("Bookings come from {}", config.booking_service_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the booking service
    pub booking_service_url: Url,

    /// Base URL of the salon service
    pub salon_service_url: Url,

    /// Timeout applied to every request
    pub request_timeout: Duration,

    /// Log level for the application
    pub log_level: Level,
}

impl DirectoryConfig {
    /// Creates a DirectoryConfig from environment variables
    ///
    /// Unset variables fall back to the defaults listed in the module docs.
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - Configuration object or error
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `BOOKING_SERVICE_URL` or `SALON_SERVICE_URL` is not a valid URL
    /// - `DIRECTORY_REQUEST_TIMEOUT_SECONDS` is not a whole number of seconds
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Creates a DirectoryConfig from variables resolved through `lookup`
    ///
    /// `from_env` delegates here with `std::env::var`. Tests pass a map
    /// lookup instead so they never touch the process environment.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Errors
    ///
    /// Same as `from_env`.
    ///
    /// # Example
    ///
    /// ```
    /// use salonslots_directory::config::DirectoryConfig;
    ///
    /// let config = DirectoryConfig::from_source(|key| match key {
    ///     "SALON_SERVICE_URL" => Some("http://salons.internal".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.salon_service_url.host_str(), Some("salons.internal"));
    /// ```
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let booking_service_url = lookup("BOOKING_SERVICE_URL")
            .unwrap_or_else(|| "http://localhost:5005".to_string())
            .parse::<Url>()
            .wrap_err("Invalid BOOKING_SERVICE_URL value")?;

        let salon_service_url = lookup("SALON_SERVICE_URL")
            .unwrap_or_else(|| "http://localhost:5002".to_string())
            .parse::<Url>()
            .wrap_err("Invalid SALON_SERVICE_URL value")?;

        let request_timeout = lookup("DIRECTORY_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .wrap_err("Invalid DIRECTORY_REQUEST_TIMEOUT_SECONDS value")?;

        Ok(Self {
            booking_service_url,
            salon_service_url,
            request_timeout,
            log_level: log_level_from_source(&lookup),
        })
    }
}

/// Reads `LOG_LEVEL` from the environment
///
/// Never fails, so binaries can set up logging before loading any config
/// that might be invalid.
pub fn log_level_from_env() -> Level {
    log_level_from_source(|key| env::var(key).ok())
}

/// Resolves `LOG_LEVEL` through `lookup`; unknown or unset values mean `INFO`
pub fn log_level_from_source(lookup: impl Fn(&str) -> Option<String>) -> Level {
    match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
