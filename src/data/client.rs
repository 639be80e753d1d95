//! Open-Meteo forecast API client
//!
//! Requests the current reading, the hourly arrays and the daily arrays in one
//! call. Times come back in the location's local timezone.

use reqwest::Client;
use thiserror::Error;

use super::payload::ForecastPayload;

/// Base URL for the Open-Meteo API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Variables of the `current` block
const CURRENT_VARIABLES: &str = "temperature_2m,is_day,wind_speed_10m,winddirection_10m,weathercode";

/// Variables of the `hourly` block
const HOURLY_VARIABLES: &str = "is_day,weathercode,temperature_2m";

/// Variables of the `daily` block
const DAILY_VARIABLES: &str =
    "weathercode,temperature_2m_min,temperature_2m_max,precipitation_hours,sunshine_duration";

/// Seven days cover the overnight window, which summarizes days 2 to 5
const FORECAST_DAYS: u32 = 7;

/// Errors that can occur when loading a forecast payload
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Failed to read a payload file
    #[error("Failed to read forecast file: {0}")]
    Io(#[from] std::io::Error),
}

/// Client for fetching forecasts from the Open-Meteo API
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoClient {
    /// Create a new client against the public API
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    /// Create a new client with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint, e.g. a self-hosted instance
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for the given coordinates
    pub fn build_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&wind_speed_unit=kmh&current={}&hourly={}&daily={}&timezone=auto&forecast_days={}",
            self.base_url,
            lat,
            lon,
            CURRENT_VARIABLES,
            HOURLY_VARIABLES,
            DAILY_VARIABLES,
            FORECAST_DAYS
        )
    }

    /// Fetch the forecast payload for the given coordinates
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(ForecastPayload)` - The decoded response
    /// * `Err(FetchError)` - If the request, the HTTP status or parsing fails
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<ForecastPayload, FetchError> {
        let url = self.build_url(lat, lon);
        tracing::debug!(%url, "requesting forecast");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let payload = parse_payload(&text)?;

        Ok(payload)
    }
}

/// Decode a response body into a payload
pub fn parse_payload(text: &str) -> Result<ForecastPayload, FetchError> {
    Ok(serde_json::from_str(text)?)
}
