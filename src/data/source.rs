//! Where forecast payloads come from

use std::path::PathBuf;

use super::client::{parse_payload, FetchError, OpenMeteoClient};
use super::payload::ForecastPayload;

/// A source of forecast payloads
#[derive(Debug, Clone)]
pub enum ForecastSource {
    /// Live forecast for a location
    OpenMeteo {
        client: OpenMeteoClient,
        latitude: f64,
        longitude: f64,
    },
    /// A saved API response on disk
    File(PathBuf),
}

impl ForecastSource {
    /// Live source for the given coordinates using the default client
    pub fn open_meteo(latitude: f64, longitude: f64) -> Self {
        ForecastSource::OpenMeteo {
            client: OpenMeteoClient::new(),
            latitude,
            longitude,
        }
    }

    /// Load one payload
    pub async fn load(&self) -> Result<ForecastPayload, FetchError> {
        match self {
            ForecastSource::OpenMeteo {
                client,
                latitude,
                longitude,
            } => client.fetch(*latitude, *longitude).await,
            ForecastSource::File(path) => {
                tracing::debug!(path = %path.display(), "reading forecast file");
                let text = tokio::fs::read_to_string(path).await?;
                parse_payload(&text)
            }
        }
    }

    /// Short description for log lines
    pub fn describe(&self) -> String {
        match self {
            ForecastSource::OpenMeteo {
                latitude,
                longitude,
                ..
            } => format!("open-meteo ({}, {})", latitude, longitude),
            ForecastSource::File(path) => format!("file {}", path.display()),
        }
    }
}
