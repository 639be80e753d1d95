//! Forecast data acquisition
//!
//! The Open-Meteo response model, the HTTP client that fetches it and the
//! source abstraction the refresh task loads payloads through.

pub mod client;
pub mod payload;
pub mod source;

pub use client::{FetchError, OpenMeteoClient};
pub use payload::{CurrentBlock, CurrentUnits, DailyBlock, DayFlag, ForecastPayload, HourlyBlock};
pub use source::ForecastSource;
