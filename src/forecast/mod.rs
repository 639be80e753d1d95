//! Forecast windowing and weather-code aggregation
//!
//! Reduces a raw multi-day hourly forecast into the small fixed-size model the
//! display shows: one current reading, three hourly samples and four daily
//! summaries. Everything in here is pure: no I/O, no logging, no clock access.

pub mod aggregate;
pub mod assembler;
pub mod model;
pub mod rounding;
pub mod series;
pub mod time;
pub mod window;

pub use aggregate::{aggregate_day, aggregate_codes, is_synthetic};
pub use assembler::{AssemblerConfig, ForecastAssembler};
pub use model::{CompassPoint, CurrentPoint, DayPoint, ForecastSnapshot, HourPoint, Units};
pub use rounding::round_half_away;
pub use series::{CurrentReading, DailySeries, HourlySeries, RawSeries};
pub use time::{decode_time, weekday, DecodedTime};
pub use window::{select_window, HourLabelStyle, HourWindow};

use thiserror::Error;

/// Number of hourly samples in a snapshot
pub const HOUR_SAMPLES: usize = 3;

/// Number of daily summaries in a snapshot
pub const DAY_SUMMARIES: usize = 4;

/// Hours per forecast day in the hourly arrays
pub const HOURS_PER_DAY: usize = 24;

/// Minimum hourly horizon (5 days) accepted by the assembler
pub const MIN_HOURLY_HORIZON: usize = 5 * HOURS_PER_DAY;

/// Minimum daily horizon, enough for the overnight window at every hour
pub const MIN_DAILY_HORIZON: usize = 6;

/// Errors produced while assembling a forecast snapshot
///
/// All of them are fatal to the current update cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// A timestamp or date string does not have the expected shape
    #[error("Malformed timestamp: {0}")]
    Format(String),

    /// An array is shorter than the horizon the computation needs
    #[error("Forecast horizon too short: {array} has {len} entries, need {required}")]
    OutOfRange {
        /// Payload path of the array
        array: String,
        /// Actual length
        len: usize,
        /// Required length
        required: usize,
    },

    /// A required field is absent from the payload
    #[error("Missing expected field in payload: {0}")]
    IncompleteData(String),
}

impl ForecastError {
    pub(crate) fn out_of_range(array: &str, len: usize, required: usize) -> Self {
        ForecastError::OutOfRange {
            array: array.to_string(),
            len,
            required,
        }
    }
}
