//! Typed raw input of the assembler
//!
//! Built from a decoded payload; any required field that is absent turns into
//! `ForecastError::IncompleteData` naming the field.

use crate::data::payload::{DayFlag, ForecastPayload};

use super::{ForecastError, Units};

/// The current observation as received
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentReading {
    pub time_iso: String,
    pub temperature: f64,
    pub is_day: bool,
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: f64,
    pub weather_code: i32,
}

/// Hourly parallel arrays, index 0 is today 00:00
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    pub is_day: Vec<bool>,
    pub weather_code: Vec<i32>,
    pub temperature: Vec<f64>,
}

/// Daily parallel arrays, index 0 is today
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    pub date_iso: Vec<String>,
    pub temp_min: Vec<f64>,
    pub temp_max: Vec<f64>,
    /// API day code; kept for shape fidelity, the summaries recompute their own
    pub weather_code: Vec<i32>,
    pub precipitation_hours: Option<Vec<f64>>,
    /// Seconds of sunshine
    pub sunshine_duration: Option<Vec<f64>>,
}

/// Complete raw input for one assembly
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    pub current: CurrentReading,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
    pub units: Units,
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, ForecastError> {
    value.ok_or_else(|| ForecastError::IncompleteData(field.to_string()))
}

fn flags(values: Vec<DayFlag>) -> Vec<bool> {
    values.into_iter().map(|flag| flag.0).collect()
}

impl TryFrom<ForecastPayload> for RawSeries {
    type Error = ForecastError;

    fn try_from(payload: ForecastPayload) -> Result<Self, Self::Error> {
        RawSeries::from_payload(payload)
    }
}

impl RawSeries {
    /// Extracts the fields the assembler needs from a payload
    ///
    /// # Errors
    /// `ForecastError::IncompleteData` with the payload path of the first
    /// missing field, e.g. `"hourly.temperature_2m"`.
    pub fn from_payload(payload: ForecastPayload) -> Result<Self, ForecastError> {
        let current = require(payload.current, "current")?;
        let current = CurrentReading {
            time_iso: require(current.time, "current.time")?,
            temperature: require(current.temperature_2m, "current.temperature_2m")?,
            is_day: require(current.is_day, "current.is_day")?.0,
            wind_speed_kmh: require(current.wind_speed_10m, "current.wind_speed_10m")?,
            wind_direction_deg: require(current.winddirection_10m, "current.winddirection_10m")?,
            weather_code: require(current.weathercode, "current.weathercode")?,
        };

        let units = require(payload.current_units, "current_units")?;
        let units = Units {
            temperature: require(units.temperature_2m, "current_units.temperature_2m")?,
            wind_speed: require(units.wind_speed_10m, "current_units.wind_speed_10m")?,
        };

        let hourly = require(payload.hourly, "hourly")?;
        let hourly = HourlySeries {
            is_day: flags(require(hourly.is_day, "hourly.is_day")?),
            weather_code: require(hourly.weathercode, "hourly.weathercode")?,
            temperature: require(hourly.temperature_2m, "hourly.temperature_2m")?,
        };

        let daily = require(payload.daily, "daily")?;
        let daily = DailySeries {
            date_iso: require(daily.time, "daily.time")?,
            temp_min: require(daily.temperature_2m_min, "daily.temperature_2m_min")?,
            temp_max: require(daily.temperature_2m_max, "daily.temperature_2m_max")?,
            weather_code: daily.weathercode.unwrap_or_default(),
            precipitation_hours: daily.precipitation_hours,
            sunshine_duration: daily.sunshine_duration,
        };

        Ok(RawSeries {
            current,
            hourly,
            daily,
            units,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::payload::{CurrentBlock, CurrentUnits, DailyBlock, HourlyBlock};

    fn complete_payload() -> ForecastPayload {
        ForecastPayload {
            current: Some(CurrentBlock {
                time: Some("2024-06-15T14:30".to_string()),
                temperature_2m: Some(21.4),
                is_day: Some(DayFlag(true)),
                wind_speed_10m: Some(11.0),
                winddirection_10m: Some(200.0),
                weathercode: Some(1),
            }),
            current_units: Some(CurrentUnits {
                temperature_2m: Some("°C".to_string()),
                wind_speed_10m: Some("km/h".to_string()),
            }),
            hourly: Some(HourlyBlock {
                is_day: Some(vec![DayFlag(false), DayFlag(true)]),
                weathercode: Some(vec![0, 1]),
                temperature_2m: Some(vec![10.0, 11.0]),
            }),
            daily: Some(DailyBlock {
                time: Some(vec!["2024-06-15".to_string()]),
                temperature_2m_min: Some(vec![9.5]),
                temperature_2m_max: Some(vec![22.5]),
                weathercode: None,
                precipitation_hours: None,
                sunshine_duration: Some(vec![36000.0]),
            }),
        }
    }

    #[test]
    fn test_from_complete_payload() {
        let series = RawSeries::from_payload(complete_payload()).unwrap();
        assert_eq!(series.current.time_iso, "2024-06-15T14:30");
        assert!(series.current.is_day);
        assert_eq!(series.hourly.is_day, vec![false, true]);
        assert_eq!(series.daily.date_iso, vec!["2024-06-15".to_string()]);
        assert!(series.daily.weather_code.is_empty());
        assert_eq!(series.daily.sunshine_duration, Some(vec![36000.0]));
        assert_eq!(series.units.wind_speed, "km/h");
    }

    #[test]
    fn test_missing_block_is_incomplete() {
        let mut payload = complete_payload();
        payload.hourly = None;
        assert_eq!(
            RawSeries::from_payload(payload),
            Err(ForecastError::IncompleteData("hourly".to_string()))
        );
    }

    #[test]
    fn test_missing_field_names_path() {
        let mut payload = complete_payload();
        if let Some(current) = payload.current.as_mut() {
            current.winddirection_10m = None;
        }
        assert_eq!(
            RawSeries::from_payload(payload),
            Err(ForecastError::IncompleteData("current.winddirection_10m".to_string()))
        );

        let mut payload = complete_payload();
        if let Some(daily) = payload.daily.as_mut() {
            daily.temperature_2m_max = None;
        }
        assert_eq!(
            RawSeries::from_payload(payload),
            Err(ForecastError::IncompleteData("daily.temperature_2m_max".to_string()))
        );
    }

    #[test]
    fn test_missing_units_is_incomplete() {
        let mut payload = complete_payload();
        payload.current_units = Some(CurrentUnits::default());
        assert_eq!(
            RawSeries::from_payload(payload),
            Err(ForecastError::IncompleteData("current_units.temperature_2m".to_string()))
        );
    }
}
