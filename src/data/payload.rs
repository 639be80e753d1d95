//! Open-Meteo response model
//!
//! Every field is optional: a missing field is reported by the forecast
//! engine as incomplete data naming the field, rather than as an opaque JSON
//! error. Only the fields the display needs are modeled; everything else in
//! the response is ignored.

use serde::{Deserialize, Serialize};

/// Day/night flag as sent by the API
///
/// Open-Meteo encodes `is_day` as `0`/`1`; plain booleans are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FlagRepr", into = "u8")]
pub struct DayFlag(pub bool);

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

impl From<FlagRepr> for DayFlag {
    fn from(repr: FlagRepr) -> Self {
        match repr {
            FlagRepr::Bool(b) => DayFlag(b),
            FlagRepr::Int(i) => DayFlag(i != 0),
        }
    }
}

impl From<DayFlag> for u8 {
    fn from(flag: DayFlag) -> Self {
        u8::from(flag.0)
    }
}

impl From<bool> for DayFlag {
    fn from(b: bool) -> Self {
        DayFlag(b)
    }
}

/// Top-level forecast response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub current: Option<CurrentBlock>,
    pub current_units: Option<CurrentUnits>,
    pub hourly: Option<HourlyBlock>,
    pub daily: Option<DailyBlock>,
}

/// `current` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentBlock {
    /// Local time, "YYYY-MM-DDTHH:MM"
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub is_day: Option<DayFlag>,
    pub wind_speed_10m: Option<f64>,
    #[serde(alias = "wind_direction_10m")]
    pub winddirection_10m: Option<f64>,
    #[serde(alias = "weather_code")]
    pub weathercode: Option<i32>,
}

/// `current_units` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUnits {
    pub temperature_2m: Option<String>,
    pub wind_speed_10m: Option<String>,
}

/// `hourly` block, parallel arrays indexed by absolute forecast hour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyBlock {
    pub is_day: Option<Vec<DayFlag>>,
    #[serde(alias = "weather_code")]
    pub weathercode: Option<Vec<i32>>,
    pub temperature_2m: Option<Vec<f64>>,
}

/// `daily` block, parallel arrays indexed by forecast day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBlock {
    /// Dates, "YYYY-MM-DD"
    pub time: Option<Vec<String>>,
    pub temperature_2m_min: Option<Vec<f64>>,
    pub temperature_2m_max: Option<Vec<f64>>,
    #[serde(alias = "weather_code")]
    pub weathercode: Option<Vec<i32>>,
    pub precipitation_hours: Option<Vec<f64>>,
    /// Seconds of sunshine per day
    pub sunshine_duration: Option<Vec<f64>>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_flag_accepts_int_and_bool() {
        let flags: Vec<DayFlag> = serde_json::from_str("[0, 1, true, false, 2]").unwrap();
        assert_eq!(
            flags,
            vec![DayFlag(false), DayFlag(true), DayFlag(true), DayFlag(false), DayFlag(true)]
        );
    }

    #[test]
    fn test_day_flag_serializes_as_int() {
        let json = serde_json::to_string(&vec![DayFlag(true), DayFlag(false)]).unwrap();
        assert_eq!(json, "[1,0]");
    }

    #[test]
    fn test_parse_current_block() {
        let json = r#"{
            "current_units": {"time": "iso8601", "temperature_2m": "°C", "wind_speed_10m": "km/h"},
            "current": {
                "time": "2024-07-15T14:00",
                "interval": 900,
                "temperature_2m": 22.5,
                "is_day": 1,
                "wind_speed_10m": 12.5,
                "winddirection_10m": 270,
                "weathercode": 2
            }
        }"#;

        let payload: ForecastPayload = serde_json::from_str(json).unwrap();
        let current = payload.current.unwrap();
        assert_eq!(current.time.as_deref(), Some("2024-07-15T14:00"));
        assert_eq!(current.is_day, Some(DayFlag(true)));
        assert_eq!(current.winddirection_10m, Some(270.0));
        assert_eq!(current.weathercode, Some(2));
        let units = payload.current_units.unwrap();
        assert_eq!(units.temperature_2m.as_deref(), Some("°C"));
        assert!(payload.hourly.is_none());
        assert!(payload.daily.is_none());
    }

    #[test]
    fn test_parse_accepts_new_field_names() {
        let json = r#"{
            "current": {"weather_code": 61, "wind_direction_10m": 90},
            "hourly": {"weather_code": [1, 2]},
            "daily": {"weather_code": [3]}
        }"#;

        let payload: ForecastPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.current.as_ref().unwrap().weathercode, Some(61));
        assert_eq!(payload.current.as_ref().unwrap().winddirection_10m, Some(90.0));
        assert_eq!(payload.hourly.unwrap().weathercode, Some(vec![1, 2]));
        assert_eq!(payload.daily.unwrap().weathercode, Some(vec![3]));
    }

    #[test]
    fn test_parse_empty_object() {
        let payload: ForecastPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, ForecastPayload::default());
    }

    #[test]
    fn test_parse_malformed_json() {
        let result: Result<ForecastPayload, _> = serde_json::from_str("{ invalid json }");
        assert!(result.is_err());
    }
}
