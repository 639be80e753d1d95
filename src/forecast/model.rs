//! Output model handed to the renderer

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DAY_SUMMARIES, HOUR_SAMPLES};

/// One of the eight compass points used for the wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// All points clockwise, starting at north
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    /// Maps a wind direction in degrees to the nearest compass point
    ///
    /// Each point covers a 45° sector centered on it, so `0..22.5` and
    /// `337.5..360` both map to north. Values outside `0..360` wrap.
    pub fn from_degrees(degrees: f64) -> Self {
        let sector = ((degrees + 22.5) / 45.0).floor() as i64;
        Self::ALL[sector.rem_euclid(8) as usize]
    }

    /// Short label, e.g. "NE"
    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit labels passed through from the payload unmodified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    /// Temperature unit, e.g. "°C"
    pub temperature: String,
    /// Wind speed unit, e.g. "km/h"
    pub wind_speed: String,
}

/// The current observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPoint {
    /// Hour of the observation, two digits
    pub hour: String,
    /// Day of month, two digits
    pub day: String,
    /// Month, two digits
    pub month: String,
    /// Observation time as "YYYY-MM-DD HH:MM"; stable across identical payloads
    pub update_timestamp: String,
    /// Temperature
    pub temperature: f64,
    /// Whether the sun is up
    pub is_day: bool,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Wind direction
    pub wind_direction: CompassPoint,
    /// Raw WMO weather code
    pub weather_code: i32,
}

/// One representative hourly sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourPoint {
    /// Hour label, two digits
    pub hour_label: String,
    /// Temperature
    pub temperature: f64,
    /// Raw WMO weather code
    pub weather_code: i32,
    /// Whether the sun is up at that hour
    pub is_day: bool,
}

/// Summary of one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    /// Day of month, two digits
    pub day_of_month: String,
    /// Month, two digits
    pub month: String,
    /// Day of week, 0 = Monday .. 6 = Sunday
    pub weekday: u32,
    /// Rounded minimum temperature
    pub temp_min: i64,
    /// Rounded maximum temperature
    pub temp_max: i64,
    /// Raw WMO code when the day is unambiguous, otherwise a synthetic code >= 1000
    pub aggregated_code: i32,
    /// Rounded hours with precipitation, when the payload carries them
    pub precipitation_hours: Option<i64>,
    /// Rounded hours of sunshine, when the payload carries them
    pub sunshine_hours: Option<i64>,
}

/// Complete result of one update cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Unit labels for temperature and wind speed
    pub units: Units,
    /// Current observation
    pub current: CurrentPoint,
    /// Hourly samples, earliest first
    pub hours: [HourPoint; HOUR_SAMPLES],
    /// Daily summaries, earliest first
    pub days: [DayPoint; DAY_SUMMARIES],
    /// Index of the first daily slot shown (1 = tomorrow, 2 = day after)
    pub daily_offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_north_sector() {
        assert_eq!(CompassPoint::from_degrees(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(22.4), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(44.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_degrees(337.5), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(360.0), CompassPoint::N);
    }

    #[test]
    fn test_compass_all_points() {
        let expected = [
            (45.0, CompassPoint::NE),
            (90.0, CompassPoint::E),
            (135.0, CompassPoint::SE),
            (180.0, CompassPoint::S),
            (225.0, CompassPoint::SW),
            (270.0, CompassPoint::W),
            (315.0, CompassPoint::NW),
        ];
        for (degrees, point) in expected {
            assert_eq!(CompassPoint::from_degrees(degrees), point, "{}°", degrees);
        }
    }

    #[test]
    fn test_compass_wraps_out_of_range_values() {
        assert_eq!(CompassPoint::from_degrees(-90.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_degrees(450.0), CompassPoint::E);
    }

    #[test]
    fn test_compass_display() {
        assert_eq!(CompassPoint::SW.to_string(), "SW");
        assert_eq!(format!("{}", CompassPoint::N), "N");
    }
}
