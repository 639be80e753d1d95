//! Weather glyphs and wind arrows
//!
//! Raw WMO codes map directly; clear and partly cloudy skies have separate
//! night glyphs. Synthetic day codes (>= 1000) go through a fixed table of
//! the sums the aggregator can produce, shown as their most significant
//! condition. Anything else is "n/a".

use crate::forecast::{is_synthetic, CompassPoint};

const SUN: &str = "\u{2600}"; // ☀
const MOON: &str = "\u{1F319}"; // 🌙
const SUN_SMALL_CLOUD: &str = "\u{1F324}"; // 🌤
const SUN_CLOUD: &str = "\u{26C5}"; // ⛅
const CLOUD: &str = "\u{2601}"; // ☁
const FOG: &str = "\u{1F32B}"; // 🌫
const SHOWERS: &str = "\u{1F326}"; // 🌦
const RAIN: &str = "\u{1F327}"; // 🌧
const SNOW: &str = "\u{1F328}"; // 🌨
const THUNDERSTORM: &str = "\u{26C8}"; // ⛈
const NOT_AVAILABLE: &str = "n/a";

/// What a code shows, independent of glyph set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    FreezingRain,
    Rain,
    Showers,
    Snow,
    /// Rain and snow on the same day
    Sleet,
    Thunderstorm,
    /// Mixed day with sunny spells and rain
    SunAndRain,
    Unknown,
}

impl Condition {
    /// Classifies a raw or synthetic weather code
    pub fn from_code(code: i32) -> Self {
        if is_synthetic(code) {
            return Self::from_synthetic(code);
        }
        match code {
            0 => Condition::Clear,
            1 => Condition::MainlyClear,
            2 => Condition::PartlyCloudy,
            3 => Condition::Overcast,
            45 | 48 => Condition::Fog,
            51 | 53 | 55 => Condition::Drizzle,
            56 | 57 | 66 | 67 => Condition::FreezingRain,
            61 | 63 | 65 => Condition::Rain,
            80..=82 => Condition::Showers,
            71 | 73 | 75 | 77 | 85 | 86 => Condition::Snow,
            95 | 96 | 99 => Condition::Thunderstorm,
            _ => Condition::Unknown,
        }
    }

    /// Looks up the synthetic day codes the aggregator can produce
    ///
    /// Sums where the cloudier-sky step makes the sky part reach a family
    /// addend (1004, 1008, 1016, 1032) are ambiguous and stay unmapped.
    fn from_synthetic(code: i32) -> Self {
        match code {
            1002 => Condition::PartlyCloudy,
            1003 => Condition::MainlyClear,
            1005 | 1007 | 1021 | 1023 => Condition::SunAndRain,
            1006 | 1020 | 1022 => Condition::Rain,
            1009..=1011 | 1024..=1027 => Condition::Snow,
            1012..=1015 | 1028..=1031 | 1061 => Condition::Sleet,
            1017..=1019 => Condition::Fog,
            1033..=1060 | 1062 | 1063 => Condition::Thunderstorm,
            _ => Condition::Unknown,
        }
    }

    /// Short text label
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::MainlyClear => "Mainly clear",
            Condition::PartlyCloudy => "Partly cloudy",
            Condition::Overcast => "Overcast",
            Condition::Fog => "Fog",
            Condition::Drizzle => "Drizzle",
            Condition::FreezingRain => "Freezing rain",
            Condition::Rain => "Rain",
            Condition::Showers => "Showers",
            Condition::Snow => "Snow",
            Condition::Sleet => "Sleet",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::SunAndRain => "Sun and rain",
            Condition::Unknown => "Unknown",
        }
    }

    /// Glyph for the condition, with night variants for clear skies
    pub fn glyph(&self, is_day: bool) -> &'static str {
        match (self, is_day) {
            (Condition::Clear, true) => SUN,
            (Condition::Clear, false) | (Condition::MainlyClear, false) => MOON,
            (Condition::MainlyClear, true) => SUN_SMALL_CLOUD,
            (Condition::PartlyCloudy, true) => SUN_CLOUD,
            (Condition::PartlyCloudy, false) | (Condition::Overcast, _) => CLOUD,
            (Condition::Fog, _) => FOG,
            (Condition::Drizzle, _) | (Condition::Showers, _) | (Condition::SunAndRain, _) => {
                SHOWERS
            }
            (Condition::Rain, _) | (Condition::FreezingRain, _) => RAIN,
            (Condition::Snow, _) | (Condition::Sleet, _) => SNOW,
            (Condition::Thunderstorm, _) => THUNDERSTORM,
            (Condition::Unknown, _) => NOT_AVAILABLE,
        }
    }
}

/// Glyph for a weather code; unknown codes get "n/a"
pub fn condition_glyph(code: i32, is_day: bool) -> &'static str {
    Condition::from_code(code).glyph(is_day)
}

/// Arrow showing where the wind blows to
pub fn wind_arrow(direction: CompassPoint) -> &'static str {
    match direction {
        CompassPoint::N => "\u{2193}",  // ↓
        CompassPoint::NE => "\u{2199}", // ↙
        CompassPoint::E => "\u{2190}",  // ←
        CompassPoint::SE => "\u{2196}", // ↖
        CompassPoint::S => "\u{2191}",  // ↑
        CompassPoint::SW => "\u{2197}", // ↗
        CompassPoint::W => "\u{2192}",  // →
        CompassPoint::NW => "\u{2198}", // ↘
    }
}
