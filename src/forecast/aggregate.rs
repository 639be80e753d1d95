//! Daily weather-code aggregation
//!
//! A day is summarized by voting over its daytime hours. When every daytime
//! hour agrees the raw WMO code is kept. Otherwise a synthetic code is built
//! from 1000 plus one addend per condition family present that day:
//!
//! | addend | family                                              |
//! |--------|-----------------------------------------------------|
//! | 1 (2)  | clear to partly cloudy {0,1,2}; 2 if cloudier hours win |
//! | 2      | mainly clear to overcast {1,2,3}                    |
//! | 4      | drizzle, rain, freezing rain, rain showers          |
//! | 8      | snow, snow grains, snow showers                     |
//! | 16     | fog {45,48}                                         |
//! | 32     | thunderstorm {95,96,99}                             |
//!
//! Raw codes stay below 100, so the two code spaces never collide.

use std::collections::BTreeMap;

use super::{ForecastError, HOURS_PER_DAY};

/// Base of the synthetic code space
pub const SYNTHETIC_BASE: i32 = 1000;

pub const FLAG_CLEAR: i32 = 1;
pub const FLAG_CLOUDY: i32 = 2;
pub const FLAG_RAIN: i32 = 4;
pub const FLAG_SNOW: i32 = 8;
pub const FLAG_FOG: i32 = 16;
pub const FLAG_THUNDERSTORM: i32 = 32;

const CLEAR_CODES: [i32; 3] = [0, 1, 2];
const CLOUDY_CODES: [i32; 3] = [1, 2, 3];
const BRIGHT_CODES: [i32; 2] = [0, 1];
const OVERCAST_CODES: [i32; 2] = [2, 3];
const RAIN_CODES: [i32; 11] = [51, 53, 55, 61, 63, 65, 66, 67, 80, 81, 82];
const SNOW_CODES: [i32; 6] = [71, 73, 75, 77, 85, 86];
const FOG_CODES: [i32; 2] = [45, 48];
const THUNDERSTORM_CODES: [i32; 3] = [95, 96, 99];

/// True for codes produced by the synthesis step
pub fn is_synthetic(code: i32) -> bool {
    code >= SYNTHETIC_BASE
}

/// Aggregates the 24 hours starting at `day_start` into one code
///
/// # Errors
/// `ForecastError::OutOfRange` if either array ends before `day_start + 24`.
pub fn aggregate_day(
    is_day: &[bool],
    weather_code: &[i32],
    day_start: usize,
) -> Result<i32, ForecastError> {
    let day_end = day_start + HOURS_PER_DAY;
    let flags = is_day
        .get(day_start..day_end)
        .ok_or_else(|| ForecastError::out_of_range("hourly.is_day", is_day.len(), day_end))?;
    let codes = weather_code.get(day_start..day_end).ok_or_else(|| {
        ForecastError::out_of_range("hourly.weathercode", weather_code.len(), day_end)
    })?;

    Ok(aggregate_codes(flags.iter().copied().zip(codes.iter().copied())))
}

/// Aggregates (is_day, code) pairs into one code
///
/// Only daytime hours vote. A window without any daytime hour (polar night)
/// has nothing to vote with and yields the bare [`SYNTHETIC_BASE`].
pub fn aggregate_codes<I>(hours: I) -> i32
where
    I: IntoIterator<Item = (bool, i32)>,
{
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for (is_day, code) in hours {
        if is_day {
            *counts.entry(code).or_insert(0) += 1;
        }
    }

    if counts.len() == 1 {
        if let Some(&code) = counts.keys().next() {
            return code;
        }
    }

    synthesize(&counts)
}

fn synthesize(counts: &BTreeMap<i32, usize>) -> i32 {
    let present = |family: &[i32]| family.iter().any(|code| counts.contains_key(code));
    let count_of = |family: &[i32]| -> usize {
        family.iter().filter_map(|code| counts.get(code)).sum()
    };

    let mut code = SYNTHETIC_BASE;
    if present(&CLEAR_CODES) {
        code += FLAG_CLEAR;
        if count_of(&OVERCAST_CODES) > count_of(&BRIGHT_CODES) {
            code += FLAG_CLEAR;
        }
    }
    if present(&CLOUDY_CODES) {
        code += FLAG_CLOUDY;
    }
    if present(&RAIN_CODES) {
        code += FLAG_RAIN;
    }
    if present(&SNOW_CODES) {
        code += FLAG_SNOW;
    }
    if present(&FOG_CODES) {
        code += FLAG_FOG;
    }
    if present(&THUNDERSTORM_CODES) {
        code += FLAG_THUNDERSTORM;
    }
    code
}
