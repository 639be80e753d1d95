//! Assembly of the display snapshot from a raw forecast

use crate::data::payload::ForecastPayload;

use super::aggregate::aggregate_day;
use super::model::{CompassPoint, CurrentPoint, DayPoint, ForecastSnapshot, HourPoint};
use super::rounding::round_half_away;
use super::series::{DailySeries, HourlySeries, RawSeries};
use super::time::{decode_time, split_date, weekday};
use super::window::{hour_label, select_window, HourLabelStyle, HourWindow};
use super::{
    ForecastError, DAY_SUMMARIES, HOURS_PER_DAY, MIN_DAILY_HORIZON, MIN_HOURLY_HORIZON,
};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Settings of the assembler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Label format for hourly samples beyond today
    pub hour_labels: HourLabelStyle,
}

/// Turns a raw forecast into a [`ForecastSnapshot`]
#[derive(Debug, Clone, Default)]
pub struct ForecastAssembler {
    config: AssemblerConfig,
}

impl ForecastAssembler {
    /// Creates an assembler with the given settings
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Returns the assembler settings
    pub fn config(&self) -> AssemblerConfig {
        self.config
    }

    /// Extracts a [`RawSeries`] from the payload and assembles it
    ///
    /// # Errors
    /// `IncompleteData` for missing fields, plus everything [`assemble`](Self::assemble) returns.
    pub fn assemble_payload(
        &self,
        payload: ForecastPayload,
    ) -> Result<ForecastSnapshot, ForecastError> {
        let series = RawSeries::from_payload(payload)?;
        self.assemble(&series)
    }

    /// Builds the current point, three hourly samples and four day summaries
    ///
    /// # Errors
    /// * `Format` - the current time or a daily date is malformed
    /// * `OutOfRange` - the hourly or daily arrays do not cover the horizon
    ///   the selected window needs
    pub fn assemble(&self, series: &RawSeries) -> Result<ForecastSnapshot, ForecastError> {
        let now = decode_time(&series.current.time_iso)?;
        let window = select_window(now.hour_of_day);
        check_horizon(series, &window)?;

        let hours = window
            .indices
            .map(|index| self.hour_point(&series.hourly, index));

        let first_day = window.daily_offset;
        let days: [DayPoint; DAY_SUMMARIES] = [
            day_point(series, first_day)?,
            day_point(series, first_day + 1)?,
            day_point(series, first_day + 2)?,
            day_point(series, first_day + 3)?,
        ];

        let current = CurrentPoint {
            hour: now.hour,
            day: now.day,
            month: now.month,
            update_timestamp: now.pretty,
            temperature: series.current.temperature,
            is_day: series.current.is_day,
            wind_speed_kmh: series.current.wind_speed_kmh,
            wind_direction: CompassPoint::from_degrees(series.current.wind_direction_deg),
            weather_code: series.current.weather_code,
        };

        Ok(ForecastSnapshot {
            units: series.units.clone(),
            current,
            hours,
            days,
            daily_offset: window.daily_offset,
        })
    }

    fn hour_point(&self, hourly: &HourlySeries, index: usize) -> HourPoint {
        HourPoint {
            hour_label: hour_label(index, self.config.hour_labels),
            temperature: hourly.temperature[index],
            weather_code: hourly.weather_code[index],
            is_day: hourly.is_day[index],
        }
    }
}

/// Verifies every array covers the hours and days the window will read
fn check_horizon(series: &RawSeries, window: &HourWindow) -> Result<(), ForecastError> {
    let days_read = window.daily_offset + DAY_SUMMARIES;
    let days_needed = MIN_DAILY_HORIZON.max(days_read);
    let hours_needed = MIN_HOURLY_HORIZON
        .max(days_read * HOURS_PER_DAY)
        .max(window.last() + 1);

    let hourly = &series.hourly;
    let daily = &series.daily;
    let lengths = [
        ("hourly.is_day", hourly.is_day.len(), hours_needed),
        ("hourly.weathercode", hourly.weather_code.len(), hours_needed),
        ("hourly.temperature_2m", hourly.temperature.len(), hours_needed),
        ("daily.time", daily.date_iso.len(), days_needed),
        ("daily.temperature_2m_min", daily.temp_min.len(), days_needed),
        ("daily.temperature_2m_max", daily.temp_max.len(), days_needed),
    ];
    for (array, len, required) in lengths {
        if len < required {
            return Err(ForecastError::out_of_range(array, len, required));
        }
    }
    Ok(())
}

fn day_point(series: &RawSeries, day: usize) -> Result<DayPoint, ForecastError> {
    let daily = &series.daily;
    let date = &daily.date_iso[day];
    let (_, month, day_of_month) =
        split_date(date).ok_or_else(|| ForecastError::Format(date.clone()))?;

    Ok(DayPoint {
        day_of_month: day_of_month.to_string(),
        month: month.to_string(),
        weekday: weekday(date)?,
        temp_min: round_half_away(daily.temp_min[day]),
        temp_max: round_half_away(daily.temp_max[day]),
        aggregated_code: aggregate_day(
            &series.hourly.is_day,
            &series.hourly.weather_code,
            day * HOURS_PER_DAY,
        )?,
        precipitation_hours: optional_hours(daily, day, |d| d.precipitation_hours.as_deref(), 1.0),
        sunshine_hours: optional_hours(
            daily,
            day,
            |d| d.sunshine_duration.as_deref(),
            SECONDS_PER_HOUR,
        ),
    })
}

fn optional_hours(
    daily: &DailySeries,
    day: usize,
    array: impl Fn(&DailySeries) -> Option<&[f64]>,
    divisor: f64,
) -> Option<i64> {
    array(daily)
        .and_then(|values| values.get(day))
        .map(|value| round_half_away(value / divisor))
}
