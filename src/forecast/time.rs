//! Timestamp decoding and weekday calculation
//!
//! Timestamps arrive as local time in the shape `YYYY-MM-DDTHH:MM`; the API is
//! queried with an auto-resolved timezone so no conversion happens here.

use chrono::NaiveDate;

use super::ForecastError;

/// Weekday of 1970-01-01 (a Thursday) with Monday = 0
const EPOCH_WEEKDAY: i64 = 3;

const SECONDS_PER_DAY: i64 = 86_400;

/// Parts of a decoded `YYYY-MM-DDTHH:MM` timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTime {
    /// Date portion, "YYYY-MM-DD"
    pub date: String,
    /// Time portion, "HH:MM"
    pub time: String,
    /// Year as written
    pub year: String,
    /// Month as written (two digits)
    pub month: String,
    /// Day of month as written (two digits)
    pub day: String,
    /// Hour as written (two digits)
    pub hour: String,
    /// The timestamp with `T` replaced by a space
    pub pretty: String,
    /// Numeric hour of day, 0-23
    pub hour_of_day: u32,
}

/// Decodes a local ISO-8601 timestamp without timezone suffix
///
/// # Errors
/// `ForecastError::Format` if the string does not contain exactly one `T`,
/// the date portion does not contain exactly two `-`, or a component is not
/// a number.
pub fn decode_time(timestamp: &str) -> Result<DecodedTime, ForecastError> {
    let malformed = || ForecastError::Format(timestamp.to_string());

    if timestamp.matches('T').count() != 1 {
        return Err(malformed());
    }
    let (date, time) = timestamp.split_once('T').ok_or_else(malformed)?;

    let (year, month, day) = split_date(date).ok_or_else(malformed)?;

    let hour = time.split(':').next().unwrap_or_default();
    if !is_number(hour) {
        return Err(malformed());
    }
    let hour_of_day: u32 = hour.parse().map_err(|_| malformed())?;
    if hour_of_day > 23 {
        return Err(malformed());
    }

    Ok(DecodedTime {
        date: date.to_string(),
        time: time.to_string(),
        year: year.to_string(),
        month: month.to_string(),
        day: day.to_string(),
        hour: hour.to_string(),
        pretty: timestamp.replace('T', " "),
        hour_of_day,
    })
}

/// Splits "YYYY-MM-DD" into its three parts, `None` unless there are exactly
/// two separators and every part is numeric
pub(crate) fn split_date(date: &str) -> Option<(&str, &str, &str)> {
    let mut parts = date.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || ![year, month, day].iter().all(|p| is_number(p)) {
        return None;
    }
    Some((year, month, day))
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Day of week for an ISO date, 0 = Monday .. 6 = Sunday
///
/// The date is taken at 12:00 so the day count since the epoch is never
/// affected by daylight-saving shifts.
pub fn weekday(date_iso: &str) -> Result<u32, ForecastError> {
    let date = NaiveDate::parse_from_str(date_iso, "%Y-%m-%d")
        .map_err(|_| ForecastError::Format(date_iso.to_string()))?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| ForecastError::Format(date_iso.to_string()))?;

    let days_since_epoch = noon.and_utc().timestamp().div_euclid(SECONDS_PER_DAY);
    Ok((days_since_epoch + EPOCH_WEEKDAY).rem_euclid(7) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_time_parts() {
        let t = decode_time("2024-06-15T14:30").unwrap();
        assert_eq!(t.date, "2024-06-15");
        assert_eq!(t.time, "14:30");
        assert_eq!(t.year, "2024");
        assert_eq!(t.month, "06");
        assert_eq!(t.day, "15");
        assert_eq!(t.hour, "14");
        assert_eq!(t.pretty, "2024-06-15 14:30");
        assert_eq!(t.hour_of_day, 14);
    }

    #[test]
    fn test_decode_time_midnight() {
        let t = decode_time("2024-12-31T00:00").unwrap();
        assert_eq!(t.hour, "00");
        assert_eq!(t.hour_of_day, 0);
    }

    #[test]
    fn test_decode_time_rejects_missing_separator() {
        assert_eq!(
            decode_time("2024-06-15 14:30"),
            Err(ForecastError::Format("2024-06-15 14:30".to_string()))
        );
    }

    #[test]
    fn test_decode_time_rejects_two_separators() {
        assert!(decode_time("2024-06-15T14:30T00").is_err());
    }

    #[test]
    fn test_decode_time_rejects_bad_date() {
        assert!(decode_time("2024-06T14:30").is_err());
        assert!(decode_time("2024-06-15-01T14:30").is_err());
        assert!(decode_time("2024/06/15T14:30").is_err());
        assert!(decode_time("not a time").is_err());
    }

    #[test]
    fn test_decode_time_rejects_bad_hour() {
        assert!(decode_time("2024-06-15T24:00").is_err());
        assert!(decode_time("2024-06-15Tab:00").is_err());
        assert!(decode_time("2024-06-15T").is_err());
    }

    #[test]
    fn test_weekday_reference_dates() {
        // 2024-01-01 was a Monday
        assert_eq!(weekday("2024-01-01").unwrap(), 0);
        // 1970-01-01 was a Thursday
        assert_eq!(weekday("1970-01-01").unwrap(), 3);
        // 2024-06-15 was a Saturday
        assert_eq!(weekday("2024-06-15").unwrap(), 5);
        assert_eq!(weekday("2024-06-16").unwrap(), 6);
    }

    #[test]
    fn test_weekday_before_epoch() {
        // 1969-12-31 was a Wednesday
        assert_eq!(weekday("1969-12-31").unwrap(), 2);
    }

    #[test]
    fn test_weekday_rejects_malformed_date() {
        assert!(weekday("2024-13-01").is_err());
        assert!(weekday("20240101").is_err());
    }
}
