//! Temperature rounding for the daily summaries

/// Rounds to the nearest integer, ties away from zero
///
/// The value is first reduced to tenths (so `2.45`, stored as
/// `2.4500000000000002`, is decided on its written tenths digit), then the
/// magnitude is rounded half up and the sign restored.
pub fn round_half_away(value: f64) -> i64 {
    if value == 0.0 || value.is_nan() {
        return 0;
    }
    let tenths = (value.abs() * 100.0).round() / 10.0;
    let magnitude = ((tenths + 5.0) / 10.0).floor() as i64;
    if value < 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
