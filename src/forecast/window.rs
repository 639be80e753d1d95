//! Selection of the three hourly samples and the daily offset

use serde::{Deserialize, Serialize};

use super::{HOURS_PER_DAY, HOUR_SAMPLES};

/// Earliest hour sampled during the day
const FIRST_SAMPLE_HOUR: usize = 8;
/// Latest hour sampled before the evening
const LAST_SAMPLE_HOUR: usize = 21;
/// Span between first and last sample in the daytime branch
const SAMPLE_SPAN: usize = 12;
/// From this hour on the remaining evening hours are sampled
const EVENING_FROM: u32 = 18;
/// From this hour on tomorrow is shown instead of today
const OVERNIGHT_FROM: u32 = 21;
/// 08:00, 14:00 and 20:00 of the next day as absolute hours
const NEXT_DAY_SAMPLES: [usize; HOUR_SAMPLES] = [32, 38, 44];

/// How hour labels are formatted for indices beyond today
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourLabelStyle {
    /// Hour of day, e.g. index 32 is labeled "08"
    #[default]
    Wrapped,
    /// Absolute index, e.g. index 32 is labeled "32"
    Raw,
}

/// Hourly indices to sample plus the matching daily offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    /// Absolute hourly indices, ascending
    pub indices: [usize; HOUR_SAMPLES],
    /// First daily slot to summarize (daily index 0 is today)
    pub daily_offset: usize,
}

impl HourWindow {
    /// Earliest sampled index
    pub fn first(&self) -> usize {
        self.indices[0]
    }

    /// Latest sampled index
    pub fn last(&self) -> usize {
        self.indices[HOUR_SAMPLES - 1]
    }
}

/// Picks morning/midday/evening-like samples for the given local hour
///
/// No sample lies before the next full hour. Once it is 21:00 or later the
/// samples move to the next day and the daily summaries start one day later,
/// so no day is shown twice. Indices are not checked against any array.
pub fn select_window(hour_now: u32) -> HourWindow {
    let h = hour_now as usize;
    if hour_now < EVENING_FROM {
        let h_min = (h + 1).max(FIRST_SAMPLE_HOUR);
        let h_max = (h_min + SAMPLE_SPAN).min(LAST_SAMPLE_HOUR);
        HourWindow {
            indices: [h_min, (h_min + h_max) / 2, h_max],
            daily_offset: 1,
        }
    } else if hour_now < OVERNIGHT_FROM {
        let h_min = h + 1;
        let h_max = HOURS_PER_DAY - 1;
        HourWindow {
            indices: [h_min, (h_min + h_max) / 2, h_max],
            daily_offset: 1,
        }
    } else {
        HourWindow {
            indices: NEXT_DAY_SAMPLES,
            daily_offset: 2,
        }
    }
}

/// Two-digit label for an absolute hourly index
pub fn hour_label(index: usize, style: HourLabelStyle) -> String {
    match style {
        HourLabelStyle::Wrapped => format!("{:02}", index % HOURS_PER_DAY),
        HourLabelStyle::Raw => format!("{:02}", index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daytime_branch_properties() {
        for h in 0..18u32 {
            let w = select_window(h);
            let [min, mid, max] = w.indices;
            assert_eq!(min, (h as usize + 1).max(8), "hour {}", h);
            assert!(min <= mid && mid <= max && max <= 21, "hour {}: {:?}", h, w);
            assert_eq!(w.daily_offset, 1);
        }
    }

    #[test]
    fn test_daytime_branch_values() {
        assert_eq!(select_window(0).indices, [8, 14, 20]);
        assert_eq!(select_window(7).indices, [8, 14, 20]);
        assert_eq!(select_window(10).indices, [11, 16, 21]);
        assert_eq!(select_window(14).indices, [15, 18, 21]);
        assert_eq!(select_window(17).indices, [18, 19, 21]);
    }

    #[test]
    fn test_evening_branch() {
        for h in 18..21u32 {
            let w = select_window(h);
            assert_eq!(w.indices[0], h as usize + 1);
            assert_eq!(w.indices[2], 23);
            assert_eq!(w.daily_offset, 1);
        }
        assert_eq!(select_window(18).indices, [19, 21, 23]);
        assert_eq!(select_window(20).indices, [21, 22, 23]);
    }

    #[test]
    fn test_overnight_branch() {
        for h in 21..24u32 {
            let w = select_window(h);
            assert_eq!(w.indices, [32, 38, 44]);
            assert_eq!(w.daily_offset, 2);
            assert_eq!(w.first(), 32);
            assert_eq!(w.last(), 44);
        }
    }

    #[test]
    fn test_hour_label_styles() {
        assert_eq!(hour_label(8, HourLabelStyle::Wrapped), "08");
        assert_eq!(hour_label(32, HourLabelStyle::Wrapped), "08");
        assert_eq!(hour_label(44, HourLabelStyle::Wrapped), "20");
        assert_eq!(hour_label(32, HourLabelStyle::Raw), "32");
        assert_eq!(hour_label(9, HourLabelStyle::Raw), "09");
    }

    #[test]
    fn test_hour_label_style_default_is_wrapped() {
        assert_eq!(HourLabelStyle::default(), HourLabelStyle::Wrapped);
    }
}
