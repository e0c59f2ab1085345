//! Activity grid synthesis.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day labels in grid order (week starts on Sunday).
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Hours per grid row.
pub const HOURS_PER_DAY: usize = 24;

/// Daytime hours get an activity boost.
const DAYTIME: std::ops::RangeInclusive<usize> = 8..=22;
/// Lunch and evening peak hours.
const LUNCH_PEAK: std::ops::RangeInclusive<usize> = 12..=14;
const EVENING_PEAK: std::ops::RangeInclusive<usize> = 19..=21;

/// One cell of the activity grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeatmapCell {
    /// Hour of day, `0..24`.
    pub hour: u8,
    /// Activity percentage, `0..=100`.
    pub value: u8,
}

/// One day's row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayActivity {
    pub day: &'static str,
    pub values: Vec<HeatmapCell>,
}

/// Synthesizes a week of activity data.
///
/// Per cell: a uniform base in `0..50`, +30 during daytime (8h–22h),
/// scaled by 0.7 on weekend days, +20 over lunch (12h–14h) and +25 in
/// the evening (19h–21h), capped at 100. Deterministic for a seeded RNG.
pub fn synthesize_week<R: Rng>(rng: &mut R) -> Vec<DayActivity> {
    DAY_LABELS
        .iter()
        .enumerate()
        .map(|(day_index, &day)| DayActivity {
            day,
            values: (0..HOURS_PER_DAY)
                .map(|hour| HeatmapCell {
                    hour: hour as u8,
                    value: cell_value(rng, day_index, hour),
                })
                .collect(),
        })
        .collect()
}

fn cell_value<R: Rng>(rng: &mut R, day_index: usize, hour: usize) -> u8 {
    let mut base: f64 = rng.random_range(0.0..50.0);

    if DAYTIME.contains(&hour) {
        base += 30.0;
    }

    // Weekends are quieter across the board.
    if day_index == 0 || day_index == 6 {
        base *= 0.7;
    }

    if LUNCH_PEAK.contains(&hour) {
        base += 20.0;
    }
    if EVENING_PEAK.contains(&hour) {
        base += 25.0;
    }

    base.round().min(100.0) as u8
}
