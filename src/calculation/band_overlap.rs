//! Band overlap and midnight-wrap normalization logic.
//!
//! This module places a shift onto a linear minute timeline so that every
//! rate band can measure its overlap with the shift using one shared
//! helper, with no per-band special-casing of the midnight wrap.
//!
//! On the timeline, a clock time at or before the latest payable end
//! (4:00 AM by default) is treated as belonging to the morning after the
//! shift began and is shifted forward by one day. Evening times keep their
//! plain minute-of-day. The post-midnight band then occupies
//! `[1440, 1440 + latest_end)` and ordinary interval intersection covers
//! every case: clamping early starts to 5:00 PM, shifts ending exactly at
//! midnight, shifts lying entirely past midnight, and wrapped shifts that
//! run past the latest payable end.

use crate::config::ShiftBoundaries;
use crate::models::{Shift, TimeOfDay};

/// The number of minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A shift projected onto the linear minute timeline.
///
/// `start` and `end` are minutes since the midnight preceding the evening
/// the shift belongs to; early-morning times carry a one-day offset. An
/// `end` smaller than `start` never measures a positive overlap, so
/// chronologically nonsensical input quietly earns nothing.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::NormalizedShift;
/// use sitter_engine::config::ShiftBoundaries;
/// use sitter_engine::models::Shift;
///
/// let shift = Shift::from_clock_strings("5:00 PM", "1:00 AM").unwrap();
/// let norm = NormalizedShift::project(&shift, &ShiftBoundaries::default());
/// assert_eq!(norm.start, 17 * 60);
/// assert_eq!(norm.end, 1440 + 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedShift {
    /// Timeline minute the shift starts at.
    pub start: u32,
    /// Timeline minute the shift ends at.
    pub end: u32,
}

impl NormalizedShift {
    /// Projects a shift onto the linear timeline.
    ///
    /// Both endpoints are normalized independently: any endpoint at or
    /// before `boundaries.latest_end` is pushed past midnight. An end that
    /// lands in the unpayable daytime gap on the far side of a wrapped
    /// shift (for example a 8:00 PM start with a 6:00 AM end) means the
    /// sitter worked through the whole remaining window, so it clamps to
    /// the latest payable end. A daytime end that never wrapped (a
    /// 12:00 PM to 4:30 PM shift) is left where it is and measures no
    /// overlap with any band.
    pub fn project(shift: &Shift, boundaries: &ShiftBoundaries) -> Self {
        let start = timeline_minute(shift.start, boundaries);
        let mut end = timeline_minute(shift.end, boundaries);

        let end_minute = shift.end.minute_of_day();
        let in_daytime_gap = end_minute > boundaries.latest_end.minute_of_day()
            && end_minute < boundaries.earliest_start.minute_of_day();
        if in_daytime_gap && end < start {
            end = MINUTES_PER_DAY + boundaries.latest_end.minute_of_day();
        }

        Self { start, end }
    }

    /// Returns true when the shift crossed midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.start < MINUTES_PER_DAY && self.end > MINUTES_PER_DAY
    }
}

/// Converts a wall-clock time into its timeline minute.
///
/// Times at or before the latest payable end are early-morning times of the
/// following day and gain a one-day offset; everything else is an evening
/// (or daytime) minute-of-day.
fn timeline_minute(time: TimeOfDay, boundaries: &ShiftBoundaries) -> u32 {
    let minute = time.minute_of_day();
    if minute <= boundaries.latest_end.minute_of_day() {
        minute + MINUTES_PER_DAY
    } else {
        minute
    }
}

/// Measures the overlap in minutes between a band window and a shift.
///
/// All four arguments are timeline minutes. Returns zero when the shift
/// misses the window entirely or when `shift_end` precedes `shift_start`.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::overlap_minutes;
///
/// // Shift 12:00 PM - 6:00 PM against the standard window 5:00 PM - 8:00 PM:
/// // only the hour from 5:00 PM counts.
/// assert_eq!(overlap_minutes(1020, 1200, 720, 1080), 60);
/// ```
pub fn overlap_minutes(band_lower: u32, band_upper: u32, shift_start: u32, shift_end: u32) -> u32 {
    let lower = shift_start.max(band_lower);
    let upper = shift_end.min(band_upper);
    upper.saturating_sub(lower)
}
