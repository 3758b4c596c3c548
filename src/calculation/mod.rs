//! Calculation logic for the Pay Calculation Engine.
//!
//! This module contains the band calculations for determining pay: shift
//! normalization onto a wrap-aware minute timeline, per-band overlap
//! measurement, hour rounding, and the [`PayCalculator`] that ties the
//! three bands together.

mod band_overlap;
mod pay_calculator;
mod post_bedtime_band;
mod post_midnight_band;
mod rounding;
mod standard_band;

pub use band_overlap::{MINUTES_PER_DAY, NormalizedShift, overlap_minutes};
pub use pay_calculator::PayCalculator;
pub use post_bedtime_band::{PostBedtimeBandResult, calculate_post_bedtime_band};
pub use post_midnight_band::{PostMidnightBandResult, calculate_post_midnight_band};
pub use rounding::billable_hours;
pub use standard_band::{StandardBandResult, calculate_standard_band};
