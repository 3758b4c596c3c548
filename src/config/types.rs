//! Configuration types for the pay schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. `Default` implementations
//! carry the classic babysitting schedule so the engine works without any
//! files on disk.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{RateBand, TimeOfDay};

/// Metadata about the pay schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
}

impl Default for ScheduleMetadata {
    fn default() -> Self {
        Self {
            name: "Standard babysitting schedule".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// The fixed wall-clock window a sitter may be paid for.
///
/// Work before `earliest_start` or after `latest_end` (on the far side of
/// midnight) earns nothing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShiftBoundaries {
    /// The earliest time a shift is payable from (5:00 PM by default).
    pub earliest_start: TimeOfDay,
    /// The latest time a shift is payable to, past midnight (4:00 AM by default).
    pub latest_end: TimeOfDay,
}

impl Default for ShiftBoundaries {
    fn default() -> Self {
        Self {
            earliest_start: TimeOfDay::from_hm_opt(17, 0).expect("valid time"),
            latest_end: TimeOfDay::from_hm_opt(4, 0).expect("valid time"),
        }
    }
}

/// Hourly rates for the three time-of-night bands.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RateTable {
    /// Hourly rate from the earliest start until bedtime.
    pub standard: Decimal,
    /// Hourly rate from bedtime until midnight.
    pub post_bedtime: Decimal,
    /// Hourly rate from midnight until the latest end.
    pub post_midnight: Decimal,
}

impl RateTable {
    /// Returns the hourly rate for the given band.
    pub fn rate_for(&self, band: RateBand) -> Decimal {
        match band {
            RateBand::Standard => self.standard,
            RateBand::PostBedtime => self.post_bedtime,
            RateBand::PostMidnight => self.post_midnight,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            standard: Decimal::from(12),
            post_bedtime: Decimal::from(8),
            post_midnight: Decimal::from(16),
        }
    }
}

/// The complete pay schedule configuration.
///
/// Immutable for the lifetime of a calculator instance. The default carries
/// the classic schedule: payable window 5:00 PM to 4:00 AM, rates 12/8/16.
///
/// # Example
///
/// ```
/// use sitter_engine::config::ScheduleConfig;
/// use rust_decimal::Decimal;
///
/// let config = ScheduleConfig::default();
/// assert_eq!(config.boundaries.earliest_start.minute_of_day(), 17 * 60);
/// assert_eq!(config.rates.standard, Decimal::from(12));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleConfig {
    /// Schedule metadata.
    #[serde(default)]
    pub metadata: ScheduleMetadata,
    /// The payable shift window.
    #[serde(default)]
    pub boundaries: ShiftBoundaries,
    /// The per-band hourly rates.
    #[serde(default)]
    pub rates: RateTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries_match_classic_schedule() {
        let boundaries = ShiftBoundaries::default();
        assert_eq!(boundaries.earliest_start.to_string(), "5:00 PM");
        assert_eq!(boundaries.latest_end.to_string(), "4:00 AM");
    }

    #[test]
    fn test_default_rates_match_classic_schedule() {
        let rates = RateTable::default();
        assert_eq!(rates.standard, Decimal::from(12));
        assert_eq!(rates.post_bedtime, Decimal::from(8));
        assert_eq!(rates.post_midnight, Decimal::from(16));
    }

    #[test]
    fn test_rate_for_band() {
        let rates = RateTable::default();
        assert_eq!(rates.rate_for(RateBand::Standard), Decimal::from(12));
        assert_eq!(rates.rate_for(RateBand::PostBedtime), Decimal::from(8));
        assert_eq!(rates.rate_for(RateBand::PostMidnight), Decimal::from(16));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
metadata:
  name: Weekend schedule
  version: "2.0"
boundaries:
  earliest_start: "6:00 PM"
  latest_end: "3:00 AM"
rates:
  standard: 15
  post_bedtime: 10
  post_midnight: 20
"#;
        let config: ScheduleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.metadata.name, "Weekend schedule");
        assert_eq!(config.boundaries.earliest_start.minute_of_day(), 18 * 60);
        assert_eq!(config.boundaries.latest_end.minute_of_day(), 3 * 60);
        assert_eq!(config.rates.post_midnight, Decimal::from(20));
    }

    #[test]
    fn test_deserialize_sections_fall_back_to_defaults() {
        let yaml = r#"
rates:
  standard: 14
  post_bedtime: 9
  post_midnight: 18
"#;
        let config: ScheduleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.boundaries.earliest_start.to_string(), "5:00 PM");
        assert_eq!(config.rates.standard, Decimal::from(14));
    }

    #[test]
    fn test_deserialize_rejects_malformed_boundary() {
        let yaml = r#"
boundaries:
  earliest_start: "17:00"
  latest_end: "4:00 AM"
"#;
        let result: Result<ScheduleConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
