//! Shift model.
//!
//! This module defines the Shift struct representing one babysitting
//! engagement, bounded by wall-clock start and end times. A shift may wrap
//! once past midnight (an evening start with an early-morning end); dates
//! are never tracked.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::TimeOfDay;

/// Represents a single babysitting shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The wall-clock time the sitter clocked in.
    pub start: TimeOfDay,
    /// The wall-clock time the sitter clocked out.
    pub end: TimeOfDay,
}

impl Shift {
    /// Parses a shift from its start and end clock strings.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_engine::models::Shift;
    ///
    /// let shift = Shift::from_clock_strings("5:00 PM", "1:00 AM").unwrap();
    /// assert_eq!(shift.start.minute_of_day(), 17 * 60);
    /// assert_eq!(shift.end.minute_of_day(), 60);
    /// ```
    pub fn from_clock_strings(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Returns true when the shift starts and ends at the same instant.
    ///
    /// An empty shift earns no pay in any band.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
