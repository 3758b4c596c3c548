//! Pay breakdown models for the Pay Calculation Engine.
//!
//! This module contains the [`PayBreakdown`] type and its associated
//! structures that capture all outputs from a pay calculation, including
//! per-band pay lines and the audit trace explaining the arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies the time-of-night rate band a pay line belongs to.
///
/// Each band covers a contiguous clock-time window with its own hourly rate.
///
/// # Example
///
/// ```
/// use sitter_engine::models::RateBand;
///
/// let band = RateBand::PostBedtime;
/// assert_eq!(format!("{:?}", band), "PostBedtime");
/// assert_eq!(band.to_string(), "post-bedtime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// Earliest allowed start (5:00 PM by default) until bedtime.
    Standard,
    /// Bedtime until midnight.
    PostBedtime,
    /// Midnight until the latest allowed end (4:00 AM by default).
    PostMidnight,
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateBand::Standard => write!(f, "standard"),
            RateBand::PostBedtime => write!(f, "post-bedtime"),
            RateBand::PostMidnight => write!(f, "post-midnight"),
        }
    }
}

/// A single line item in a pay calculation.
///
/// Each pay line captures the minutes worked in one rate band, the whole
/// hours those minutes were billed as, the band's hourly rate, and the
/// resulting amount.
///
/// # Example
///
/// ```
/// use sitter_engine::models::{PayLine, RateBand};
/// use rust_decimal::Decimal;
///
/// let pay_line = PayLine {
///     band: RateBand::Standard,
///     minutes: 150,
///     billed_hours: 3,
///     rate: Decimal::from(12),
///     amount: Decimal::from(36),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The rate band this line applies to.
    pub band: RateBand,
    /// The number of minutes the shift overlapped this band.
    pub minutes: u32,
    /// The minutes rounded up to whole billable hours.
    pub billed_hours: u32,
    /// The hourly rate for this band.
    pub rate: Decimal,
    /// The total amount for this line (billed_hours * rate).
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a pay calculation for one shift.
///
/// Captures the per-band pay lines, the audit steps explaining every band
/// decision, and the summed total. Bands the shift never reached contribute
/// no pay line but still leave an audit step.
///
/// # Example
///
/// ```
/// use sitter_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     pay_lines: vec![],
///     audit_steps: vec![],
///     total_amount: Decimal::ZERO,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Individual pay lines, one per band the shift overlapped.
    pub pay_lines: Vec<PayLine>,
    /// Complete audit trail of calculation decisions.
    pub audit_steps: Vec<AuditStep>,
    /// The total pay for the shift (sum of all pay line amounts).
    pub total_amount: Decimal,
}
