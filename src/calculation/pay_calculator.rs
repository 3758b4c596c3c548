//! Daily pay calculation for one babysitting shift.
//!
//! This module provides the [`PayCalculator`], the public entry point of the
//! engine. A calculator is constructed once with a bedtime and evaluates any
//! number of shifts against the same immutable schedule.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::ScheduleConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PayBreakdown, Shift, TimeOfDay};

use super::band_overlap::NormalizedShift;
use super::post_bedtime_band::calculate_post_bedtime_band;
use super::post_midnight_band::calculate_post_midnight_band;
use super::standard_band::calculate_standard_band;

/// Calculates a babysitter's pay for single-evening shifts.
///
/// Holds the bedtime and schedule fixed at construction; every calculation
/// call is independent and reads only that immutable configuration, so a
/// `PayCalculator` may be shared freely across threads.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::PayCalculator;
///
/// let calculator = PayCalculator::new("8:00 PM").unwrap();
/// assert_eq!(calculator.calculate_total_daily_pay("5:00 PM", "8:00 PM").unwrap(), 36);
/// ```
#[derive(Debug, Clone)]
pub struct PayCalculator {
    bedtime: TimeOfDay,
    config: ScheduleConfig,
}

impl PayCalculator {
    /// Creates a calculator with the default schedule and the given bedtime.
    ///
    /// # Arguments
    ///
    /// * `bedtime` - The child's bedtime as a clock string, e.g. `"8:00 PM"`
    ///
    /// # Returns
    ///
    /// Returns the calculator, or an error if the bedtime string is
    /// malformed or lies outside the payable evening window.
    pub fn new(bedtime: &str) -> EngineResult<Self> {
        Self::with_config(bedtime, ScheduleConfig::default())
    }

    /// Creates a calculator with an explicit schedule configuration.
    ///
    /// The bedtime must fall between the schedule's earliest start and
    /// midnight; anywhere else the standard and post-bedtime windows would
    /// be meaningless, so construction is rejected with
    /// [`EngineError::InvalidBedtime`] instead of producing undefined pay.
    pub fn with_config(bedtime: &str, config: ScheduleConfig) -> EngineResult<Self> {
        let bedtime: TimeOfDay = bedtime.parse()?;

        if bedtime < config.boundaries.earliest_start {
            return Err(EngineError::InvalidBedtime {
                bedtime: bedtime.to_string(),
                message: format!(
                    "bedtime must not be before the earliest start of {}",
                    config.boundaries.earliest_start
                ),
            });
        }

        Ok(Self { bedtime, config })
    }

    /// Returns the bedtime this calculator was constructed with.
    pub fn bedtime(&self) -> TimeOfDay {
        self.bedtime
    }

    /// Returns the schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Calculates the total pay for one shift, in whole currency units.
    ///
    /// This is the plain-integer surface over [`calculate_with_breakdown`].
    /// With the default whole-number rate table the total is always exact;
    /// a fractional rate table is rounded to the nearest unit.
    ///
    /// # Arguments
    ///
    /// * `start_time` - The clock-in time, e.g. `"5:00 PM"`
    /// * `end_time` - The clock-out time, e.g. `"1:00 AM"`
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_engine::calculation::PayCalculator;
    ///
    /// let calculator = PayCalculator::new("8:00 PM").unwrap();
    /// // 3h standard + 4h post-bedtime + 1h post-midnight
    /// assert_eq!(calculator.calculate_total_daily_pay("5:00 PM", "1:00 AM").unwrap(), 84);
    /// ```
    ///
    /// [`calculate_with_breakdown`]: PayCalculator::calculate_with_breakdown
    pub fn calculate_total_daily_pay(&self, start_time: &str, end_time: &str) -> EngineResult<i64> {
        let breakdown = self.calculate_with_breakdown(start_time, end_time)?;
        breakdown
            .total_amount
            .round()
            .to_i64()
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "total pay {} does not fit a whole currency amount",
                    breakdown.total_amount
                ),
            })
    }

    /// Calculates the pay for one shift with per-band pay lines and an audit trail.
    ///
    /// Each of the three bands is evaluated independently against the shift;
    /// bands the shift never reached leave an audit step but no pay line.
    ///
    /// # Example
    ///
    /// ```
    /// use sitter_engine::calculation::PayCalculator;
    /// use rust_decimal::Decimal;
    ///
    /// let calculator = PayCalculator::new("8:00 PM").unwrap();
    /// let breakdown = calculator.calculate_with_breakdown("5:00 PM", "1:00 AM").unwrap();
    ///
    /// assert_eq!(breakdown.pay_lines.len(), 3);
    /// assert_eq!(breakdown.total_amount, Decimal::from(84));
    /// ```
    pub fn calculate_with_breakdown(
        &self,
        start_time: &str,
        end_time: &str,
    ) -> EngineResult<PayBreakdown> {
        let shift = Shift::from_clock_strings(start_time, end_time)?;
        let normalized = NormalizedShift::project(&shift, &self.config.boundaries);

        let mut audit_steps = Vec::new();
        let mut current_step = 1;

        // Step 1: record the parsed shift and its midnight crossing
        audit_steps.push(AuditStep {
            step_number: current_step,
            rule_id: "shift_intake".to_string(),
            rule_name: "Shift Intake".to_string(),
            input: serde_json::json!({
                "start_time": start_time,
                "end_time": end_time,
                "bedtime": self.bedtime.to_string()
            }),
            output: serde_json::json!({
                "start": shift.start.to_string(),
                "end": shift.end.to_string(),
                "crosses_midnight": normalized.crosses_midnight()
            }),
            reasoning: if normalized.crosses_midnight() {
                format!(
                    "Shift {} to {} crosses midnight and spans all three bands' windows",
                    shift.start, shift.end
                )
            } else {
                format!("Shift {} to {} stays on one side of midnight", shift.start, shift.end)
            },
        });
        current_step += 1;

        // Steps 2-4: evaluate each band independently
        let standard = calculate_standard_band(&shift, self.bedtime, &self.config, current_step);
        audit_steps.push(standard.audit_step);
        current_step += 1;

        let post_bedtime =
            calculate_post_bedtime_band(&shift, self.bedtime, &self.config, current_step);
        audit_steps.push(post_bedtime.audit_step);
        current_step += 1;

        let post_midnight = calculate_post_midnight_band(&shift, &self.config, current_step);
        audit_steps.push(post_midnight.audit_step);
        current_step += 1;

        let pay_lines: Vec<_> = [
            standard.pay_line,
            post_bedtime.pay_line,
            post_midnight.pay_line,
        ]
        .into_iter()
        .filter(|line| line.billed_hours > 0)
        .collect();

        let total_amount: Decimal = pay_lines.iter().map(|line| line.amount).sum();

        // Final step: sum the band amounts
        audit_steps.push(AuditStep {
            step_number: current_step,
            rule_id: "daily_total".to_string(),
            rule_name: "Daily Total Calculation".to_string(),
            input: serde_json::json!({
                "band_amounts": pay_lines
                    .iter()
                    .map(|line| line.amount.normalize().to_string())
                    .collect::<Vec<_>>()
            }),
            output: serde_json::json!({
                "total_amount": total_amount.normalize().to_string()
            }),
            reasoning: format!(
                "Total daily pay: {} band(s) = ${}",
                pay_lines.len(),
                total_amount.normalize()
            ),
        });

        tracing::debug!(
            start = %shift.start,
            end = %shift.end,
            bedtime = %self.bedtime,
            total = %total_amount,
            "calculated daily pay"
        );

        Ok(PayBreakdown {
            pay_lines,
            audit_steps,
            total_amount,
        })
    }
}
