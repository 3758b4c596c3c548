//! Standard rate band calculation functionality.
//!
//! The standard band runs from the earliest payable start (5:00 PM by
//! default) until the child's bedtime. Time clocked before the earliest
//! start earns nothing, so an early arrival is effectively clamped to it.

use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::models::{AuditStep, PayLine, RateBand, Shift, TimeOfDay};

use super::band_overlap::{NormalizedShift, overlap_minutes};
use super::rounding::billable_hours;

/// The result of a standard band calculation, including the pay line and audit step.
#[derive(Debug, Clone)]
pub struct StandardBandResult {
    /// The pay line for the standard band (may bill zero hours).
    pub pay_line: PayLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates standard-rate pay for the portion of a shift before bedtime.
///
/// The band window is `earliest_start..bedtime`; the shift's overlap with
/// it is measured in minutes and rounded up to whole billable hours.
///
/// # Arguments
///
/// * `shift` - The shift to calculate pay for
/// * `bedtime` - The bedtime fixed for this calculator instance
/// * `config` - The schedule configuration containing boundaries and rates
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::calculate_standard_band;
/// use sitter_engine::config::ScheduleConfig;
/// use sitter_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let config = ScheduleConfig::default();
/// let bedtime = "8:00 PM".parse().unwrap();
/// let shift = Shift::from_clock_strings("5:00 PM", "8:00 PM").unwrap();
///
/// let result = calculate_standard_band(&shift, bedtime, &config, 1);
/// // 3 hours × $12 = $36
/// assert_eq!(result.pay_line.amount, Decimal::from(36));
/// ```
pub fn calculate_standard_band(
    shift: &Shift,
    bedtime: TimeOfDay,
    config: &ScheduleConfig,
    step_number: u32,
) -> StandardBandResult {
    let normalized = NormalizedShift::project(shift, &config.boundaries);
    let band_lower = config.boundaries.earliest_start.minute_of_day();
    let band_upper = bedtime.minute_of_day();

    let minutes = overlap_minutes(band_lower, band_upper, normalized.start, normalized.end);
    let billed_hours = billable_hours(minutes);
    let rate = config.rates.rate_for(RateBand::Standard);
    let amount = Decimal::from(billed_hours) * rate;

    let pay_line = PayLine {
        band: RateBand::Standard,
        minutes,
        billed_hours,
        rate,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "standard_band".to_string(),
        rule_name: "Standard Rate Band".to_string(),
        input: serde_json::json!({
            "start": shift.start.to_string(),
            "end": shift.end.to_string(),
            "band_lower": config.boundaries.earliest_start.to_string(),
            "band_upper": bedtime.to_string()
        }),
        output: serde_json::json!({
            "minutes": minutes,
            "billed_hours": billed_hours,
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Standard band {}-{}: {} minute(s) worked, billed as {} hour(s) × ${} = ${}",
            config.boundaries.earliest_start,
            bedtime,
            minutes,
            billed_hours,
            rate.normalize(),
            amount.normalize()
        ),
    };

    StandardBandResult {
        pay_line,
        audit_step,
    }
}
