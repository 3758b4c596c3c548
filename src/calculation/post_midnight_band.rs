//! Post-midnight rate band calculation functionality.
//!
//! The post-midnight band runs from midnight until the latest payable end
//! (4:00 AM by default). Time clocked after the latest end earns nothing.

use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::models::{AuditStep, PayLine, RateBand, Shift};

use super::band_overlap::{MINUTES_PER_DAY, NormalizedShift, overlap_minutes};
use super::rounding::billable_hours;

/// The result of a post-midnight band calculation, including the pay line and audit step.
#[derive(Debug, Clone)]
pub struct PostMidnightBandResult {
    /// The pay line for the post-midnight band (may bill zero hours).
    pub pay_line: PayLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates post-midnight pay for the portion of a shift past midnight.
///
/// The band window is `midnight..latest_end` on the linear timeline. Both a
/// midnight-crossing evening shift and a shift that starts after midnight
/// land in this window through the same projection.
///
/// # Arguments
///
/// * `shift` - The shift to calculate pay for
/// * `config` - The schedule configuration containing boundaries and rates
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use sitter_engine::calculation::calculate_post_midnight_band;
/// use sitter_engine::config::ScheduleConfig;
/// use sitter_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let config = ScheduleConfig::default();
/// let shift = Shift::from_clock_strings("12:00 AM", "2:00 AM").unwrap();
///
/// let result = calculate_post_midnight_band(&shift, &config, 1);
/// // 2 hours × $16 = $32
/// assert_eq!(result.pay_line.amount, Decimal::from(32));
/// ```
pub fn calculate_post_midnight_band(
    shift: &Shift,
    config: &ScheduleConfig,
    step_number: u32,
) -> PostMidnightBandResult {
    let normalized = NormalizedShift::project(shift, &config.boundaries);
    let band_lower = MINUTES_PER_DAY;
    let band_upper = MINUTES_PER_DAY + config.boundaries.latest_end.minute_of_day();

    let minutes = overlap_minutes(band_lower, band_upper, normalized.start, normalized.end);
    let billed_hours = billable_hours(minutes);
    let rate = config.rates.rate_for(RateBand::PostMidnight);
    let amount = Decimal::from(billed_hours) * rate;

    let pay_line = PayLine {
        band: RateBand::PostMidnight,
        minutes,
        billed_hours,
        rate,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "post_midnight_band".to_string(),
        rule_name: "Post-Midnight Rate Band".to_string(),
        input: serde_json::json!({
            "start": shift.start.to_string(),
            "end": shift.end.to_string(),
            "band_lower": "12:00 AM",
            "band_upper": config.boundaries.latest_end.to_string()
        }),
        output: serde_json::json!({
            "minutes": minutes,
            "billed_hours": billed_hours,
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Post-midnight band midnight-{}: {} minute(s) worked, billed as {} hour(s) × ${} = ${}",
            config.boundaries.latest_end,
            minutes,
            billed_hours,
            rate.normalize(),
            amount.normalize()
        ),
    };

    PostMidnightBandResult {
        pay_line,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculate(start: &str, end: &str) -> PostMidnightBandResult {
        let shift = Shift::from_clock_strings(start, end).unwrap();
        calculate_post_midnight_band(&shift, &ScheduleConfig::default(), 1)
    }

    /// MID-001: shift lying fully inside the band
    #[test]
    fn test_shift_inside_band() {
        let result = calculate("12:00 AM", "2:00 AM");
        assert_eq!(result.pay_line.minutes, 120);
        assert_eq!(result.pay_line.billed_hours, 2);
        assert_eq!(result.pay_line.amount, Decimal::from(32));
    }

    /// MID-002: evening shift wrapping past midnight bills from midnight
    #[test]
    fn test_evening_shift_bills_from_midnight() {
        let result = calculate("5:00 PM", "1:00 AM");
        assert_eq!(result.pay_line.minutes, 60);
        assert_eq!(result.pay_line.amount, Decimal::from(16));
    }

    /// MID-003: shift running to the latest end covers the whole window
    #[test]
    fn test_shift_to_latest_end() {
        let result = calculate("11:00 PM", "4:00 AM");
        assert_eq!(result.pay_line.minutes, 240);
        assert_eq!(result.pay_line.billed_hours, 4);
        assert_eq!(result.pay_line.amount, Decimal::from(64));
    }

    /// MID-004: evening shift ending at midnight bills nothing here
    #[test]
    fn test_shift_ending_at_midnight_bills_nothing() {
        let result = calculate("9:00 PM", "12:00 AM");
        assert_eq!(result.pay_line.minutes, 0);
        assert_eq!(result.pay_line.amount, Decimal::ZERO);
    }

    /// MID-005: evening-only shift bills nothing here
    #[test]
    fn test_evening_only_shift_bills_nothing() {
        let result = calculate("5:00 PM", "10:00 PM");
        assert_eq!(result.pay_line.minutes, 0);
        assert_eq!(result.pay_line.amount, Decimal::ZERO);
    }

    /// MID-006: work past the latest end is clamped to the window
    #[test]
    fn test_end_past_latest_end_is_clamped() {
        let result = calculate("1:00 AM", "6:00 AM");
        assert_eq!(result.pay_line.minutes, 180);
        assert_eq!(result.pay_line.billed_hours, 3);
        assert_eq!(result.pay_line.amount, Decimal::from(48));
    }

    /// MID-007: partial hour past midnight rounds up
    #[test]
    fn test_partial_hour_rounds_up() {
        let result = calculate("10:00 PM", "12:30 AM");
        assert_eq!(result.pay_line.minutes, 30);
        assert_eq!(result.pay_line.billed_hours, 1);
        assert_eq!(result.pay_line.amount, Decimal::from(16));
    }

    #[test]
    fn test_audit_step_explains_the_band() {
        let result = calculate("12:00 AM", "2:00 AM");
        assert_eq!(result.audit_step.rule_id, "post_midnight_band");
        assert_eq!(result.audit_step.input["band_upper"], "4:00 AM");
        assert!(result.audit_step.reasoning.contains("2 hour(s)"));
    }
}
