//! Post-bedtime rate band calculation functionality.
//!
//! The post-bedtime band runs from the child's bedtime until midnight.
//! A shift that wraps past midnight pays the full bedtime-to-midnight
//! span at this band's rate.

use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::models::{AuditStep, PayLine, RateBand, Shift, TimeOfDay};

use super::band_overlap::{MINUTES_PER_DAY, NormalizedShift, overlap_minutes};
use super::rounding::billable_hours;

/// The result of a post-bedtime band calculation, including the pay line and audit step.
#[derive(Debug, Clone)]
pub struct PostBedtimeBandResult {
    /// The pay line for the post-bedtime band (may bill zero hours).
    pub pay_line: PayLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates post-bedtime pay for the portion of a shift between bedtime and midnight.
///
/// The band window is `bedtime..midnight` on the linear timeline; a shift
/// ending at or past midnight covers the whole window.
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
/// use sitter_engine::calculation::calculate_post_bedtime_band;
/// use sitter_engine::config::ScheduleConfig;
/// use sitter_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let config = ScheduleConfig::default();
/// let bedtime = "8:00 PM".parse().unwrap();
/// let shift = Shift::from_clock_strings("8:00 PM", "10:00 PM").unwrap();
///
/// let result = calculate_post_bedtime_band(&shift, bedtime, &config, 1);
/// // 2 hours × $8 = $16
/// assert_eq!(result.pay_line.amount, Decimal::from(16));
/// ```
pub fn calculate_post_bedtime_band(
    shift: &Shift,
    bedtime: TimeOfDay,
    config: &ScheduleConfig,
    step_number: u32,
) -> PostBedtimeBandResult {
    let normalized = NormalizedShift::project(shift, &config.boundaries);
    let band_lower = bedtime.minute_of_day();
    let band_upper = MINUTES_PER_DAY;

    let minutes = overlap_minutes(band_lower, band_upper, normalized.start, normalized.end);
    let billed_hours = billable_hours(minutes);
    let rate = config.rates.rate_for(RateBand::PostBedtime);
    let amount = Decimal::from(billed_hours) * rate;

    let pay_line = PayLine {
        band: RateBand::PostBedtime,
        minutes,
        billed_hours,
        rate,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "post_bedtime_band".to_string(),
        rule_name: "Post-Bedtime Rate Band".to_string(),
        input: serde_json::json!({
            "start": shift.start.to_string(),
            "end": shift.end.to_string(),
            "band_lower": bedtime.to_string(),
            "band_upper": "12:00 AM"
        }),
        output: serde_json::json!({
            "minutes": minutes,
            "billed_hours": billed_hours,
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "Post-bedtime band {}-midnight: {} minute(s) worked, billed as {} hour(s) × ${} = ${}",
            bedtime,
            minutes,
            billed_hours,
            rate.normalize(),
            amount.normalize()
        ),
    };

    PostBedtimeBandResult {
        pay_line,
        audit_step,
    }
}
