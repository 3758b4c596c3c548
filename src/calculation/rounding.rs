//! Hour rounding rule.
//!
//! Partial hours are always billed in the sitter's favor: any fractional
//! remainder within an hour rounds the hour count up. Each band rounds
//! independently of the others.

/// Converts worked minutes into billable whole hours, rounding up.
///
/// # Example
///
/// ```
/// use sitter_engine::calculation::billable_hours;
///
/// assert_eq!(billable_hours(0), 0);
/// assert_eq!(billable_hours(60), 1);
/// assert_eq!(billable_hours(61), 2);
/// ```
pub fn billable_hours(minutes: u32) -> u32 {
    minutes.div_ceil(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_minutes_bills_nothing() {
        assert_eq!(billable_hours(0), 0);
    }

    #[test]
    fn test_partial_hour_rounds_up() {
        assert_eq!(billable_hours(1), 1);
        assert_eq!(billable_hours(59), 1);
        assert_eq!(billable_hours(61), 2);
        assert_eq!(billable_hours(119), 2);
    }

    #[test]
    fn test_exact_hours_bill_exactly() {
        assert_eq!(billable_hours(60), 1);
        assert_eq!(billable_hours(120), 2);
        assert_eq!(billable_hours(240), 4);
    }
}
