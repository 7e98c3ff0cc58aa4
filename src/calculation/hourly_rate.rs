//! Hourly rate derivation.

use rust_decimal::Decimal;

/// Derives the hourly rate from the base monthly salary.
///
/// The rate is left unrounded; component formulas round their own results.
/// A rate of zero or less is not a hard error: reconciliation surfaces it
/// as an advisory alert. Zero configured hours also yields a zero rate so
/// the same alert path covers it.
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// let rate = hourly_rate(Decimal::from(1_200_000), 240);
/// assert_eq!(rate, Decimal::from(5_000));
/// ```
pub fn hourly_rate(base_salary: Decimal, base_monthly_hours: u32) -> Decimal {
    if base_monthly_hours == 0 {
        return Decimal::ZERO;
    }
    base_salary / Decimal::from(base_monthly_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_is_salary_over_hours() {
        assert_eq!(hourly_rate(dec("1200000"), 240), dec("5000"));
    }

    #[test]
    fn test_rate_keeps_fractional_precision() {
        // 1000000 / 240 = 4166.666..., no rounding at this stage.
        let rate = hourly_rate(dec("1000000"), 240);
        assert!(rate > dec("4166.66"));
        assert!(rate < dec("4166.67"));
    }

    #[test]
    fn test_zero_hours_yields_zero_rate() {
        assert_eq!(hourly_rate(dec("1200000"), 0), Decimal::ZERO);
    }

    #[test]
    fn test_zero_salary_yields_zero_rate() {
        assert_eq!(hourly_rate(Decimal::ZERO, 240), Decimal::ZERO);
    }
}
