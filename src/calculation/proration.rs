//! Salary proration.
//!
//! Monthly amounts are scaled by days worked over a fixed 30-day reference.
//! The divisor is deliberately not calendar-aware: 30 is the reference used
//! by the payroll runs this engine reconciles against, for every month.

use rust_decimal::Decimal;

/// The fixed day count a month is prorated against.
pub const PRORATION_DAYS: u32 = 30;

/// Returns `days_worked / 30` as an unrounded fraction.
pub fn day_fraction(days_worked: u32) -> Decimal {
    Decimal::from(days_worked) / Decimal::from(PRORATION_DAYS)
}

/// Prorates a base monthly salary by days worked, rounded to 2 decimals.
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::prorate_salary;
/// use rust_decimal::Decimal;
///
/// let prorated = prorate_salary(Decimal::from(300_000), 15);
/// assert_eq!(prorated, Decimal::new(15_000_000, 2)); // 150000.00
/// ```
pub fn prorate_salary(base_salary: Decimal, days_worked: u32) -> Decimal {
    (base_salary * day_fraction(days_worked)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_month_halves_the_salary() {
        assert_eq!(prorate_salary(dec("300000"), 15), dec("150000.00"));
    }

    #[test]
    fn test_full_reference_month_keeps_the_salary() {
        assert_eq!(prorate_salary(dec("1500000"), 30), dec("1500000.00"));
    }

    #[test]
    fn test_zero_days_prorates_to_zero() {
        assert_eq!(prorate_salary(dec("1500000"), 0), dec("0.00"));
    }

    #[test]
    fn test_divisor_is_thirty_even_for_31_days() {
        // 31 days over the 30-day reference pays more than the base.
        assert_eq!(prorate_salary(dec("300000"), 31), dec("310000.00"));
    }

    #[test]
    fn test_uneven_division_rounds_to_cents() {
        // 100000 * 7 / 30 = 23333.333...
        assert_eq!(prorate_salary(dec("100000"), 7), dec("23333.33"));
    }
}
