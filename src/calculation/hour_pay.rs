//! Pay for ordinary and surcharged hours.
//!
//! Each formula rounds its own result to 2 decimals. Intermediate rounding
//! is part of the contract: component amounts must match the externally
//! reported figures cent for cent, so the total is the sum of the rounded
//! components rather than a rounding of the unrounded sum.

use rust_decimal::Decimal;

/// Pay for ordinary daytime hours: `hours * rate`, rounded to 2 decimals.
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::ordinary_hours_pay;
/// use rust_decimal::Decimal;
///
/// let pay = ordinary_hours_pay(Decimal::from(8), Decimal::from(5_000));
/// assert_eq!(pay, Decimal::new(4_000_000, 2)); // 40000.00
/// ```
pub fn ordinary_hours_pay(hours: Decimal, hourly_rate: Decimal) -> Decimal {
    (hours * hourly_rate).round_dp(2)
}

/// Pay for hours carrying a surcharge: `hours * rate * (1 + pct)`, rounded
/// to 2 decimals. The surcharge is a decimal fraction (`0.25` for 25%).
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::surcharged_hours_pay;
/// use rust_decimal::Decimal;
///
/// let pay = surcharged_hours_pay(
///     Decimal::from(4),
///     Decimal::from(5_000),
///     Decimal::new(25, 2),
/// );
/// assert_eq!(pay, Decimal::new(2_500_000, 2)); // 25000.00
/// ```
pub fn surcharged_hours_pay(hours: Decimal, hourly_rate: Decimal, surcharge_pct: Decimal) -> Decimal {
    (hours * hourly_rate * (Decimal::ONE + surcharge_pct)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_ordinary_pay_is_hours_times_rate() {
        assert_eq!(ordinary_hours_pay(dec("16"), dec("5000")), dec("80000.00"));
    }

    #[test]
    fn test_ordinary_pay_rounds_fractional_rates() {
        // 3 * 4166.666... = 12500.0; 7 * 4166.666... = 29166.666... -> 29166.67
        let rate = dec("1000000") / dec("240");
        assert_eq!(ordinary_hours_pay(dec("7"), rate), dec("29166.67"));
    }

    #[test]
    fn test_surcharge_applies_on_top_of_the_hour() {
        // 25% overtime: each hour pays 1.25x.
        assert_eq!(
            surcharged_hours_pay(dec("4"), dec("5000"), dec("0.25")),
            dec("25000.00")
        );
    }

    #[test]
    fn test_night_and_holiday_factors() {
        assert_eq!(
            surcharged_hours_pay(dec("10"), dec("5000"), dec("0.35")),
            dec("67500.00")
        );
        assert_eq!(
            surcharged_hours_pay(dec("10"), dec("5000"), dec("0.75")),
            dec("87500.00")
        );
    }

    #[test]
    fn test_zero_hours_pay_nothing() {
        assert_eq!(ordinary_hours_pay(Decimal::ZERO, dec("5000")), dec("0.00"));
        assert_eq!(
            surcharged_hours_pay(Decimal::ZERO, dec("5000"), dec("0.75")),
            dec("0.00")
        );
    }
}
