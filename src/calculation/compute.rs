//! Assembly of the nine-component earnings breakdown.

use rust_decimal::Decimal;

use crate::config::CalcConfig;
use crate::models::{EarningsBreakdown, PeriodInput};
use crate::table::LevelRow;

use super::hour_pay::{ordinary_hours_pay, surcharged_hours_pay};
use super::hourly_rate::hourly_rate;
use super::proration::prorate_salary;
use super::transport_allowance::{
    TransportResolution, resolve_transport_eligibility, transport_allowance_amount,
};

/// A computed breakdown together with the figures reconciliation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    /// The nine computed earnings components.
    pub breakdown: EarningsBreakdown,
    /// The unrounded hourly rate the hour components were priced at.
    pub hourly_rate: Decimal,
    /// How transport-allowance eligibility was resolved.
    pub transport: TransportResolution,
}

/// Computes the expected earnings for one person and period.
///
/// Pure function of its inputs: identical inputs always produce an
/// identical [`Computation`]. Every component is rounded to 2 decimals as
/// it is produced, so `breakdown.total()` is the exact sum of the stored
/// components.
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::compute;
/// use payroll_recon::config::CalcConfig;
/// use payroll_recon::models::{PeriodInput, TransportSelection};
/// use payroll_recon::table::LevelRow;
/// use rust_decimal::Decimal;
///
/// let level = LevelRow {
///     level: "A1".to_string(),
///     base_salary: Decimal::from(1_200_000),
///     transport_flag: None,
/// };
/// let input = PeriodInput {
///     id: "1032456789".to_string(),
///     name: "Ana Torres".to_string(),
///     level: "A1".to_string(),
///     days_worked: 30,
///     ordinary_day_hours: Decimal::from(8),
///     overtime_day_hours: Decimal::ZERO,
///     night_hours: Decimal::ZERO,
///     holiday_hours: Decimal::ZERO,
///     food_allowance: Decimal::ZERO,
///     retroactive_bonuses: Decimal::ZERO,
///     other_earnings: Decimal::ZERO,
///     transport: TransportSelection::No,
/// };
///
/// let outcome = compute(&level, &input, &CalcConfig::default());
/// assert_eq!(outcome.hourly_rate, Decimal::from(5_000));
/// assert_eq!(outcome.breakdown.ordinary_day_pay, Decimal::new(4_000_000, 2));
/// ```
pub fn compute(level: &LevelRow, input: &PeriodInput, config: &CalcConfig) -> Computation {
    let rate = hourly_rate(level.base_salary, config.base_monthly_hours);

    let transport = resolve_transport_eligibility(input.transport, level.transport_flag.as_ref());
    let transport_allowance = if transport.eligible {
        transport_allowance_amount(
            config.monthly_transport_allowance,
            input.days_worked,
            config.prorate_transport_by_days,
        )
    } else {
        Decimal::ZERO
    };

    let breakdown = EarningsBreakdown {
        prorated_salary: prorate_salary(level.base_salary, input.days_worked),
        ordinary_day_pay: ordinary_hours_pay(input.ordinary_day_hours, rate),
        overtime_day_pay: surcharged_hours_pay(
            input.overtime_day_hours,
            rate,
            config.overtime_day_pct,
        ),
        night_surcharge_pay: surcharged_hours_pay(
            input.night_hours,
            rate,
            config.night_surcharge_pct,
        ),
        holiday_surcharge_pay: surcharged_hours_pay(
            input.holiday_hours,
            rate,
            config.holiday_surcharge_pct,
        ),
        transport_allowance,
        food_allowance: input.food_allowance.round_dp(2),
        retroactive_bonuses: input.retroactive_bonuses.round_dp(2),
        other_earnings: input.other_earnings.round_dp(2),
    };

    Computation {
        breakdown,
        hourly_rate: rate,
        transport,
    }
}
