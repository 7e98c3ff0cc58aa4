//! Earnings breakdown model.
//!
//! This module contains the [`EarningsBreakdown`] type: the fixed set of
//! nine earnings components computed for a person in a period. Every
//! component is rounded to 2 decimals at computation time, so the total is
//! always the exact sum of the stored components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The nine computed earnings components for one person and period.
///
/// # Example
///
/// ```
/// use payroll_recon::models::EarningsBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = EarningsBreakdown {
///     prorated_salary: Decimal::from(150_000),
///     ..EarningsBreakdown::default()
/// };
/// assert_eq!(breakdown.total(), Decimal::from(150_000).round_dp(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Base salary scaled by days worked over the 30-day reference.
    pub prorated_salary: Decimal,
    /// Pay for ordinary daytime hours.
    pub ordinary_day_pay: Decimal,
    /// Pay for daytime overtime hours, surcharge included.
    pub overtime_day_pay: Decimal,
    /// Pay for ordinary night hours, surcharge included.
    pub night_surcharge_pay: Decimal,
    /// Pay for Sunday/holiday hours, surcharge included.
    pub holiday_surcharge_pay: Decimal,
    /// Transport allowance, zero when not eligible.
    pub transport_allowance: Decimal,
    /// Food allowance, passed through from the period input.
    pub food_allowance: Decimal,
    /// Retroactive payments and bonuses, passed through.
    pub retroactive_bonuses: Decimal,
    /// Any other earnings, passed through.
    pub other_earnings: Decimal,
}

impl EarningsBreakdown {
    /// Returns the component names and amounts in their fixed reporting order.
    pub fn components(&self) -> [(&'static str, Decimal); 9] {
        [
            ("prorated_salary", self.prorated_salary),
            ("ordinary_day_pay", self.ordinary_day_pay),
            ("overtime_day_pay", self.overtime_day_pay),
            ("night_surcharge_pay", self.night_surcharge_pay),
            ("holiday_surcharge_pay", self.holiday_surcharge_pay),
            ("transport_allowance", self.transport_allowance),
            ("food_allowance", self.food_allowance),
            ("retroactive_bonuses", self.retroactive_bonuses),
            ("other_earnings", self.other_earnings),
        ]
    }

    /// Sums the nine components, rounded to 2 decimals.
    ///
    /// Components are already rounded individually, so this matches the
    /// plain sum; the final rounding keeps the stored total at 2 decimals
    /// even for callers that build a breakdown by hand.
    pub fn total(&self) -> Decimal {
        self.components()
            .iter()
            .map(|(_, amount)| *amount)
            .sum::<Decimal>()
            .round_dp(2)
    }
}
