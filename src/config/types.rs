//! Calculation parameter types.
//!
//! This module contains the strongly-typed parameter set consumed by the
//! calculator. Defaults mirror the values the reviewing team uses month to
//! month; every field can be adjusted per session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Lowest accepted value for [`CalcConfig::base_monthly_hours`].
pub const MIN_BASE_MONTHLY_HOURS: u32 = 160;

/// Highest accepted value for [`CalcConfig::base_monthly_hours`].
pub const MAX_BASE_MONTHLY_HOURS: u32 = 300;

/// Runtime parameters for the payroll calculation.
///
/// Percentage factors are stored as decimal fractions (`0.25` for 25%).
/// The overtime-night factor is part of the adjustable parameter set even
/// though no period input field currently consumes it.
///
/// # Example
///
/// ```
/// use payroll_recon::config::CalcConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalcConfig::default();
/// assert_eq!(config.base_monthly_hours, 240);
/// assert_eq!(config.overtime_day_pct, Decimal::new(25, 2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Base hours in a month used to derive the hourly rate.
    pub base_monthly_hours: u32,
    /// Surcharge factor for daytime overtime hours.
    pub overtime_day_pct: Decimal,
    /// Surcharge factor for nighttime overtime hours.
    pub overtime_night_pct: Decimal,
    /// Surcharge factor for ordinary night hours.
    pub night_surcharge_pct: Decimal,
    /// Surcharge factor for Sunday/holiday hours.
    pub holiday_surcharge_pct: Decimal,
    /// Monthly transport allowance amount, paid when eligible.
    pub monthly_transport_allowance: Decimal,
    /// Whether the transport allowance is prorated by days worked.
    pub prorate_transport_by_days: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            base_monthly_hours: 240,
            overtime_day_pct: Decimal::new(25, 2),
            overtime_night_pct: Decimal::new(75, 2),
            night_surcharge_pct: Decimal::new(35, 2),
            holiday_surcharge_pct: Decimal::new(75, 2),
            monthly_transport_allowance: Decimal::from(200_000),
            prorate_transport_by_days: true,
        }
    }
}

impl CalcConfig {
    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when `base_monthly_hours` is
    /// outside `[160, 300]` or the transport allowance is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_monthly_hours < MIN_BASE_MONTHLY_HOURS
            || self.base_monthly_hours > MAX_BASE_MONTHLY_HOURS
        {
            return Err(EngineError::InvalidConfig {
                field: "base_monthly_hours".to_string(),
                message: format!(
                    "must be between {} and {}, got {}",
                    MIN_BASE_MONTHLY_HOURS, MAX_BASE_MONTHLY_HOURS, self.base_monthly_hours
                ),
            });
        }

        if self.monthly_transport_allowance < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "monthly_transport_allowance".to_string(),
                message: format!("must not be negative, got {}", self.monthly_transport_allowance),
            });
        }

        Ok(())
    }
}
