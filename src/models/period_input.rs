//! Period input model.
//!
//! This module defines the [`PeriodInput`] struct and the
//! [`TransportSelection`] enum capturing one person's entry for a period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the caller wants transport-allowance eligibility decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportSelection {
    /// Pay the allowance regardless of the level table.
    Yes,
    /// Never pay the allowance.
    No,
    /// Derive eligibility from the level table's optional flag column.
    #[default]
    Auto,
}

/// One person's inputs for a single period.
///
/// Hours and currency amounts are entered as-is; nothing is persisted until
/// the computed record is explicitly appended to the consolidated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Identity document number used to match against the monthly report.
    pub id: String,
    /// Person's display name.
    pub name: String,
    /// Selected salary level identifier.
    pub level: String,
    /// Days worked in the period (0–31 as entered; >30 raises an alert).
    pub days_worked: u32,
    /// Ordinary daytime hours.
    pub ordinary_day_hours: Decimal,
    /// Daytime overtime hours.
    pub overtime_day_hours: Decimal,
    /// Ordinary night hours subject to the night surcharge.
    pub night_hours: Decimal,
    /// Sunday/holiday hours subject to the holiday surcharge.
    pub holiday_hours: Decimal,
    /// Total food allowance for the period.
    pub food_allowance: Decimal,
    /// Retroactive payments and bonuses for the period.
    pub retroactive_bonuses: Decimal,
    /// Any other earnings for the period.
    pub other_earnings: Decimal,
    /// Transport-allowance decision mode.
    #[serde(default)]
    pub transport: TransportSelection,
}
