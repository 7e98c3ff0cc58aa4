//! Transport allowance resolution and amount.
//!
//! Eligibility follows a 3-way contract: an explicit caller selection wins,
//! `Auto` consults the level table's optional flag, and `Auto` without a
//! flag column defaults to eligible.

use rust_decimal::Decimal;

use crate::models::TransportSelection;
use crate::table::TransportFlag;

use super::proration::day_fraction;

/// The outcome of resolving transport-allowance eligibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResolution {
    /// Whether the allowance is payable.
    pub eligible: bool,
    /// The raw flag value when `Auto` hit an unrecognized one.
    pub unrecognized_flag: Option<String>,
}

/// Resolves transport-allowance eligibility.
///
/// Resolution order:
/// 1. An explicit `Yes`/`No` selection is used as-is.
/// 2. `Auto` with a flag (the table carried the column) follows the flag;
///    an [`TransportFlag::Unrecognized`] value resolves to not eligible and
///    is reported back so the caller can raise an advisory alert.
/// 3. `Auto` without a flag column defaults to eligible.
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::resolve_transport_eligibility;
/// use payroll_recon::models::TransportSelection;
/// use payroll_recon::table::TransportFlag;
///
/// let auto_flagged =
///     resolve_transport_eligibility(TransportSelection::Auto, Some(&TransportFlag::Eligible));
/// assert!(auto_flagged.eligible);
///
/// let auto_no_column = resolve_transport_eligibility(TransportSelection::Auto, None);
/// assert!(auto_no_column.eligible);
/// ```
pub fn resolve_transport_eligibility(
    selection: TransportSelection,
    flag: Option<&TransportFlag>,
) -> TransportResolution {
    match selection {
        TransportSelection::Yes => TransportResolution {
            eligible: true,
            unrecognized_flag: None,
        },
        TransportSelection::No => TransportResolution {
            eligible: false,
            unrecognized_flag: None,
        },
        TransportSelection::Auto => match flag {
            Some(TransportFlag::Unrecognized(raw)) => TransportResolution {
                eligible: false,
                unrecognized_flag: Some(raw.clone()),
            },
            Some(flag) => TransportResolution {
                eligible: flag.is_eligible(),
                unrecognized_flag: None,
            },
            None => TransportResolution {
                eligible: true,
                unrecognized_flag: None,
            },
        },
    }
}

/// The allowance amount for an eligible person, rounded to 2 decimals.
///
/// Prorated by `days/30` when proration is enabled, otherwise the flat
/// monthly amount.
///
/// # Example
///
/// ```
/// use payroll_recon::calculation::transport_allowance_amount;
/// use rust_decimal::Decimal;
///
/// let half = transport_allowance_amount(Decimal::from(200_000), 15, true);
/// assert_eq!(half, Decimal::new(10_000_000, 2)); // 100000.00
///
/// let flat = transport_allowance_amount(Decimal::from(200_000), 15, false);
/// assert_eq!(flat, Decimal::new(20_000_000, 2)); // 200000.00
/// ```
pub fn transport_allowance_amount(
    monthly_allowance: Decimal,
    days_worked: u32,
    prorate_by_days: bool,
) -> Decimal {
    let amount = if prorate_by_days {
        monthly_allowance * day_fraction(days_worked)
    } else {
        monthly_allowance
    };
    amount.round_dp(2)
}
