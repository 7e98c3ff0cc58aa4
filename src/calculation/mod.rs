//! Calculation logic for the payroll reconciliation engine.
//!
//! This module contains all the calculation functions for determining
//! expected earnings: salary proration, hourly rate derivation, ordinary
//! and surcharged hour pay, transport-allowance resolution, assembly of the
//! nine-component breakdown, and reconciliation against reported totals.

mod compute;
mod hour_pay;
mod hourly_rate;
mod proration;
mod reconcile;
mod transport_allowance;

pub use compute::{Computation, compute};
pub use hour_pay::{ordinary_hours_pay, surcharged_hours_pay};
pub use hourly_rate::hourly_rate;
pub use proration::{PRORATION_DAYS, day_fraction, prorate_salary};
pub use reconcile::{collect_alerts, difference, difference_threshold, evaluate};
pub use transport_allowance::{
    TransportResolution, resolve_transport_eligibility, transport_allowance_amount,
};
