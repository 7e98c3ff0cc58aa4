//! Configuration for the payroll reconciliation engine.
//!
//! All calculation parameters are user-adjustable at runtime and nothing is
//! persisted by the crate; callers construct or deserialize a
//! [`CalcConfig`] and pass it into the calculation functions.

mod types;

pub use types::{CalcConfig, MAX_BASE_MONTHLY_HOURS, MIN_BASE_MONTHLY_HOURS};
