//! Core data models for the payroll reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod alert;
mod earnings;
mod period_input;
mod record;

pub use alert::{Alert, AlertKind};
pub use earnings::EarningsBreakdown;
pub use period_input::{PeriodInput, TransportSelection};
pub use record::{ReconciliationRecord, ReportedFigures};
