//! Advisory alert model.
//!
//! Alerts surface conditions that deserve a reviewer's attention. They never
//! block computation, consolidation, or export.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The condition that raised an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// `|reported - calculated|` exceeded the review threshold.
    DifferenceExceedsThreshold,
    /// More days worked than the 30-day reference period.
    DaysExceedPeriod,
    /// The derived hourly rate was zero or negative.
    InvalidHourlyRate,
    /// The level table's transport flag held a value the parser does not know.
    UnrecognizedTransportFlag,
}

/// An advisory warning produced during reconciliation.
///
/// # Example
///
/// ```
/// use payroll_recon::models::{Alert, AlertKind};
///
/// let alert = Alert::new(AlertKind::DaysExceedPeriod, "Days worked > 30");
/// assert_eq!(alert.kind, AlertKind::DaysExceedPeriod);
/// assert_eq!(alert.to_string(), "Days worked > 30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// The condition that raised the alert.
    pub kind: AlertKind,
    /// A human-readable description for the reviewer.
    pub message: String,
}

impl Alert {
    /// Creates an alert of the given kind with a reviewer-facing message.
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
