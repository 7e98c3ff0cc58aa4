//! Reconciliation record model.
//!
//! This module contains the [`ReconciliationRecord`] type produced by a
//! completed evaluation, and the [`ReportedFigures`] pair it was reconciled
//! against.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Alert, EarningsBreakdown};

/// Externally reported totals for one person.
///
/// Defaults to zeros, which is also the value used when the person's id is
/// not found in the monthly report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedFigures {
    /// Total earnings as reported by the external payroll run.
    pub total: Decimal,
    /// Net pay as reported by the external payroll run.
    pub net: Decimal,
}

/// The complete outcome of evaluating one person's period entry.
///
/// Combines the computed breakdown with the reported figures, the signed
/// difference, and any advisory alerts. Records only exist in memory: they
/// are appended to the session's consolidated list on an explicit action and
/// disappear when the list is cleared or the process ends.
///
/// # Example
///
/// ```
/// use payroll_recon::models::{EarningsBreakdown, ReconciliationRecord, ReportedFigures};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = ReconciliationRecord {
///     record_id: Uuid::new_v4(),
///     created_at: Utc::now(),
///     id: "1032456789".to_string(),
///     name: "Ana Torres".to_string(),
///     level: "A2".to_string(),
///     days_worked: 30,
///     breakdown: EarningsBreakdown::default(),
///     total_calculated: Decimal::ZERO,
///     reported_total: Decimal::ZERO,
///     reported_net: Decimal::ZERO,
///     difference: Decimal::ZERO,
///     alerts: vec![],
/// };
/// assert!(record.alerts.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationRecord {
    /// Unique identifier for this evaluation.
    pub record_id: Uuid,
    /// When the evaluation was performed.
    pub created_at: DateTime<Utc>,
    /// Identity document number.
    pub id: String,
    /// Person's display name.
    pub name: String,
    /// Salary level the calculation used.
    pub level: String,
    /// Days worked in the period.
    pub days_worked: u32,
    /// The nine computed earnings components.
    pub breakdown: EarningsBreakdown,
    /// Sum of the nine components, rounded to 2 decimals.
    pub total_calculated: Decimal,
    /// Reported total the calculation was reconciled against.
    pub reported_total: Decimal,
    /// Reported net pay, carried through for the export.
    pub reported_net: Decimal,
    /// `reported_total - total_calculated`, rounded to 2 decimals.
    pub difference: Decimal,
    /// Advisory alerts raised during reconciliation.
    pub alerts: Vec<Alert>,
}
