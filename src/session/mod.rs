//! Session-scoped consolidation of reconciliation records.
//!
//! The consolidated list lives only for the current interactive session.
//! The calculator never touches it; callers append finished records
//! explicitly and clear the list explicitly.

use tracing::info;

use crate::models::ReconciliationRecord;

/// Owns the session's consolidated list of reconciliation records.
///
/// Append-only between clears: no dedup, no revalidation. Records were
/// already validated and reconciled before they get here.
///
/// # Example
///
/// ```
/// use payroll_recon::session::Consolidator;
///
/// let mut consolidator = Consolidator::new();
/// assert!(consolidator.is_empty());
/// assert_eq!(consolidator.clear(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Consolidator {
    records: Vec<ReconciliationRecord>,
}

impl Consolidator {
    /// Creates an empty consolidator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record to the consolidated list.
    pub fn append(&mut self, record: ReconciliationRecord) {
        info!(
            person_id = %record.id,
            record_id = %record.record_id,
            total = self.records.len() + 1,
            "Record appended to consolidated list"
        );
        self.records.push(record);
    }

    /// Empties the list unconditionally, returning how many records were
    /// dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.records.len();
        self.records.clear();
        info!(dropped, "Consolidated list cleared");
        dropped
    }

    /// Returns the consolidated records in append order.
    pub fn records(&self) -> &[ReconciliationRecord] {
        &self.records
    }

    /// Returns the number of consolidated records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records have been consolidated.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
