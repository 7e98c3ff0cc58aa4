//! Monthly payroll report validation and lookup.
//!
//! The monthly report is the externally produced payroll run the computed
//! figures are reconciled against. It is optional: the engine works without
//! one, leaving reported figures at their defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::ReportedFigures;

use super::dataset::Dataset;
use super::level_table::duplicates;

/// Required column holding the identity document number.
pub const ID_COLUMN: &str = "cedula";

/// Required column holding the reported total earnings.
pub const REPORTED_TOTAL_COLUMN: &str = "total_devengado_reportado";

/// Optional column holding the person's name.
pub const NAME_COLUMN: &str = "nombre";

/// Optional column holding the reported net pay.
pub const NET_COLUMN: &str = "neto_reportado";

const DATASET_NAME: &str = "monthly_report";

/// One validated row of the monthly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedRow {
    /// Identity document number, always compared as a string.
    pub id: String,
    /// Person's name, when the report carries one.
    pub name: Option<String>,
    /// Total earnings reported by the external payroll run.
    pub total_reported: Decimal,
    /// Net pay reported by the external payroll run, when present.
    pub net_reported: Option<Decimal>,
}

/// The validated monthly payroll report.
///
/// # Example
///
/// ```
/// use payroll_recon::table::{Cell, Dataset, MonthlyReport};
/// use rust_decimal::Decimal;
///
/// let dataset = Dataset::new(
///     vec![
///         "cedula".to_string(),
///         "total_devengado_reportado".to_string(),
///     ],
///     vec![vec![
///         Cell::Text("1032456789".to_string()),
///         Cell::Number(Decimal::from(1_700_000)),
///     ]],
/// );
/// let report = MonthlyReport::from_dataset(&dataset).unwrap();
/// assert!(report.find_by_id("1032456789").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    rows: Vec<ReportedRow>,
}

impl MonthlyReport {
    /// Validates a raw dataset into a monthly report.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingColumns`] when `cedula` or
    ///   `total_devengado_reportado` is absent.
    /// - [`EngineError::MissingId`] when any row has an empty id.
    /// - [`EngineError::NonNumericValue`] when a reported total does not
    ///   parse as a number.
    pub fn from_dataset(dataset: &Dataset) -> EngineResult<Self> {
        let missing = dataset.missing_columns(&[ID_COLUMN, REPORTED_TOTAL_COLUMN]);
        if !missing.is_empty() {
            return Err(EngineError::MissingColumns {
                dataset: DATASET_NAME.to_string(),
                columns: missing,
            });
        }

        let mut rows = Vec::with_capacity(dataset.rows().len());

        for (index, _) in dataset.rows().iter().enumerate() {
            let id = dataset
                .cell(index, ID_COLUMN)
                .as_text()
                .ok_or(EngineError::MissingId { row: index + 1 })?;

            let total_cell = dataset.cell(index, REPORTED_TOTAL_COLUMN);
            let total_reported =
                total_cell
                    .to_decimal()
                    .ok_or_else(|| EngineError::NonNumericValue {
                        dataset: DATASET_NAME.to_string(),
                        column: REPORTED_TOTAL_COLUMN.to_string(),
                        row: index + 1,
                        value: total_cell.to_string(),
                    })?;

            rows.push(ReportedRow {
                id,
                name: dataset.cell(index, NAME_COLUMN).as_text(),
                total_reported,
                net_reported: dataset.cell(index, NET_COLUMN).to_decimal(),
            });
        }

        info!(rows = rows.len(), "Monthly report validated");

        Ok(Self { rows })
    }

    /// Returns the first row whose id exactly equals the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&ReportedRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Returns the reported figures for an id, or zeros when the id is not
    /// in the report.
    pub fn reported_figures(&self, id: &str) -> ReportedFigures {
        match self.find_by_id(id) {
            Some(row) => ReportedFigures {
                total: row.total_reported,
                net: row.net_reported.unwrap_or(Decimal::ZERO),
            },
            None => ReportedFigures::default(),
        }
    }

    /// Returns all validated rows in report order.
    pub fn rows(&self) -> &[ReportedRow] {
        &self.rows
    }

    /// Returns ids that appear more than once, in first-seen order.
    /// Lookups resolve to the first match; duplicates are a data-quality
    /// concern for the reviewer.
    pub fn duplicate_ids(&self) -> Vec<String> {
        duplicates(self.rows.iter().map(|row| row.id.as_str()))
    }
}
