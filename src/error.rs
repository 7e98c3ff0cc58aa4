//! Error types for the payroll reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all hard failures: schema problems in uploaded datasets, workbook
//! I/O, and invalid configuration. Threshold breaches during reconciliation
//! are *not* errors; they are advisory [`Alert`](crate::models::Alert)s.

use thiserror::Error;

/// The main error type for the payroll reconciliation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_recon::error::EngineError;
///
/// let error = EngineError::LevelNotFound {
///     level: "A3".to_string(),
/// };
/// assert_eq!(error.to_string(), "Salary level not found: A3");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A dataset is missing one or more required columns.
    #[error("Dataset '{dataset}' is missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// The dataset that failed validation (e.g., "levels", "monthly_report").
        dataset: String,
        /// The names of the missing columns.
        columns: Vec<String>,
    },

    /// A required column contained a value that could not be parsed as a number.
    #[error(
        "Column '{column}' in dataset '{dataset}' must be numeric, found '{value}' at row {row}"
    )]
    NonNumericValue {
        /// The dataset the column belongs to.
        dataset: String,
        /// The offending column.
        column: String,
        /// The 1-based data row index of the offending value.
        row: usize,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A monthly report row had no identity value.
    #[error("Monthly report has a row without an id at row {row}")]
    MissingId {
        /// The 1-based data row index of the row without an id.
        row: usize,
    },

    /// The selected salary level was not found in the level table.
    #[error("Salary level not found: {level}")]
    LevelNotFound {
        /// The level identifier that was not found.
        level: String,
    },

    /// A configuration value was outside its valid range.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A workbook could not be opened or its sheet could not be read.
    #[error("Failed to read workbook '{source_name}': {message}")]
    WorkbookRead {
        /// The path or label of the workbook that failed to read.
        source_name: String,
        /// A description of the read failure.
        message: String,
    },

    /// The consolidated export could not be produced.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
