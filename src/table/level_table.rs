//! Salary level table validation and lookup.
//!
//! The level table associates each salary level with its base monthly
//! salary and an optional transport-allowance flag. Validation follows the
//! normalize-then-check pattern: column names are normalized by the
//! [`Dataset`], required columns are checked first, then every
//! `salario_base` value must coerce to a number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::dataset::{Cell, Dataset};

/// Required column holding the level identifier.
pub const LEVEL_COLUMN: &str = "nivel";

/// Required column holding the base monthly salary.
pub const BASE_SALARY_COLUMN: &str = "salario_base";

/// Optional column holding the transport-allowance flag.
pub const TRANSPORT_FLAG_COLUMN: &str = "aplica_aux_transporte";

const DATASET_NAME: &str = "levels";

/// The parsed transport-allowance flag for a level.
///
/// Values are recognized explicitly rather than by a bare string-prefix
/// test: an affirmative (`S...`, `YES`, `Y`) parses to `Eligible`, a
/// negative (`N...`) to `NotEligible`, and anything else is kept as
/// `Unrecognized` so the calculator can surface it instead of silently
/// treating it as a refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportFlag {
    /// The level pays the transport allowance.
    Eligible,
    /// The level does not pay the transport allowance.
    NotEligible,
    /// The flag value was not recognized; the raw value is retained.
    Unrecognized(String),
}

impl TransportFlag {
    /// Parses a raw flag value, trimming and ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_recon::table::TransportFlag;
    ///
    /// assert_eq!(TransportFlag::parse("Sí"), TransportFlag::Eligible);
    /// assert_eq!(TransportFlag::parse("no"), TransportFlag::NotEligible);
    /// assert_eq!(
    ///     TransportFlag::parse("tal vez"),
    ///     TransportFlag::Unrecognized("tal vez".to_string())
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase();
        if normalized.starts_with('S') || normalized == "YES" || normalized == "Y" {
            TransportFlag::Eligible
        } else if normalized.starts_with('N') {
            TransportFlag::NotEligible
        } else {
            TransportFlag::Unrecognized(raw.trim().to_string())
        }
    }

    /// Returns true only for an affirmative flag.
    pub fn is_eligible(&self) -> bool {
        matches!(self, TransportFlag::Eligible)
    }
}

/// One validated row of the level table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRow {
    /// The level identifier.
    pub level: String,
    /// The base monthly salary for this level.
    pub base_salary: Decimal,
    /// The transport-allowance flag; `None` when the table has no flag column.
    pub transport_flag: Option<TransportFlag>,
}

/// The validated salary level lookup table.
///
/// # Example
///
/// ```
/// use payroll_recon::table::{Cell, Dataset, LevelTable};
/// use rust_decimal::Decimal;
///
/// let dataset = Dataset::new(
///     vec!["nivel".to_string(), "salario_base".to_string()],
///     vec![vec![
///         Cell::Text("A1".to_string()),
///         Cell::Number(Decimal::from(1_500_000)),
///     ]],
/// );
/// let table = LevelTable::from_dataset(&dataset).unwrap();
/// assert_eq!(
///     table.find("A1").unwrap().base_salary,
///     Decimal::from(1_500_000)
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTable {
    rows: Vec<LevelRow>,
    has_transport_column: bool,
}

impl LevelTable {
    /// Validates a raw dataset into a level table.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingColumns`] when `nivel` or `salario_base` is
    ///   absent, listing every missing name.
    /// - [`EngineError::NonNumericValue`] when a `salario_base` value does
    ///   not parse as a number (currency symbols, grouping separators).
    pub fn from_dataset(dataset: &Dataset) -> EngineResult<Self> {
        let missing = dataset.missing_columns(&[LEVEL_COLUMN, BASE_SALARY_COLUMN]);
        if !missing.is_empty() {
            return Err(EngineError::MissingColumns {
                dataset: DATASET_NAME.to_string(),
                columns: missing,
            });
        }

        let has_transport_column = dataset.column_index(TRANSPORT_FLAG_COLUMN).is_some();
        let mut rows = Vec::with_capacity(dataset.rows().len());

        for (index, _) in dataset.rows().iter().enumerate() {
            let Some(level) = dataset.cell(index, LEVEL_COLUMN).as_text() else {
                // Blank level rows carry nothing to look up.
                continue;
            };

            let salary_cell = dataset.cell(index, BASE_SALARY_COLUMN);
            let base_salary =
                salary_cell
                    .to_decimal()
                    .ok_or_else(|| EngineError::NonNumericValue {
                        dataset: DATASET_NAME.to_string(),
                        column: BASE_SALARY_COLUMN.to_string(),
                        row: index + 1,
                        value: salary_cell.to_string(),
                    })?;

            let transport_flag = if has_transport_column {
                Some(parse_flag_cell(&dataset.cell(index, TRANSPORT_FLAG_COLUMN)))
            } else {
                None
            };

            rows.push(LevelRow {
                level,
                base_salary,
                transport_flag,
            });
        }

        info!(
            levels = rows.len(),
            transport_column = has_transport_column,
            "Level table validated"
        );

        Ok(Self {
            rows,
            has_transport_column,
        })
    }

    /// Returns the first row matching the given level identifier.
    pub fn find(&self, level: &str) -> Option<&LevelRow> {
        self.rows.iter().find(|row| row.level == level)
    }

    /// Returns the first row matching the given level, or a typed error.
    pub fn get(&self, level: &str) -> EngineResult<&LevelRow> {
        self.find(level).ok_or_else(|| EngineError::LevelNotFound {
            level: level.to_string(),
        })
    }

    /// Returns all validated rows in table order.
    pub fn rows(&self) -> &[LevelRow] {
        &self.rows
    }

    /// Returns true when the source table carried the flag column.
    pub fn has_transport_column(&self) -> bool {
        self.has_transport_column
    }

    /// Returns level identifiers that appear more than once, in first-seen
    /// order. Lookups resolve to the first match; duplicates are a
    /// data-quality concern for the reviewer.
    pub fn duplicate_levels(&self) -> Vec<String> {
        duplicates(self.rows.iter().map(|row| row.level.as_str()))
    }
}

fn parse_flag_cell(cell: &Cell) -> TransportFlag {
    match cell {
        Cell::Bool(true) => TransportFlag::Eligible,
        // An empty flag cell is an explicit absence, not an unknown value.
        Cell::Bool(false) | Cell::Empty => TransportFlag::NotEligible,
        other => match other.as_text() {
            Some(text) => TransportFlag::parse(&text),
            None => TransportFlag::NotEligible,
        },
    }
}

pub(super) fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut dupes: Vec<String> = Vec::new();

    for value in values {
        if seen.contains(&value) {
            if !dupes.iter().any(|d| d == value) {
                dupes.push(value.to_string());
            }
        } else {
            seen.push(value);
        }
    }

    dupes
}
