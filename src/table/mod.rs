//! Tabular dataset layer.
//!
//! This module holds the raw in-memory representation of an uploaded
//! spreadsheet, the reader that produces it from workbook files, and the two
//! validated views the engine works with: the salary [`LevelTable`] and the
//! optional [`MonthlyReport`] used for comparison.

mod dataset;
mod level_table;
mod monthly_report;
mod reader;

pub use dataset::{Cell, Dataset};
pub use level_table::{
    BASE_SALARY_COLUMN, LEVEL_COLUMN, LevelRow, LevelTable, TRANSPORT_FLAG_COLUMN, TransportFlag,
};
pub use monthly_report::{
    ID_COLUMN, MonthlyReport, NAME_COLUMN, NET_COLUMN, REPORTED_TOTAL_COLUMN, ReportedRow,
};
pub use reader::{read_dataset, read_dataset_from_bytes};
