//! Workbook reading functionality.
//!
//! Thin wrapper over `calamine` that turns the first worksheet of an
//! uploaded workbook into a raw [`Dataset`]. The first row is taken as the
//! header row; everything below it becomes data rows.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook_auto};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::dataset::{Cell, Dataset};

/// Reads the first worksheet of the workbook at `path` into a dataset.
///
/// # Errors
///
/// Returns [`EngineError::WorkbookRead`] when the file cannot be opened,
/// has no sheets, or its first sheet cannot be read.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> EngineResult<Dataset> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let mut workbook = open_workbook_auto(path).map_err(|e| EngineError::WorkbookRead {
        source_name: source_name.clone(),
        message: e.to_string(),
    })?;

    let sheet_name = first_sheet_name(workbook.sheet_names(), &source_name)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| EngineError::WorkbookRead {
            source_name: source_name.clone(),
            message: e.to_string(),
        })?;

    let dataset = dataset_from_range(&range);
    info!(
        source = %source_name,
        sheet = %sheet_name,
        rows = dataset.rows().len(),
        "Workbook read into dataset"
    );
    Ok(dataset)
}

/// Reads the first worksheet of an in-memory `.xlsx` workbook.
///
/// `source_name` is only used for error reporting and logging (e.g., the
/// uploaded file name).
pub fn read_dataset_from_bytes(bytes: &[u8], source_name: &str) -> EngineResult<Dataset> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| EngineError::WorkbookRead {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    let sheet_name = first_sheet_name(workbook.sheet_names(), source_name)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| EngineError::WorkbookRead {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    let dataset = dataset_from_range(&range);
    info!(
        source = %source_name,
        sheet = %sheet_name,
        rows = dataset.rows().len(),
        "Workbook read into dataset"
    );
    Ok(dataset)
}

fn first_sheet_name(names: Vec<String>, source_name: &str) -> EngineResult<String> {
    names
        .first()
        .cloned()
        .ok_or_else(|| EngineError::WorkbookRead {
            source_name: source_name.to_string(),
            message: "workbook has no sheets".to_string(),
        })
}

fn dataset_from_range(range: &Range<Data>) -> Dataset {
    let mut rows_iter = range.rows();

    let Some(header_row) = rows_iter.next() else {
        return Dataset::new(vec![], vec![]);
    };

    let columns: Vec<String> = header_row.iter().map(|c| c.to_string()).collect();
    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Dataset::new(columns, rows)
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Decimal::from_f64_retain(*f)
            .map(|d| Cell::Number(d.normalize()))
            .unwrap_or(Cell::Empty),
        Data::Int(i) => Cell::Number(Decimal::from(*i)),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Decimal::from_f64_retain(dt.as_f64())
            .map(|d| Cell::Number(d.normalize()))
            .unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{:?}", e)),
    }
}
