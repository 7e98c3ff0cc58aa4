//! Delimited-text export of a single record.
//!
//! Used for the current in-progress entry, before it is consolidated: a
//! header row plus one data row in the same column order as the workbook
//! export.

use crate::error::{EngineError, EngineResult};
use crate::models::ReconciliationRecord;

use super::DATA_HEADERS;
use super::excel::money_values;

/// Renders one record as delimited text (header row + one data row).
///
/// # Example
///
/// ```
/// use payroll_recon::export::record_to_delimited;
/// # use payroll_recon::models::{EarningsBreakdown, ReconciliationRecord};
/// # use chrono::Utc;
/// # use rust_decimal::Decimal;
/// # use uuid::Uuid;
/// # let record = ReconciliationRecord {
/// #     record_id: Uuid::new_v4(),
/// #     created_at: Utc::now(),
/// #     id: "1032456789".to_string(),
/// #     name: "Ana Torres".to_string(),
/// #     level: "A1".to_string(),
/// #     days_worked: 30,
/// #     breakdown: EarningsBreakdown::default(),
/// #     total_calculated: Decimal::ZERO,
/// #     reported_total: Decimal::ZERO,
/// #     reported_net: Decimal::ZERO,
/// #     difference: Decimal::ZERO,
/// #     alerts: vec![],
/// # };
///
/// let text = record_to_delimited(&record)?;
/// assert!(text.starts_with("cedula,nombre,nivel,dias"));
/// # Ok::<(), payroll_recon::error::EngineError>(())
/// ```
pub fn record_to_delimited(record: &ReconciliationRecord) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(DATA_HEADERS).map_err(csv_error)?;

    let mut fields: Vec<String> = vec![
        record.id.clone(),
        record.name.clone(),
        record.level.clone(),
        record.days_worked.to_string(),
    ];
    fields.extend(money_values(record).iter().map(|v| v.to_string()));
    writer.write_record(&fields).map_err(csv_error)?;

    let bytes = writer.into_inner().map_err(|e| EngineError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::Export {
        message: e.to_string(),
    })
}

fn csv_error(e: csv::Error) -> EngineError {
    EngineError::Export {
        message: e.to_string(),
    }
}
