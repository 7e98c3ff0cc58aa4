//! Consolidated workbook export.
//!
//! Generates an XLSX workbook with two sheets:
//! - `Datos`: every consolidated record in the fixed column order;
//! - `Alertas`: the subset whose earnings difference exceeds the review
//!   threshold, for the reviewer to work through first.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::calculation::difference_threshold;
use crate::error::{EngineError, EngineResult};
use crate::models::ReconciliationRecord;

use super::{DATA_HEADERS, TEXT_COLUMNS};

/// Name of the sheet holding every consolidated record.
pub const DATA_SHEET: &str = "Datos";

/// Name of the sheet holding only the threshold breaches.
pub const ALERTS_SHEET: &str = "Alertas";

const ALERT_HEADERS: [&str; 6] = [
    "cedula",
    "nombre",
    "nivel",
    "total_devengado_calc",
    "total_dev_reportado",
    "diferencia_dev",
];

/// Renders the consolidated list into workbook bytes.
///
/// # Example
///
/// ```no_run
/// use payroll_recon::export::ExcelExporter;
///
/// let exporter = ExcelExporter::new();
/// let bytes = exporter.export_to_bytes(&[])?;
/// assert!(bytes.is_empty()); // empty list -> export disabled
/// # Ok::<(), payroll_recon::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExcelExporter;

struct ExcelFormats {
    header: Format,
    money: Format,
    text: Format,
    alert: Format,
}

impl ExcelExporter {
    /// Creates an exporter with the standard formats.
    pub fn new() -> Self {
        Self
    }

    /// Serializes the records into a two-sheet workbook.
    ///
    /// An empty record list yields empty bytes; downstream callers disable
    /// the download in that case.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Export`] when the workbook cannot be built.
    pub fn export_to_bytes(&self, records: &[ReconciliationRecord]) -> EngineResult<Vec<u8>> {
        if records.is_empty() {
            info!("Export skipped: consolidated list is empty");
            return Ok(Vec::new());
        }

        let formats = self.create_formats();
        let mut workbook = Workbook::new();

        self.write_data_sheet(&mut workbook, records, &formats)
            .map_err(export_error)?;
        self.write_alerts_sheet(&mut workbook, records, &formats)
            .map_err(export_error)?;

        let bytes = workbook.save_to_buffer().map_err(export_error)?;
        info!(records = records.len(), bytes = bytes.len(), "Consolidated workbook exported");
        Ok(bytes)
    }

    fn create_formats(&self) -> ExcelFormats {
        let header = Format::new()
            .set_bold()
            .set_background_color(0xF2F2F2)
            .set_border(FormatBorder::Thin);

        let money = Format::new()
            .set_num_format("#,##0")
            .set_border(FormatBorder::Thin);

        let text = Format::new().set_border(FormatBorder::Thin);

        let alert = Format::new()
            .set_background_color(0xFFF2CC)
            .set_border(FormatBorder::Thin);

        ExcelFormats {
            header,
            money,
            text,
            alert,
        }
    }

    fn write_data_sheet(
        &self,
        workbook: &mut Workbook,
        records: &[ReconciliationRecord],
        formats: &ExcelFormats,
    ) -> Result<(), XlsxError> {
        let sheet = workbook.add_worksheet();
        sheet.set_name(DATA_SHEET)?;

        write_headers(sheet, &DATA_HEADERS, &formats.header)?;

        for (col, name) in DATA_HEADERS.iter().enumerate() {
            let width = if *name == "cedula" || *name == "nombre" {
                18.0
            } else {
                16.0
            };
            sheet.set_column_width(col as u16, width)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = (index + 1) as u32;

            sheet.write_with_format(row, 0, record.id.as_str(), &formats.text)?;
            sheet.write_with_format(row, 1, record.name.as_str(), &formats.text)?;
            sheet.write_with_format(row, 2, record.level.as_str(), &formats.text)?;
            sheet.write_with_format(row, 3, record.days_worked as f64, &formats.money)?;

            for (offset, amount) in money_values(record).iter().enumerate() {
                let col = (TEXT_COLUMNS + 1 + offset) as u16;
                sheet.write_with_format(row, col, to_f64(*amount), &formats.money)?;
            }
        }

        Ok(())
    }

    fn write_alerts_sheet(
        &self,
        workbook: &mut Workbook,
        records: &[ReconciliationRecord],
        formats: &ExcelFormats,
    ) -> Result<(), XlsxError> {
        let sheet = workbook.add_worksheet();
        sheet.set_name(ALERTS_SHEET)?;

        write_headers(sheet, &ALERT_HEADERS, &formats.header)?;

        for col in 0..ALERT_HEADERS.len() {
            sheet.set_column_width(col as u16, 20.0)?;
        }

        let threshold = difference_threshold();
        let mut row = 1u32;

        for record in records {
            if record.difference.abs() <= threshold {
                continue;
            }

            sheet.write_with_format(row, 0, record.id.as_str(), &formats.alert)?;
            sheet.write_with_format(row, 1, record.name.as_str(), &formats.alert)?;
            sheet.write_with_format(row, 2, record.level.as_str(), &formats.alert)?;
            sheet.write_with_format(row, 3, to_f64(record.total_calculated), &formats.alert)?;
            sheet.write_with_format(row, 4, to_f64(record.reported_total), &formats.alert)?;
            sheet.write_with_format(row, 5, to_f64(record.difference), &formats.alert)?;
            row += 1;
        }

        Ok(())
    }
}

/// The thirteen currency columns of a data row, in export order.
pub(super) fn money_values(record: &ReconciliationRecord) -> [Decimal; 13] {
    let b = &record.breakdown;
    [
        b.prorated_salary,
        b.ordinary_day_pay,
        b.overtime_day_pay,
        b.night_surcharge_pay,
        b.holiday_surcharge_pay,
        b.transport_allowance,
        b.food_allowance,
        b.retroactive_bonuses,
        b.other_earnings,
        record.total_calculated,
        record.reported_total,
        record.difference,
        record.reported_net,
    ]
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_with_format(0, col as u16, *header, format)?;
    }
    Ok(())
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn export_error(e: XlsxError) -> EngineError {
    EngineError::Export {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EarningsBreakdown;
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(id: &str, difference: &str) -> ReconciliationRecord {
        ReconciliationRecord {
            record_id: Uuid::new_v4(),
            created_at: Utc::now(),
            id: id.to_string(),
            name: "Ana Torres".to_string(),
            level: "A1".to_string(),
            days_worked: 30,
            breakdown: EarningsBreakdown {
                prorated_salary: dec("1200000.00"),
                transport_allowance: dec("200000.00"),
                ..EarningsBreakdown::default()
            },
            total_calculated: dec("1400000.00"),
            reported_total: dec("1400000.00") + dec(difference),
            reported_net: dec("1250000.00"),
            difference: dec(difference),
            alerts: vec![],
        }
    }

    #[test]
    fn test_empty_list_exports_empty_bytes() {
        let bytes = ExcelExporter::new().export_to_bytes(&[]).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_non_empty_list_exports_workbook_bytes() {
        let records = vec![record("1", "0.00"), record("2", "5000.00")];
        let bytes = ExcelExporter::new().export_to_bytes(&records).unwrap();

        // XLSX containers are ZIP archives.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_money_values_follow_header_order() {
        let record = record("1", "0.00");
        let values = money_values(&record);

        assert_eq!(values.len() + TEXT_COLUMNS + 1, DATA_HEADERS.len());
        assert_eq!(values[0], dec("1200000.00")); // salario_proporcional
        assert_eq!(values[5], dec("200000.00")); // aux_transporte
        assert_eq!(values[9], dec("1400000.00")); // total_devengado_calc
        assert_eq!(values[12], dec("1250000.00")); // neto_reportado
    }
}
