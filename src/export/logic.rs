use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::ledger::AttendanceLedger;
use crate::models::attendance::AttendanceRecord;
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, period_bounds};

use std::path::Path;

/// High-level export dispatch.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the attendance ledger to `file`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `period`: `None` for everything, or `YYYY` / `YYYY-MM` / `YYYY-MM-DD`
    pub fn export(
        ledger: &AttendanceLedger,
        format: &ExportFormat,
        file: &str,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let records = Self::filtered_records(ledger, period)?;

        if records.is_empty() {
            warning("No attendance rows found for the selected period.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Xlsx => export_xlsx(&records, path)?,
        }

        Ok(())
    }

    /// Load ledger rows, keeping those whose date falls inside the period.
    pub fn filtered_records(
        ledger: &AttendanceLedger,
        period: &Option<String>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let records = ledger.load_records()?;

        let Some(period) = period else {
            return Ok(records);
        };
        let (start, end) = period_bounds(period)?;

        Ok(records
            .into_iter()
            .filter(|r| {
                parse_date(&r.date)
                    .map(|d| d >= start && d <= end)
                    .unwrap_or(false)
            })
            .collect())
    }
}
