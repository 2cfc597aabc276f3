//! Attendance ledger: append-only rows under a fixed, idempotently-enforced
//! header.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus, TestStatus};

/// The fixed 7-column header, enforced on every attendance startup.
pub const ATTENDANCE_HEADERS: [&str; 7] = [
    "Date",
    "Time",
    "ID",
    "Name",
    "ALC Level",
    "Attendance Status",
    "Test Status",
];

#[derive(Debug)]
pub struct AttendanceLedger {
    path: PathBuf,
}

impl AttendanceLedger {
    /// The file must already exist; a missing attendance ledger is fatal at
    /// startup.
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::LedgerMissing(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Create the file with its header if missing, then open it.
    pub fn open_or_create(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let mut writer = WriterBuilder::new().from_path(path)?;
            writer.write_record(ATTENDANCE_HEADERS)?;
            writer.flush()?;
        }
        Self::open(path)
    }

    /// Enforce the header row. Any mismatched cell is corrected and the data
    /// rows are kept; an already-correct header produces no write. Returns
    /// whether the file was written.
    pub fn ensure_header(&self) -> AppResult<bool> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows: Vec<StringRecord> = Vec::new();
        for record in reader.records() {
            rows.push(record?);
        }

        let header_ok = rows
            .first()
            .map(|r| r.iter().eq(ATTENDANCE_HEADERS))
            .unwrap_or(false);
        if header_ok {
            return Ok(false);
        }

        let expected: StringRecord = ATTENDANCE_HEADERS.iter().collect();
        if rows.is_empty() {
            rows.push(expected);
        } else {
            rows[0] = expected;
        }

        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(true)
    }

    /// Append one committed record. Rows are never rewritten or deleted.
    pub fn append(&self, record: &AttendanceRecord) -> AppResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(record.to_row())?;
        writer.flush()?;
        Ok(())
    }

    /// Read all data rows back, skipping any that no longer parse.
    pub fn load_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if let Some(rec) = parse_record(&row) {
                records.push(rec);
            }
        }
        Ok(records)
    }
}

fn parse_record(row: &StringRecord) -> Option<AttendanceRecord> {
    Some(AttendanceRecord {
        date: row.get(0)?.to_string(),
        time: row.get(1)?.to_string(),
        token: row.get(2)?.trim().parse().ok()?,
        name: row.get(3)?.to_string(),
        level: row.get(4)?.trim().parse().ok()?,
        attendance: AttendanceStatus::from_label(row.get(5)?)?,
        test: TestStatus::from_label(row.get(6)?)?,
    })
}
