//! Master ledger: one row per enrolled fingerprint.
//!
//! During attendance sessions the ledger is a read-only lookup table from
//! identity token to display name. Enrollment appends rows and bootstraps the
//! header when the file does not exist yet.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::errors::{AppError, AppResult};
use crate::ledger::UNKNOWN_USER;
use crate::models::enrollment::EnrollmentRecord;

/// Column order of the master ledger. Columns beyond Name are descriptive
/// attributes; the attendance lookup only consults the first two.
pub const MASTER_HEADERS: [&str; 7] = [
    "ID",
    "Name",
    "DOB",
    "Father's Name",
    "DL Number",
    "DL Expiry",
    "National ID",
];

#[derive(Debug)]
pub struct MasterLedger {
    path: PathBuf,
    /// (token cell, name cell) per data row, in file order.
    rows: Vec<(String, String)>,
}

impl MasterLedger {
    /// Load the ledger for lookups. The file must exist; a missing master
    /// ledger is fatal for attendance sessions.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::LedgerMissing(path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let token = record.get(0).unwrap_or("").trim().to_string();
            let name = record.get(1).unwrap_or("").trim().to_string();
            rows.push((token, name));
        }

        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// Open for appending, creating the file with its header if missing.
    pub fn open_or_create(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let mut writer = WriterBuilder::new().from_path(path)?;
            writer.write_record(MASTER_HEADERS)?;
            writer.flush()?;
        }
        Self::load(path)
    }

    /// First data row whose token cell matches wins; comparison is on the
    /// string-normalized token.
    pub fn lookup(&self, token: u32) -> Option<&str> {
        let wanted = token.to_string();
        self.rows
            .iter()
            .find(|(t, _)| *t == wanted)
            .map(|(_, name)| name.as_str())
    }

    /// Total lookup: unknown tokens resolve to the sentinel name.
    pub fn resolve_name(&self, token: u32) -> &str {
        self.lookup(token).unwrap_or(UNKNOWN_USER)
    }

    /// Append one enrollment row. Never rewrites existing rows.
    pub fn append(&mut self, record: &EnrollmentRecord) -> AppResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(record.to_row())?;
        writer.flush()?;

        self.rows
            .push((record.token.to_string(), record.name.clone()));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
