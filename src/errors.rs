//! Unified application error type.
//! All modules (serial, ledger, core, cli, mail) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serial device
    // ---------------------------
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("No suitable serial device found")]
    DeviceNotFound,

    #[error("Device channel closed before the session finished")]
    ChannelClosed,

    // ---------------------------
    // Ledger files
    // ---------------------------
    #[error("Ledger error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required ledger file not found: {0}")]
    LedgerMissing(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid identity token: {0}")]
    InvalidToken(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Mail errors
    // ---------------------------
    #[error("Mail error: {0}")]
    Mail(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
