//! CSV-backed ledgers: the master enrollment ledger and the attendance ledger.

pub mod attendance;
pub mod master;

pub use attendance::AttendanceLedger;
pub use master::MasterLedger;

/// Display name used when a token has no master-ledger row.
pub const UNKNOWN_USER: &str = "Unknown User";
