use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::{AttendanceLedger, MasterLedger};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - both ledger files with their headers
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.test)?;

    println!("⚙️  Initializing fpkiosk…");

    let master_path = expand_tilde(&cfg.master_ledger);
    let attendance_path = expand_tilde(&cfg.attendance_ledger);

    MasterLedger::open_or_create(&master_path)?;
    println!("🗂️  Master ledger    : {}", master_path.display());

    let ledger = AttendanceLedger::open_or_create(&attendance_path)?;
    ledger.ensure_header()?;
    println!("🗂️  Attendance ledger: {}", attendance_path.display());

    println!("🎉 fpkiosk initialization completed!");
    Ok(())
}
