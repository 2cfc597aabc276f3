use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ledger::AttendanceLedger;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let ledger = AttendanceLedger::open(&expand_tilde(&cfg.attendance_ledger))?;
        ExportLogic::export(&ledger, format, file, period, *force)?;
    }
    Ok(())
}
