use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ledger::AttendanceLedger;
use crate::models::attendance::AttendanceStatus;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print attendance ledger rows, optionally filtered by period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let ledger = AttendanceLedger::open(&expand_tilde(&cfg.attendance_ledger))?;
        let records = ExportLogic::filtered_records(&ledger, period)?;

        if records.is_empty() {
            warning("No attendance rows found for the selected period.");
            return Ok(());
        }

        match period {
            Some(p) => println!("📅 Attendance rows for {p}:\n"),
            None => println!("📅 Attendance rows:\n"),
        }

        let name_w = records
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(4)
            .max("Name".len());

        println!(
            "{:<10}  {:<8}  {:>5}  {:<name_w$}  {:>9}  {:<8}  {:<4}",
            "Date", "Time", "ID", "Name", "ALC Level", "Status", "Test",
        );

        for r in &records {
            let color = if r.attendance == AttendanceStatus::Present {
                FG_GREEN
            } else {
                FG_RED
            };
            println!(
                "{:<10}  {:<8}  {:>5}  {:<name_w$}  {:>9}  {color}{:<8}{RESET}  {:<4}",
                r.date,
                r.time,
                r.token,
                r.name,
                r.level,
                r.attendance.as_str(),
                r.test.as_str(),
            );
        }

        println!("\n{} row(s).", records.len());
    }

    Ok(())
}
