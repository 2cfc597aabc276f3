use std::time::Duration;

use crate::cli::commands::open_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attend::{AttendLogic, AttendParams};
use crate::errors::AppResult;
use crate::ledger::{AttendanceLedger, MasterLedger};
use crate::mail::AlertMailer;
use crate::ui::messages as ui;
use crate::utils::path::expand_tilde;

/// Run the attendance session. Both ledgers must exist; the header of the
/// attendance ledger is enforced before the first poll.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attend { replay } = cmd {
        let master = MasterLedger::load(&expand_tilde(&cfg.master_ledger))?;
        let ledger = AttendanceLedger::open(&expand_tilde(&cfg.attendance_ledger))?;

        if ledger.ensure_header()? {
            ui::info("Attendance ledger header written.");
        }

        let mailer = AlertMailer::from_config(&cfg.mail);
        if mailer.is_none() {
            ui::warning("Mail alerting is disabled; threshold alerts will only be logged.");
        }

        let params = AttendParams {
            threshold: cfg.alert_threshold,
            poll_interval: Duration::from_millis(cfg.poll_interval_ms),
            reset_after_commit: cfg.reset_after_commit,
        };

        let mut source = open_source(cfg, replay.as_deref())?;
        ui::info("Attendance session started. Waiting for device events…");

        AttendLogic::run(source.as_mut(), &master, &ledger, mailer.as_ref(), &params)?;
    }

    Ok(())
}
