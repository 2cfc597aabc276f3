//! Attendance session: poll the device, fold lines into the accumulator, and
//! commit a ledger row on each status line.

use std::thread;
use std::time::Duration;

use crate::errors::AppResult;
use crate::ledger::{AttendanceLedger, MasterLedger};
use crate::mail::AlertMailer;
use crate::models::accumulator::Accumulator;
use crate::models::attendance::AttendanceRecord;
use crate::protocol::{self, DeviceMessage};
use crate::serial::{LineEvent, LineSource};
use crate::ui::messages as ui;

pub struct AttendParams {
    pub threshold: i32,
    pub poll_interval: Duration,
    pub reset_after_commit: bool,
}

pub struct AttendLogic;

impl AttendLogic {
    /// Run the polling loop until the process is terminated or the source
    /// closes (replay end). One line is read per iteration; idle polls sleep
    /// for the configured interval.
    pub fn run(
        source: &mut dyn LineSource,
        master: &MasterLedger,
        ledger: &AttendanceLedger,
        mailer: Option<&AlertMailer>,
        params: &AttendParams,
    ) -> AppResult<()> {
        let mut acc = Accumulator::new();

        loop {
            match source.next_line()? {
                LineEvent::Closed => {
                    ui::info("Device channel closed, ending attendance session.");
                    return Ok(());
                }
                LineEvent::Idle => thread::sleep(params.poll_interval),
                LineEvent::Line(line) => {
                    ui::device(&line);
                    Self::apply(&line, &mut acc, master, ledger, mailer, params);
                }
            }
        }
    }

    /// Classify one line and update the accumulator, committing on a status
    /// line. All failure modes here are non-fatal: they are logged and the
    /// loop keeps polling.
    fn apply(
        line: &str,
        acc: &mut Accumulator,
        master: &MasterLedger,
        ledger: &AttendanceLedger,
        mailer: Option<&AlertMailer>,
        params: &AttendParams,
    ) {
        match protocol::classify(line) {
            DeviceMessage::IdentityFound(token) => {
                let name = master.resolve_name(token).to_string();
                ui::info(format!("Fingerprint ID {token} resolved to {name}"));
                acc.token = Some(token);
                acc.name = Some(name);
            }
            DeviceMessage::Reading { token, level } => {
                ui::info(format!("Reading: ID {token}, ALC {level}"));
                acc.token = Some(token);
                acc.level = Some(level);
            }
            DeviceMessage::StatusPresent | DeviceMessage::StatusAbsent => {
                Self::commit(acc, ledger, mailer, params);
            }
            _ => {}
        }
    }

    fn commit(
        acc: &mut Accumulator,
        ledger: &AttendanceLedger,
        mailer: Option<&AlertMailer>,
        params: &AttendParams,
    ) {
        let Some((token, name, level)) = acc.take_complete() else {
            ui::error("Missing data for logging attendance, record dropped.");
            return;
        };

        let record = AttendanceRecord::now(token, name, level, params.threshold);

        if let Err(e) = ledger.append(&record) {
            ui::error(format!("Failed to save attendance ledger: {e}"));
            return;
        }
        ui::success(format!(
            "Attendance logged for ID {} ({}) with level {}",
            record.token, record.name, record.level
        ));

        // The row is on disk; the alert is best-effort from here on.
        if record.level >= params.threshold
            && let Some(mailer) = mailer
        {
            match mailer.send_alert(&record) {
                Ok(()) => ui::success("Alert mail sent to supervisors."),
                Err(e) => ui::error(format!("Failed to send alert mail: {e}")),
            }
        }

        if params.reset_after_commit {
            acc.reset();
        }
    }
}
