use std::io::{self, Write};
use std::time::Duration;

use crate::cli::commands::open_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::enroll::{EnrollLogic, EnrollOutcome};
use crate::errors::{AppError, AppResult};
use crate::ledger::MasterLedger;
use crate::models::enrollment::EnrollmentRecord;
use crate::ui::messages as ui;
use crate::utils::path::expand_tilde;

/// Drive one enrollment exchange and, on success, record the person in the
/// master ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Enroll { token, replay } = cmd {
        let token = match token {
            Some(t) => *t,
            None => prompt("Enter the ID for the fingerprint")?
                .parse::<u32>()
                .map_err(|e| AppError::InvalidToken(e.to_string()))?,
        };

        let mut source = open_source(cfg, replay.as_deref())?;
        let timeout = Duration::from_secs(cfg.enroll_timeout_secs);

        match EnrollLogic::run(source.as_mut(), token, timeout)? {
            EnrollOutcome::Enrolled => {
                ui::success("Enrollment successful!");
                let record = collect_details(token)?;

                let path = expand_tilde(&cfg.master_ledger);
                let mut ledger = MasterLedger::open_or_create(&path)?;
                ledger.append(&record)?;
                ui::success(format!("Data saved to {}", path.display()));
            }
            EnrollOutcome::Rejected => {
                ui::warning("Fingerprint enrollment was not successful. Try again.");
            }
            EnrollOutcome::TimedOut => {
                ui::error(format!(
                    "Enrollment timed out after {}s without a device response.",
                    cfg.enroll_timeout_secs
                ));
            }
        }
    }

    Ok(())
}

/// Sequential operator prompts for the descriptive attributes; no format
/// validation is performed.
fn collect_details(token: u32) -> AppResult<EnrollmentRecord> {
    Ok(EnrollmentRecord {
        token,
        name: prompt("Enter Name")?,
        date_of_birth: prompt("Enter Date of Birth")?,
        father_name: prompt("Enter Father's Name")?,
        license_number: prompt("Enter DL Number")?,
        license_expiry: prompt("Enter DL Expiry Date")?,
        national_id: prompt("Enter National ID Number")?,
    })
}

fn prompt(label: &str) -> AppResult<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
