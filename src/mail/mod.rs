//! Threshold alert mail. The ledger write always happens first; sending is
//! best-effort and never rolls anything back.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailConfig;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceRecord;

pub struct AlertMailer {
    cfg: MailConfig,
}

impl AlertMailer {
    /// Build a mailer from the config section. Returns None when alerting is
    /// disabled or there is nobody to notify.
    pub fn from_config(cfg: &MailConfig) -> Option<Self> {
        if !cfg.enabled || cfg.recipients.is_empty() || cfg.sender.is_empty() {
            return None;
        }
        Some(Self { cfg: cfg.clone() })
    }

    pub fn format_subject(record: &AttendanceRecord) -> String {
        format!("Alcohol test NG alert for {}", record.name)
    }

    pub fn format_body(record: &AttendanceRecord) -> String {
        format!(
            "Alert: {name} (ID: {token}) has an alcohol level of {level} at {date} {time}.\n\n\
             Immediate attention required.",
            name = record.name,
            token = record.token,
            level = record.level,
            date = record.date,
            time = record.time,
        )
    }

    /// Send one alert for a committed record. The SMTP password is read from
    /// the environment variable named in the config.
    pub fn send_alert(&self, record: &AttendanceRecord) -> AppResult<()> {
        let password = std::env::var(&self.cfg.password_env).map_err(|_| {
            AppError::Mail(format!(
                "SMTP password not set (expected in ${})",
                self.cfg.password_env
            ))
        })?;

        let from: Mailbox = format!("{} <{}>", self.cfg.sender_name, self.cfg.sender)
            .parse()
            .map_err(|e| AppError::Mail(format!("invalid sender address: {e}")))?;

        let mut builder = Message::builder()
            .from(from)
            .subject(Self::format_subject(record))
            .header(ContentType::TEXT_PLAIN);

        for recipient in &self.cfg.recipients {
            let to: Mailbox = recipient
                .parse()
                .map_err(|e| AppError::Mail(format!("invalid recipient '{recipient}': {e}")))?;
            builder = builder.to(to);
        }

        let message = builder
            .body(Self::format_body(record))
            .map_err(|e| AppError::Mail(e.to_string()))?;

        let transport = SmtpTransport::starttls_relay(&self.cfg.smtp_server)
            .map_err(|e| AppError::Mail(e.to_string()))?
            .port(self.cfg.smtp_port)
            .credentials(Credentials::new(self.cfg.sender.clone(), password))
            .build();

        transport
            .send(&message)
            .map_err(|e| AppError::Mail(e.to_string()))?;
        Ok(())
    }
}
