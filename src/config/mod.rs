//! YAML configuration: serial settings, ledger paths, session policies, and
//! the mail section for threshold alerts.
//!
//! SMTP credentials are never stored here; the config names the environment
//! variable that holds the password.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::models::attendance::DEFAULT_ALERT_THRESHOLD;
use crate::serial::DEFAULT_BAUD_RATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub sender: String,
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    /// Name of the environment variable holding the SMTP password.
    #[serde(default = "default_password_env")]
    pub password_env: String,
    #[serde(default)]
    pub recipients: Vec<String>,
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".to_string()
}
fn default_smtp_port() -> u16 {
    587
}
fn default_sender_name() -> String {
    "Transport Team".to_string()
}
fn default_password_env() -> String {
    "FPKIOSK_SMTP_PASSWORD".to_string()
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_server: default_smtp_server(),
            smtp_port: default_smtp_port(),
            sender: String::new(),
            sender_name: default_sender_name(),
            password_env: default_password_env(),
            recipients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Serial port path; empty means auto-discover.
    #[serde(default)]
    pub port: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    pub master_ledger: String,
    pub attendance_ledger: String,
    #[serde(default = "default_threshold")]
    pub alert_threshold: i32,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_enroll_timeout")]
    pub enroll_timeout_secs: u64,
    /// Start each attendance cycle from a clean slate after a commit.
    #[serde(default = "default_reset_after_commit")]
    pub reset_after_commit: bool,
    #[serde(default)]
    pub mail: MailConfig,
}

fn default_baud_rate() -> u32 {
    DEFAULT_BAUD_RATE
}
fn default_threshold() -> i32 {
    DEFAULT_ALERT_THRESHOLD
}
fn default_poll_interval() -> u64 {
    1000
}
fn default_enroll_timeout() -> u64 {
    60
}
fn default_reset_after_commit() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: String::new(),
            baud_rate: default_baud_rate(),
            master_ledger: Self::master_ledger_file().to_string_lossy().to_string(),
            attendance_ledger: Self::attendance_ledger_file()
                .to_string_lossy()
                .to_string(),
            alert_threshold: default_threshold(),
            poll_interval_ms: default_poll_interval(),
            enroll_timeout_secs: default_enroll_timeout(),
            reset_after_commit: default_reset_after_commit(),
            mail: MailConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fpkiosk")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fpkiosk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fpkiosk.conf")
    }

    pub fn master_ledger_file() -> PathBuf {
        Self::config_dir().join("master.csv")
    }

    pub fn attendance_ledger_file() -> PathBuf {
        Self::config_dir().join("attendance.csv")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize configuration and both ledger files.
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_contract() {
        let cfg = Config::default();
        assert_eq!(cfg.baud_rate, 9600);
        assert_eq!(cfg.alert_threshold, 3500);
        assert_eq!(cfg.poll_interval_ms, 1000);
        assert!(cfg.reset_after_commit);
        assert!(!cfg.mail.enabled);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str(
            "master_ledger: /tmp/m.csv\nattendance_ledger: /tmp/a.csv\n",
        )
        .unwrap();
        assert_eq!(cfg.master_ledger, "/tmp/m.csv");
        assert_eq!(cfg.enroll_timeout_secs, 60);
        assert_eq!(cfg.mail.smtp_port, 587);
    }

    #[test]
    fn mail_section_round_trips() {
        let cfg = Config {
            mail: MailConfig {
                enabled: true,
                sender: "kiosk@example.com".into(),
                recipients: vec!["supervisor@example.com".into()],
                ..MailConfig::default()
            },
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert!(back.mail.enabled);
        assert_eq!(back.mail.recipients, vec!["supervisor@example.com"]);
        // The password itself never appears in the config.
        assert!(!yaml.contains("password:"));
    }
}
