pub mod attend;
pub mod config;
pub mod enroll;
pub mod export;
pub mod init;
pub mod list;
pub mod ports;

use std::path::Path;

use crate::config::Config;
use crate::errors::AppResult;
use crate::serial::{self, DeviceSession, LineSource, ReplaySource};
use crate::ui::messages as ui;

/// Open the device channel for a session: a capture file when `--replay` is
/// given, the configured or auto-discovered serial port otherwise.
pub(crate) fn open_source(cfg: &Config, replay: Option<&str>) -> AppResult<Box<dyn LineSource>> {
    if let Some(file) = replay {
        ui::info(format!("Replaying device lines from {file}"));
        return Ok(Box::new(ReplaySource::open(Path::new(file))?));
    }

    let port = if cfg.port.is_empty() {
        serial::discover()?
    } else {
        cfg.port.clone()
    };
    ui::info(format!("Found device on port {port}"));
    Ok(Box::new(DeviceSession::open(&port, cfg.baud_rate)?))
}
