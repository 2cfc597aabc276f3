//! Enrollment handshake: drive the firmware through one ENROLL exchange.

use std::time::{Duration, Instant};

use crate::errors::{AppError, AppResult};
use crate::protocol::{self, DeviceMessage, ENROLL_COMMAND};
use crate::serial::{LineEvent, LineSource};
use crate::ui::messages as ui;

/// Result of one enrollment exchange. A deadline expiry is a distinct outcome,
/// not an error: the operator simply retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    Rejected,
    TimedOut,
}

pub struct EnrollLogic;

impl EnrollLogic {
    /// Run the handshake: send `ENROLL`, wait until the firmware is ready for
    /// an ID, send the token, then wait for the terminal success/failure line.
    /// Every other line is echoed for diagnostics and discarded.
    pub fn run(
        source: &mut dyn LineSource,
        token: u32,
        timeout: Duration,
    ) -> AppResult<EnrollOutcome> {
        source.send_line(ENROLL_COMMAND)?;

        let deadline = Instant::now() + timeout;
        match Self::wait_for(source, deadline, |msg| {
            matches!(msg, DeviceMessage::ReadyToEnroll)
        })? {
            WaitResult::Matched(_) => {}
            WaitResult::Expired => return Ok(EnrollOutcome::TimedOut),
        }

        source.send_line(&token.to_string())?;

        match Self::wait_for(source, deadline, |msg| {
            matches!(msg, DeviceMessage::EnrollSuccess | DeviceMessage::EnrollFailed)
        })? {
            WaitResult::Matched(DeviceMessage::EnrollSuccess) => Ok(EnrollOutcome::Enrolled),
            WaitResult::Matched(_) => Ok(EnrollOutcome::Rejected),
            WaitResult::Expired => Ok(EnrollOutcome::TimedOut),
        }
    }

    /// Poll until a line classifies to an accepted message or the deadline
    /// passes. A closed channel mid-handshake is an error.
    fn wait_for(
        source: &mut dyn LineSource,
        deadline: Instant,
        accept: impl Fn(&DeviceMessage) -> bool,
    ) -> AppResult<WaitResult> {
        loop {
            if Instant::now() > deadline {
                return Ok(WaitResult::Expired);
            }
            match source.next_line()? {
                LineEvent::Closed => return Err(AppError::ChannelClosed),
                LineEvent::Idle => {}
                LineEvent::Line(line) => {
                    ui::device(&line);
                    let msg = protocol::classify(&line);
                    if accept(&msg) {
                        return Ok(WaitResult::Matched(msg));
                    }
                }
            }
        }
    }
}

enum WaitResult {
    Matched(DeviceMessage),
    Expired,
}
