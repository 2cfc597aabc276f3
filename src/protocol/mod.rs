//! Line classification for the fingerprint-reader firmware.
//!
//! The firmware speaks a small fixed vocabulary of newline-terminated text
//! lines. Matching is case-sensitive and fail-open: anything the classifier
//! does not recognize — including recognized shapes whose numeric payload does
//! not parse — degrades to [`DeviceMessage::Unrecognized`] and is echoed to the
//! console, never treated as an error.

use regex::Regex;
use std::sync::OnceLock;

/// Enrollment handshake markers.
pub const READY_MARKER: &str = "Ready to enroll a fingerprint!";
pub const ENROLL_SUCCESS: &str = "ENROLL_SUCCESS";
pub const ENROLL_FAILED: &str = "ENROLL_FAILED";

/// Command sent by the host to start an enrollment.
pub const ENROLL_COMMAND: &str = "ENROLL";

const IDENTITY_MARKER: &str = "Fingerprint ID found:";
const STATUS_PRESENT: &str = "Status: Present, OK";
const STATUS_ABSENT: &str = "Status: Absent";

/// One parsed device line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceMessage {
    ReadyToEnroll,
    EnrollSuccess,
    EnrollFailed,
    /// A fingerprint matched an enrolled template.
    IdentityFound(u32),
    /// Identity plus sensor reading reported together.
    Reading { token: u32, level: i32 },
    StatusPresent,
    StatusAbsent,
    Unrecognized,
}

fn reading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"ID:\s*(\d+)\s*,\s*ALC:\s*(-?\d+)").unwrap())
}

/// Classify one device line. First match wins, in the same precedence the
/// firmware contract defines: terminal enrollment lines are exact matches,
/// everything else is substring-based.
pub fn classify(line: &str) -> DeviceMessage {
    let line = line.trim();

    if line == ENROLL_SUCCESS {
        return DeviceMessage::EnrollSuccess;
    }
    if line == ENROLL_FAILED {
        return DeviceMessage::EnrollFailed;
    }
    if line.contains(READY_MARKER) {
        return DeviceMessage::ReadyToEnroll;
    }

    if let Some(rest) = line.split_once(IDENTITY_MARKER).map(|(_, r)| r) {
        return match rest.trim().parse::<u32>() {
            Ok(token) => DeviceMessage::IdentityFound(token),
            Err(_) => DeviceMessage::Unrecognized,
        };
    }

    if line.contains("ID:") && line.contains("ALC:") {
        if let Some(caps) = reading_re().captures(line)
            && let (Ok(token), Ok(level)) = (caps[1].parse::<u32>(), caps[2].parse::<i32>())
        {
            return DeviceMessage::Reading { token, level };
        }
        return DeviceMessage::Unrecognized;
    }

    if line.contains(STATUS_PRESENT) {
        return DeviceMessage::StatusPresent;
    }
    if line.contains(STATUS_ABSENT) {
        return DeviceMessage::StatusAbsent;
    }

    DeviceMessage::Unrecognized
}
