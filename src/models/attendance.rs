//! Attendance-ledger row and the status enums derived from a sensor reading.

use chrono::Local;
use serde::Serialize;

/// Default alcohol-level threshold; readings at or above it fail the test.
pub const DEFAULT_ALERT_THRESHOLD: i32 = 3500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NG")]
    Ng,
}

impl AttendanceStatus {
    pub fn from_level(level: i32, threshold: i32) -> Self {
        if level < threshold {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(AttendanceStatus::Present),
            "Absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

impl TestStatus {
    pub fn from_level(level: i32, threshold: i32) -> Self {
        if level < threshold {
            TestStatus::Ok
        } else {
            TestStatus::Ng
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Ok => "OK",
            TestStatus::Ng => "NG",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "OK" => Some(TestStatus::Ok),
            "NG" => Some(TestStatus::Ng),
            _ => None,
        }
    }
}

/// One committed attendance event.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub date: String,
    pub time: String,
    pub token: u32,
    pub name: String,
    pub level: i32,
    pub attendance: AttendanceStatus,
    pub test: TestStatus,
}

impl AttendanceRecord {
    /// Build a record stamped with the current local date and time.
    pub fn now(token: u32, name: String, level: i32, threshold: i32) -> Self {
        let now = Local::now();
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            token,
            name,
            level,
            attendance: AttendanceStatus::from_level(level, threshold),
            test: TestStatus::from_level(level, threshold),
        }
    }

    /// Column order of the attendance ledger.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.time.clone(),
            self.token.to_string(),
            self.name.clone(),
            self.level.to_string(),
            self.attendance.as_str().to_string(),
            self.test.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_below_threshold() {
        for level in [0, 1, 1200, 3499] {
            assert_eq!(
                AttendanceStatus::from_level(level, DEFAULT_ALERT_THRESHOLD),
                AttendanceStatus::Present
            );
            assert_eq!(
                TestStatus::from_level(level, DEFAULT_ALERT_THRESHOLD),
                TestStatus::Ok
            );
        }
    }

    #[test]
    fn statuses_at_or_above_threshold() {
        for level in [3500, 3501, 4000, i32::MAX] {
            assert_eq!(
                AttendanceStatus::from_level(level, DEFAULT_ALERT_THRESHOLD),
                AttendanceStatus::Absent
            );
            assert_eq!(
                TestStatus::from_level(level, DEFAULT_ALERT_THRESHOLD),
                TestStatus::Ng
            );
        }
    }

    #[test]
    fn statuses_stay_in_lockstep() {
        for level in (0..8000).step_by(250) {
            let a = AttendanceStatus::from_level(level, DEFAULT_ALERT_THRESHOLD);
            let t = TestStatus::from_level(level, DEFAULT_ALERT_THRESHOLD);
            assert_eq!(a == AttendanceStatus::Present, t == TestStatus::Ok);
        }
    }

    #[test]
    fn record_row_order_matches_ledger_columns() {
        let rec = AttendanceRecord {
            date: "2025-01-02".into(),
            time: "08:15:00".into(),
            token: 7,
            name: "Alice".into(),
            level: 4000,
            attendance: AttendanceStatus::Absent,
            test: TestStatus::Ng,
        };
        assert_eq!(
            rec.to_row(),
            vec!["2025-01-02", "08:15:00", "7", "Alice", "4000", "Absent", "NG"]
        );
    }
}
