use chrono::{DateTime, Local};
use serde::Serialize;

use super::log_entry::LogEntry;
use super::session::ActiveSession;
use super::status::AttendanceStatus;

/// One row of the merged view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub name: String,
    pub status: AttendanceStatus,
    pub sign_in: DateTime<Local>,
    pub sign_out: Option<DateTime<Local>>,
}

impl From<&ActiveSession> for AttendanceRecord {
    fn from(s: &ActiveSession) -> Self {
        Self {
            name: s.name.clone(),
            status: AttendanceStatus::SignedIn,
            sign_in: s.sign_in,
            sign_out: None,
        }
    }
}

impl From<&LogEntry> for AttendanceRecord {
    fn from(e: &LogEntry) -> Self {
        Self {
            name: e.name.clone(),
            status: AttendanceStatus::SignedOut,
            sign_in: e.sign_in,
            sign_out: Some(e.sign_out),
        }
    }
}
