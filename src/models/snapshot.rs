use serde::{Deserialize, Serialize};

use super::log_entry::LogEntry;
use super::member::Member;
use super::session::ActiveSession;

/// Everything persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub active_sessions: Vec<ActiveSession>,
    /// Most recently completed first.
    pub attendance_log: Vec<LogEntry>,
    pub task_number: Option<String>,
}
