use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use super::session::ActiveSession;

/// A completed sign-in / sign-out pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub sign_in: DateTime<Local>,
    pub sign_out: DateTime<Local>,
}

impl LogEntry {
    /// Close an active session at `at`.
    ///
    /// The sign-out must be strictly later than the sign-in: if the clock
    /// has not moved past the sign-in instant, the sign-out is stamped one
    /// millisecond after it.
    pub fn close(session: ActiveSession, at: DateTime<Local>) -> Self {
        let sign_out = if at > session.sign_in {
            at
        } else {
            session.sign_in + Duration::milliseconds(1)
        };

        Self {
            name: session.name,
            sign_in: session.sign_in,
            sign_out,
        }
    }

    pub fn duration(&self) -> Duration {
        self.sign_out - self.sign_in
    }
}
