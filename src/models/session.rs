use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An open sign-in with no recorded sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub name: String,
    pub sign_in: DateTime<Local>, // ⇔ active_sessions.sign_in (TEXT, RFC 3339)
}

impl ActiveSession {
    pub fn new(name: impl Into<String>, sign_in: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            sign_in,
        }
    }
}
