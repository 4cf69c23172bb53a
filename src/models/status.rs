use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    // Declaration order is the display priority: present members first.
    SignedIn,
    SignedOut,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::SignedIn => "Signed In",
            AttendanceStatus::SignedOut => "Signed Out",
        }
    }

    /// Short code used in CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::SignedIn => "signed_in",
            AttendanceStatus::SignedOut => "signed_out",
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AttendanceStatus::SignedIn)
    }
}
