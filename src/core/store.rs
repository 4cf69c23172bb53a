//! In-memory attendance state: roster, open sessions and the task log.
//!
//! Every mutation keeps the three collections consistent by member name.
//! Persistence is not handled here; callers take a [`Snapshot`] after each
//! mutation and hand it to the database layer.

use crate::core::roster::default_roster;
use crate::errors::{AppResult, ValidationError};
use crate::models::member::collate_names;
use crate::models::{ActiveSession, AttendanceRecord, LogEntry, Member, Snapshot};
use chrono::{DateTime, Local};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceStore {
    members: Vec<Member>,
    active_sessions: Vec<ActiveSession>,
    attendance_log: Vec<LogEntry>,
    task_number: Option<String>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store seeded with the built-in roster.
    pub fn with_default_roster() -> Self {
        let mut store = Self::new();
        store.members = dedup_names(default_roster().iter().copied());
        store
    }

    /// Rebuild a store from persisted state.
    ///
    /// Saved data is normalized: names are trimmed and deduplicated,
    /// collections are re-sorted, and sessions or log rows that break the
    /// per-member / ordering rules are dropped.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let members = dedup_names(snapshot.members.iter().map(|m| m.name.as_str()));

        let mut active_sessions: Vec<ActiveSession> = Vec::new();
        for s in snapshot.active_sessions {
            let name = s.name.trim();
            if name.is_empty() || active_sessions.iter().any(|a| a.name == name) {
                tracing::warn!(name = %s.name, "dropping invalid saved session");
                continue;
            }
            active_sessions.push(ActiveSession::new(name, s.sign_in));
        }
        active_sessions.sort_by(|a, b| collate_names(&a.name, &b.name));

        let attendance_log = snapshot
            .attendance_log
            .into_iter()
            .filter(|e| {
                let ok = !e.name.trim().is_empty() && e.sign_out > e.sign_in;
                if !ok {
                    tracing::warn!(name = %e.name, "dropping invalid saved log entry");
                }
                ok
            })
            .collect();

        let task_number = snapshot
            .task_number
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self {
            members,
            active_sessions,
            attendance_log,
            task_number,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            members: self.members.clone(),
            active_sessions: self.active_sessions.clone(),
            attendance_log: self.attendance_log.clone(),
            task_number: self.task_number.clone(),
        }
    }

    // ------------------------------------------------
    // Queries
    // ------------------------------------------------

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn active_sessions(&self) -> &[ActiveSession] {
        &self.active_sessions
    }

    pub fn attendance_log(&self) -> &[LogEntry] {
        &self.attendance_log
    }

    pub fn task_number(&self) -> Option<&str> {
        self.task_number.as_deref()
    }

    /// Case-insensitive roster lookup.
    pub fn find_member(&self, name: &str) -> Option<&Member> {
        let name = name.trim();
        self.members.iter().find(|m| m.same_name(name))
    }

    pub fn is_signed_in(&self, name: &str) -> bool {
        self.active_sessions.iter().any(|s| s.name == name)
    }

    /// Members who may sign in right now.
    pub fn sign_in_candidates(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| !self.is_signed_in(&m.name))
            .collect()
    }

    /// True when starting a task or clearing the log would discard data.
    pub fn has_session_data(&self) -> bool {
        !self.active_sessions.is_empty() || !self.attendance_log.is_empty()
    }

    // ------------------------------------------------
    // Roster
    // ------------------------------------------------

    pub fn add_member(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.find_member(name).is_some() {
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }

        self.members.push(Member::new(name));
        self.sort_members();
        Ok(())
    }

    pub fn rename_member(&mut self, old_name: &str, new_name: &str) -> AppResult<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let idx = self
            .members
            .iter()
            .position(|m| m.name == old_name)
            .ok_or_else(|| ValidationError::UnknownMember(old_name.to_string()))?;

        let clash = self
            .members
            .iter()
            .enumerate()
            .any(|(i, m)| i != idx && m.same_name(new_name));
        if clash {
            return Err(ValidationError::DuplicateName(new_name.to_string()).into());
        }

        self.members[idx].name = new_name.to_string();
        for s in self.active_sessions.iter_mut().filter(|s| s.name == old_name) {
            s.name = new_name.to_string();
        }
        for e in self.attendance_log.iter_mut().filter(|e| e.name == old_name) {
            e.name = new_name.to_string();
        }

        self.sort_members();
        self.sort_sessions();
        Ok(())
    }

    /// Remove a member together with every session and log row under that
    /// name. Returns false when the name is not on the roster.
    pub fn delete_member(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.name != name);
        if self.members.len() == before {
            return false;
        }

        self.active_sessions.retain(|s| s.name != name);
        self.attendance_log.retain(|e| e.name != name);
        true
    }

    /// Replace the whole roster. Open sessions and the log are always
    /// cleared, since they may reference members that are gone.
    pub fn replace_roster<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        self.members = dedup_names(names.iter().map(|n| n.as_ref()));
        self.active_sessions.clear();
        self.attendance_log.clear();
    }

    // ------------------------------------------------
    // Sessions
    // ------------------------------------------------

    pub fn sign_in(&mut self, name: &str) -> bool {
        self.sign_in_at(name, Local::now())
    }

    /// Open a session stamped `at`. No-op for an empty or unknown name, or
    /// a member who is already signed in.
    pub fn sign_in_at(&mut self, name: &str, at: DateTime<Local>) -> bool {
        let name = name.trim();
        if name.is_empty() || !self.members.iter().any(|m| m.name == name) {
            return false;
        }
        if self.is_signed_in(name) {
            return false;
        }

        let pos = self
            .active_sessions
            .partition_point(|s| collate_names(&s.name, name).is_lt());
        self.active_sessions
            .insert(pos, ActiveSession::new(name, at));
        true
    }

    pub fn sign_out(&mut self, name: &str) -> Option<&LogEntry> {
        self.sign_out_at(name, Local::now())
    }

    /// Close the member's session at `at` and prepend it to the log.
    pub fn sign_out_at(&mut self, name: &str, at: DateTime<Local>) -> Option<&LogEntry> {
        let name = name.trim();
        let idx = self.active_sessions.iter().position(|s| s.name == name)?;
        let session = self.active_sessions.remove(idx);

        self.attendance_log.insert(0, LogEntry::close(session, at));
        self.attendance_log.first()
    }

    // ------------------------------------------------
    // Task / log
    // ------------------------------------------------

    /// Start a new task. Returns false (and changes nothing) when the task
    /// number is blank.
    pub fn start_new_task(&mut self, task_number: &str) -> bool {
        let task_number = task_number.trim();
        if task_number.is_empty() {
            return false;
        }

        self.task_number = Some(task_number.to_string());
        self.active_sessions.clear();
        self.attendance_log.clear();
        true
    }

    pub fn clear_log(&mut self) -> bool {
        if !self.has_session_data() {
            return false;
        }
        self.active_sessions.clear();
        self.attendance_log.clear();
        true
    }

    /// Open sessions first, then completed ones; newest sign-in first
    /// within each group.
    pub fn merged_view(&self) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .active_sessions
            .iter()
            .map(AttendanceRecord::from)
            .chain(self.attendance_log.iter().map(AttendanceRecord::from))
            .collect();

        records.sort_by(|a, b| {
            a.status
                .cmp(&b.status)
                .then_with(|| b.sign_in.cmp(&a.sign_in))
        });
        records
    }

    fn sort_members(&mut self) {
        self.members.sort_by(|a, b| collate_names(&a.name, &b.name));
    }

    fn sort_sessions(&mut self) {
        self.active_sessions
            .sort_by(|a, b| collate_names(&a.name, &b.name));
    }
}

/// Trim, skip blanks, drop case-insensitive duplicates (first one wins) and
/// sort.
fn dedup_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Member> {
    let mut seen = HashSet::new();
    let mut out: Vec<Member> = names
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.to_lowercase()))
        .map(Member::new)
        .collect();

    out.sort_by(|a, b| collate_names(&a.name, &b.name));
    out
}
