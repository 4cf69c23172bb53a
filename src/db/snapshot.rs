//! Save / load the attendance snapshot.
//!
//! Saving rewrites every table inside one transaction. A database whose
//! `settings` table has no `saved_at` key has never been saved. Rows with
//! unreadable timestamps are skipped on load; the rest of the state is kept.

use crate::errors::AppResult;
use crate::models::{ActiveSession, LogEntry, Member, Snapshot};
use crate::utils::time::{parse_iso, to_iso};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

const KEY_TASK: &str = "task_number";
const KEY_SAVED_AT: &str = "saved_at";

fn get_setting(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let v = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn load_snapshot(conn: &Connection) -> AppResult<Option<Snapshot>> {
    if get_setting(conn, KEY_SAVED_AT)?.is_none() {
        return Ok(None);
    }

    let mut stmt = conn.prepare("SELECT name FROM members ORDER BY name")?;
    let members = stmt
        .query_map([], |row| Ok(Member::new(row.get::<_, String>(0)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare("SELECT name, sign_in FROM active_sessions ORDER BY name")?;
    let raw_sessions = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut active_sessions = Vec::with_capacity(raw_sessions.len());
    for (name, sign_in) in raw_sessions {
        match parse_iso(&sign_in) {
            Ok(ts) => active_sessions.push(ActiveSession::new(name, ts)),
            Err(e) => tracing::warn!(%name, error = %e, "skipping unreadable saved session"),
        }
    }

    let mut stmt = conn.prepare(
        "SELECT name, sign_in, sign_out FROM attendance_log ORDER BY position ASC",
    )?;
    let raw_log = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut attendance_log = Vec::with_capacity(raw_log.len());
    for (name, sign_in, sign_out) in raw_log {
        match (parse_iso(&sign_in), parse_iso(&sign_out)) {
            (Ok(sign_in), Ok(sign_out)) => attendance_log.push(LogEntry {
                name,
                sign_in,
                sign_out,
            }),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(%name, error = %e, "skipping unreadable saved log entry")
            }
        }
    }

    Ok(Some(Snapshot {
        members,
        active_sessions,
        attendance_log,
        task_number: get_setting(conn, KEY_TASK)?,
    }))
}

pub fn save_snapshot(conn: &Connection, snapshot: &Snapshot) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "DELETE FROM members;
         DELETE FROM active_sessions;
         DELETE FROM attendance_log;",
    )?;

    {
        let mut stmt = tx.prepare_cached("INSERT INTO members (name) VALUES (?1)")?;
        for m in &snapshot.members {
            stmt.execute(params![m.name])?;
        }

        let mut stmt =
            tx.prepare_cached("INSERT INTO active_sessions (name, sign_in) VALUES (?1, ?2)")?;
        for s in &snapshot.active_sessions {
            stmt.execute(params![s.name, to_iso(&s.sign_in)])?;
        }

        let mut stmt = tx.prepare_cached(
            "INSERT INTO attendance_log (position, name, sign_in, sign_out)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (pos, e) in snapshot.attendance_log.iter().enumerate() {
            stmt.execute(params![
                pos as i64,
                e.name,
                to_iso(&e.sign_in),
                to_iso(&e.sign_out)
            ])?;
        }
    }

    match &snapshot.task_number {
        Some(task) => {
            tx.execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
                params![KEY_TASK, task],
            )?;
        }
        None => {
            tx.execute("DELETE FROM settings WHERE key = ?1", params![KEY_TASK])?;
        }
    }
    tx.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        params![KEY_SAVED_AT, Local::now().to_rfc3339()],
    )?;

    tx.commit()?;
    Ok(())
}
