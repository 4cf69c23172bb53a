// src/export/json.rs

use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonLog<'a> {
    organization: &'a str,
    task_number: Option<&'a str>,
    generated_at: DateTime<Local>,
    records: &'a [AttendanceRecord],
}

/// Write the merged view as pretty-printed JSON.
pub fn write_json<W: Write>(
    mut out: W,
    organization: &str,
    task_number: Option<&str>,
    generated_at: DateTime<Local>,
    records: &[AttendanceRecord],
) -> AppResult<()> {
    let doc = JsonLog {
        organization,
        task_number,
        generated_at,
        records,
    };
    serde_json::to_writer_pretty(&mut out, &doc)?;
    writeln!(out)?;
    Ok(())
}
