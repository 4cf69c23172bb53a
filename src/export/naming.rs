// src/export/naming.rs

use crate::export::ExportFormat;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("static regex"))
}

/// Make a task number safe to embed in a file name.
pub fn sanitize_task_number(task: &str) -> String {
    unsafe_chars().replace_all(task.trim(), "_").into_owned()
}

/// `task_<task>_log_<date>.<ext>`, or `attendance_log_<date>.<ext>` when
/// no task is set.
pub fn export_file_name(
    task_number: Option<&str>,
    date: NaiveDate,
    format: ExportFormat,
) -> String {
    let date = date.format("%Y-%m-%d");
    let ext = format.extension();

    match task_number.map(str::trim).filter(|t| !t.is_empty()) {
        Some(task) => format!("task_{}_log_{}.{}", sanitize_task_number(task), date, ext),
        None => format!("attendance_log_{}.{}", date, ext),
    }
}
