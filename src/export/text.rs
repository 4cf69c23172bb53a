// src/export/text.rs

use crate::config::Config;
use crate::core::store::AttendanceStore;
use crate::models::AttendanceRecord;
use crate::utils::formatting::display_width;
use crate::utils::table::{Column, Table};
use crate::utils::time::{DEFAULT_TIMESTAMP_FORMAT, format_timestamp};
use chrono::{DateTime, Local};

pub const NO_RECORDS: &str = "No attendance records found.";
pub const IN_PROGRESS: &str = "...";

/// Presentation settings for the plain-text log.
#[derive(Debug, Clone)]
pub struct ExportStyle {
    pub organization: String,
    pub timestamp_format: String,
    pub rule: char,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            organization: crate::config::DEFAULT_ORGANIZATION.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            rule: '-',
        }
    }
}

impl From<&Config> for ExportStyle {
    fn from(cfg: &Config) -> Self {
        Self {
            organization: cfg.organization.clone(),
            timestamp_format: cfg.timestamp_format.clone(),
            rule: cfg.separator_char.chars().next().unwrap_or('-'),
        }
    }
}

impl AttendanceStore {
    /// Render the merged view as a fixed-width text log.
    pub fn format_export(
        &self,
        task_number: Option<&str>,
        generated_at: DateTime<Local>,
        style: &ExportStyle,
    ) -> String {
        render_log(&self.merged_view(), task_number, generated_at, style)
    }
}

pub fn render_log(
    records: &[AttendanceRecord],
    task_number: Option<&str>,
    generated_at: DateTime<Local>,
    style: &ExportStyle,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} - Attendance Log\n", style.organization));
    if let Some(task) = task_number.map(str::trim).filter(|t| !t.is_empty()) {
        out.push_str(&format!("Task: {}\n", task));
    }
    out.push_str(&format!(
        "Generated: {}\n\n",
        format_timestamp(&generated_at, &style.timestamp_format)
    ));

    if records.is_empty() {
        out.push_str(NO_RECORDS);
        out.push('\n');
        return out;
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.status.label().to_string(),
                format_timestamp(&r.sign_in, &style.timestamp_format),
                r.sign_out
                    .map(|t| format_timestamp(&t, &style.timestamp_format))
                    .unwrap_or_else(|| IN_PROGRESS.to_string()),
            ]
        })
        .collect();

    let widest = |i: usize| rows.iter().map(|r| display_width(&r[i])).max().unwrap_or(0);

    let mut table = Table::new(vec![
        Column::new("Member", widest(0)),
        Column::new("Status", widest(1)),
        Column::new("Signed In", widest(2)),
        Column::new("Signed Out", widest(3)),
    ])
    .with_rule(style.rule);

    for row in rows {
        table.add_row(row);
    }

    out.push_str(&table.render());
    out
}
