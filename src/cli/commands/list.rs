use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::export::IN_PROGRESS;
use crate::models::AttendanceRecord;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{display_width, pad_right};
use crate::utils::time::format_timestamp;
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::List { present } = cmd else {
        return Ok(());
    };

    let state = AppState::open(cfg);
    let records: Vec<AttendanceRecord> = state
        .store
        .merged_view()
        .into_iter()
        .filter(|r| !*present || r.status.is_signed_in())
        .collect();

    match state.store.task_number() {
        Some(task) => header(format!("Task {}", task)),
        None => header("Attendance"),
    }

    if records.is_empty() {
        info("No attendance records found.");
        return Ok(());
    }

    print_records(&records, cfg);

    let present_count = state.store.active_sessions().len();
    println!(
        "\nPresent: {} | Completed sessions: {}",
        present_count,
        state.store.attendance_log().len()
    );
    Ok(())
}

fn print_records(records: &[AttendanceRecord], cfg: &Config) {
    let name_w = records
        .iter()
        .map(|r| display_width(&r.name))
        .max()
        .unwrap_or(0)
        .max("Member".len());

    println!(
        "{}  {:<10}  {:<19}  {}",
        pad_right("Member", name_w),
        "Status",
        "Signed In",
        "Signed Out"
    );

    for r in records {
        let colour = if r.status.is_signed_in() {
            Colour::Green
        } else {
            Colour::Red
        };
        let status_text = format!("{:<10}", r.status.label());
        let status = colour.paint(status_text.as_str());
        let signed_out = r
            .sign_out
            .map(|t| format_timestamp(&t, &cfg.timestamp_format))
            .unwrap_or_else(|| IN_PROGRESS.to_string());

        println!(
            "{}  {}  {:<19}  {}",
            pad_right(&r.name, name_w),
            status,
            format_timestamp(&r.sign_in, &cfg.timestamp_format),
            signed_out
        );
    }
}
