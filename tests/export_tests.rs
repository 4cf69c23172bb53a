mod common;
use common::at;

use chrono::NaiveDate;
use rattendance::AttendanceStore;
use rattendance::config::Config;
use rattendance::export::{
    ExportFormat, ExportLogic, ExportStyle, ExportTarget, NO_RECORDS, export_file_name,
};
use std::fs;

fn sample_store() -> AttendanceStore {
    let mut store = AttendanceStore::new();
    store.replace_roster(["Alice", "Bob"]);
    store.sign_in_at("Bob", at(9, 0));
    store.sign_out_at("Bob", at(9, 30));
    store.sign_in_at("Alice", at(10, 0));
    store
}

fn style(org: &str) -> ExportStyle {
    ExportStyle {
        organization: org.to_string(),
        ..ExportStyle::default()
    }
}

#[test]
fn text_export_layout() {
    let store = sample_store();
    let text = store.format_export(Some("17"), at(12, 0), &style("Harbor Volunteers"));

    let expected = "\
Harbor Volunteers - Attendance Log
Task: 17
Generated: 2026-10-17 12:00:00

Member  Status      Signed In            Signed Out
------------------------------------------------------------
Alice   Signed In   2026-10-17 10:00:00  ...
Bob     Signed Out  2026-10-17 09:00:00  2026-10-17 09:30:00
";
    assert_eq!(text, expected);
}

#[test]
fn text_export_without_task_omits_task_line() {
    let store = sample_store();
    let text = store.format_export(None, at(12, 0), &ExportStyle::default());

    assert!(!text.contains("Task:"));
    assert!(text.starts_with("Volunteer Organization - Attendance Log\nGenerated: "));
}

#[test]
fn member_column_grows_with_longest_name() {
    let mut store = AttendanceStore::new();
    store.replace_roster(["Maximilian Oberhauser"]);
    store.sign_in_at("Maximilian Oberhauser", at(9, 0));

    let text = store.format_export(None, at(12, 0), &ExportStyle::default());
    assert!(text.contains("Member                 Status"));
    assert!(text.contains("Maximilian Oberhauser  Signed In"));
}

#[test]
fn empty_view_prints_no_records_message() {
    let mut store = AttendanceStore::new();
    store.replace_roster(["Alice", "Bob"]);

    let text = store.format_export(None, at(12, 0), &ExportStyle::default());
    assert!(text.contains(NO_RECORDS));
    assert!(!text.contains("Signed Out"));

    store.sign_in("Alice");
    let text = store.format_export(None, at(12, 0), &ExportStyle::default());
    assert!(!text.contains(NO_RECORDS));

    store.sign_out("Alice");
    let text = store.format_export(None, at(12, 0), &ExportStyle::default());
    assert!(!text.contains(NO_RECORDS));
}

#[test]
fn export_file_names() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 17).expect("date");

    assert_eq!(
        export_file_name(Some("12"), date, ExportFormat::Text),
        "task_12_log_2026-10-17.txt"
    );
    assert_eq!(
        export_file_name(Some(" Clean up / park #3 "), date, ExportFormat::Csv),
        "task_Clean_up_park_3_log_2026-10-17.csv"
    );
    assert_eq!(
        export_file_name(None, date, ExportFormat::Json),
        "attendance_log_2026-10-17.json"
    );
    assert_eq!(
        export_file_name(Some("  "), date, ExportFormat::Text),
        "attendance_log_2026-10-17.txt"
    );
}

#[test]
fn csv_export_marks_open_sessions() {
    let store = sample_store();
    let mut buf = Vec::new();
    ExportLogic::write(&store, &Config::default(), ExportFormat::Csv, &mut buf, at(12, 0))
        .expect("csv");

    let out = String::from_utf8(buf).expect("utf8");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "member,status,signed_in,signed_out");
    assert!(lines[1].starts_with("Alice,signed_in,"));
    assert!(lines[1].ends_with(','));
    assert!(lines[2].starts_with("Bob,signed_out,"));
}

#[test]
fn json_export_contains_records() {
    let mut store = sample_store();
    store.start_new_task("9");
    store.replace_roster(["Alice"]);
    store.sign_in_at("Alice", at(10, 0));

    let mut buf = Vec::new();
    ExportLogic::write(&store, &Config::default(), ExportFormat::Json, &mut buf, at(12, 0))
        .expect("json");

    let doc: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
    assert_eq!(doc["task_number"], "9");
    assert_eq!(doc["records"].as_array().map(|r| r.len()), Some(1));
    assert_eq!(doc["records"][0]["name"], "Alice");
    assert_eq!(doc["records"][0]["status"], "signed_in");
    assert!(doc["records"][0]["sign_out"].is_null());
}

#[test]
fn export_to_default_file_name_in_export_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = Config {
        export_dir: dir.path().to_string_lossy().to_string(),
        ..Config::default()
    };

    let mut store = sample_store();
    store.start_new_task("5");

    let path = ExportLogic::export(
        &store,
        &cfg,
        ExportFormat::Text,
        &ExportTarget::File(None),
        false,
        at(12, 0),
    )
    .expect("export")
    .expect("path");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("task_5_log_2026-10-17.txt")
    );
    let content = fs::read_to_string(&path).expect("read");
    assert!(content.contains("Task: 5"));
    assert!(content.contains(NO_RECORDS));
}

#[test]
fn unknown_timestamp_specifier_falls_back_to_default_format() {
    let store = sample_store();
    let style = ExportStyle {
        timestamp_format: "%Y-%Q".to_string(),
        ..ExportStyle::default()
    };

    let text = store.format_export(None, at(12, 0), &style);

    assert!(text.contains("Generated: 2026-10-17 12:00:00"));
    assert!(text.contains("2026-10-17 10:00:00"));
}
