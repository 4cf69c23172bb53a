use rattendance::config::Config;
use rattendance::utils::time::{DEFAULT_TIMESTAMP_FORMAT, is_valid_format};
use std::fs;

#[test]
fn timestamp_format_validation() {
    assert!(is_valid_format(DEFAULT_TIMESTAMP_FORMAT));
    assert!(is_valid_format("%d/%m/%Y %H:%M"));
    assert!(!is_valid_format("%Y-%Q"));
}

#[test]
fn invalid_timestamp_format_in_config_is_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rattendance.conf");
    fs::write(
        &path,
        "organization: Harbor Volunteers\ntimestamp_format: \"%Q\"\n",
    )
    .expect("write config");

    let cfg = Config::load_from(&path);

    assert_eq!(cfg.organization, "Harbor Volunteers");
    assert_eq!(cfg.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
}

#[test]
fn valid_timestamp_format_in_config_is_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rattendance.conf");
    fs::write(&path, "timestamp_format: \"%d/%m/%Y %H:%M\"\n").expect("write config");

    assert_eq!(Config::load_from(&path).timestamp_format, "%d/%m/%Y %H:%M");
}

#[test]
fn relative_database_resolves_against_config_dir() {
    assert_eq!(
        Config::resolve_database("custom.sqlite"),
        Config::config_dir().join("custom.sqlite")
    );
}

#[test]
fn absolute_database_is_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("custom.sqlite");

    assert_eq!(Config::resolve_database(&db.to_string_lossy()), db);
}
