mod common;
use common::at;

use rattendance::AttendanceStore;
use rattendance::errors::{AppError, ValidationError};
use rattendance::models::{AttendanceStatus, LogEntry, Member, Snapshot};

fn store_with(names: &[&str]) -> AttendanceStore {
    let mut store = AttendanceStore::new();
    store.replace_roster(names);
    store
}

fn names(store: &AttendanceStore) -> Vec<&str> {
    store.members().iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn add_member_trims_and_sorts() {
    let mut store = store_with(&["Carol", "alice"]);
    store.add_member("  Bob  ").expect("add");

    assert_eq!(names(&store), vec!["alice", "Bob", "Carol"]);
    assert_eq!(store.find_member("bob").map(|m| m.name.as_str()), Some("Bob"));
}

#[test]
fn add_member_rejects_empty_and_duplicates() {
    let mut store = store_with(&["Alice"]);

    assert!(matches!(
        store.add_member("   "),
        Err(AppError::Validation(ValidationError::EmptyName))
    ));
    assert!(matches!(
        store.add_member("ALICE"),
        Err(AppError::Validation(ValidationError::DuplicateName(_)))
    ));
    assert_eq!(store.members().len(), 1);
}

#[test]
fn sign_in_twice_is_a_no_op() {
    let mut store = store_with(&["Alice", "Bob"]);

    assert!(store.sign_in_at("Alice", at(9, 0)));
    assert!(!store.sign_in_at("Alice", at(9, 5)));
    assert_eq!(store.active_sessions().len(), 1);
    assert_eq!(store.active_sessions()[0].sign_in, at(9, 0));
}

#[test]
fn sign_in_ignores_empty_and_unknown_names() {
    let mut store = store_with(&["Alice"]);

    assert!(!store.sign_in("  "));
    assert!(!store.sign_in("Mallory"));
    assert!(store.active_sessions().is_empty());
}

#[test]
fn active_sessions_stay_sorted_by_name() {
    let mut store = store_with(&["Alice", "Bob", "Carol"]);
    store.sign_in_at("Carol", at(9, 0));
    store.sign_in_at("Alice", at(9, 1));
    store.sign_in_at("Bob", at(9, 2));

    let order: Vec<&str> = store
        .active_sessions()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(order, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn sign_out_moves_session_to_log() {
    let mut store = store_with(&["Alice"]);
    store.sign_in("Alice");

    let entry = store.sign_out("Alice").cloned().expect("entry");
    assert!(entry.sign_out > entry.sign_in);
    assert!(store.active_sessions().is_empty());
    assert_eq!(store.attendance_log().len(), 1);
}

#[test]
fn sign_out_without_session_is_a_no_op() {
    let mut store = store_with(&["Alice"]);
    assert!(store.sign_out("Alice").is_none());
    assert!(store.attendance_log().is_empty());
}

#[test]
fn sign_out_at_same_instant_is_still_later() {
    let mut store = store_with(&["Alice"]);
    store.sign_in_at("Alice", at(9, 0));

    let entry = store.sign_out_at("Alice", at(9, 0)).cloned().expect("entry");
    assert!(entry.sign_out > entry.sign_in);
}

#[test]
fn completed_sessions_are_prepended() {
    let mut store = store_with(&["Alice", "Bob"]);
    store.sign_in_at("Alice", at(9, 0));
    store.sign_in_at("Bob", at(9, 10));
    store.sign_out_at("Bob", at(10, 0));
    store.sign_out_at("Alice", at(11, 0));

    assert_eq!(store.attendance_log()[0].name, "Alice");
    assert_eq!(store.attendance_log()[1].name, "Bob");
}

#[test]
fn rename_cascades_to_sessions_and_log() {
    let mut store = store_with(&["Alice", "Bob"]);
    store.sign_in_at("Alice", at(9, 0));
    store.sign_out_at("Alice", at(10, 0));
    store.sign_in_at("Alice", at(11, 0));
    store.sign_in_at("Bob", at(11, 5));

    let before = store.merged_view();
    store.rename_member("Alice", "Zelda").expect("rename");
    let after = store.merged_view();

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.sign_in, a.sign_in);
        assert_eq!(b.sign_out, a.sign_out);
        assert_eq!(b.status, a.status);
        let expected = if b.name == "Alice" { "Zelda" } else { "Bob" };
        assert_eq!(a.name, expected);
    }

    assert_eq!(names(&store), vec!["Bob", "Zelda"]);
    let order: Vec<&str> = store
        .active_sessions()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(order, vec!["Bob", "Zelda"]);
}

#[test]
fn rename_validates_new_name() {
    let mut store = store_with(&["Alice", "Bob"]);

    assert!(matches!(
        store.rename_member("Alice", " "),
        Err(AppError::Validation(ValidationError::EmptyName))
    ));
    assert!(matches!(
        store.rename_member("Alice", "bob"),
        Err(AppError::Validation(ValidationError::DuplicateName(_)))
    ));
    assert!(matches!(
        store.rename_member("Nobody", "Carol"),
        Err(AppError::Validation(ValidationError::UnknownMember(_)))
    ));

    // changing only the case of your own name is allowed
    store.rename_member("Alice", "ALICE").expect("case-only rename");
    assert_eq!(names(&store), vec!["ALICE", "Bob"]);
}

#[test]
fn delete_member_removes_every_trace() {
    let mut store = store_with(&["Alice", "Bob"]);
    store.sign_in_at("Alice", at(9, 0));
    store.sign_out_at("Alice", at(10, 0));
    store.sign_in_at("Alice", at(11, 0));
    store.sign_in_at("Bob", at(11, 0));

    assert!(store.delete_member("Alice"));
    assert!(!store.delete_member("Alice"));

    assert_eq!(names(&store), vec!["Bob"]);
    assert!(store.merged_view().iter().all(|r| r.name == "Bob"));
}

#[test]
fn replace_roster_clears_sessions_and_log() {
    let mut store = store_with(&["Alice", "Bob"]);
    store.sign_in_at("Alice", at(9, 0));
    store.sign_in_at("Bob", at(9, 0));
    store.sign_out_at("Bob", at(10, 0));

    store.replace_roster(["Dave", " carol ", "", "dave", "Alice"]);

    assert_eq!(names(&store), vec!["Alice", "carol", "Dave"]);
    assert!(store.active_sessions().is_empty());
    assert!(store.attendance_log().is_empty());
}

#[test]
fn sign_in_candidates_exclude_present_members() {
    let mut store = store_with(&["Alice", "Bob", "Carol"]);
    store.sign_in("Bob");

    let candidates: Vec<&str> = store
        .sign_in_candidates()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(candidates, vec!["Alice", "Carol"]);
}

#[test]
fn start_new_task_clears_session_data_but_keeps_roster() {
    let mut store = store_with(&["Alice", "Bob"]);
    store.sign_in_at("Alice", at(9, 0));
    store.sign_in_at("Bob", at(9, 0));
    store.sign_out_at("Bob", at(10, 0));
    assert!(store.has_session_data());

    assert!(!store.start_new_task("   "));
    assert!(store.has_session_data());
    assert_eq!(store.task_number(), None);

    assert!(store.start_new_task(" 42-B "));
    assert_eq!(store.task_number(), Some("42-B"));
    assert!(!store.has_session_data());
    assert_eq!(store.members().len(), 2);
}

#[test]
fn clear_log_reports_whether_anything_changed() {
    let mut store = store_with(&["Alice"]);
    assert!(!store.clear_log());

    store.sign_in("Alice");
    assert!(store.clear_log());
    assert!(!store.has_session_data());
}

#[test]
fn merged_view_puts_present_members_first() {
    let mut store = store_with(&["Alice", "Bob", "Carol", "Dave"]);

    // Bob has the most recent sign-in overall, but already left.
    store.sign_in_at("Alice", at(8, 0));
    store.sign_in_at("Bob", at(12, 0));
    store.sign_out_at("Bob", at(13, 0));
    store.sign_in_at("Carol", at(7, 0));
    store.sign_out_at("Carol", at(8, 0));
    store.sign_in_at("Dave", at(9, 0));

    let view = store.merged_view();
    let order: Vec<(&str, AttendanceStatus)> =
        view.iter().map(|r| (r.name.as_str(), r.status)).collect();

    assert_eq!(
        order,
        vec![
            ("Dave", AttendanceStatus::SignedIn),
            ("Alice", AttendanceStatus::SignedIn),
            ("Bob", AttendanceStatus::SignedOut),
            ("Carol", AttendanceStatus::SignedOut),
        ]
    );
    assert!(view[0].sign_out.is_none());
    assert_eq!(view[2].sign_out, Some(at(13, 0)));
}

#[test]
fn sign_in_then_out_walkthrough() {
    let mut store = store_with(&["Alice", "Bob"]);

    store.sign_in("Alice");
    let view = store.merged_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Alice");
    assert_eq!(view[0].status, AttendanceStatus::SignedIn);

    store.sign_out("Alice");
    let view = store.merged_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].status, AttendanceStatus::SignedOut);
    assert!(view[0].sign_out.expect("signed out") > view[0].sign_in);
}

#[test]
fn default_roster_has_forty_sorted_members() {
    let store = AttendanceStore::with_default_roster();
    assert_eq!(store.members().len(), 40);

    let list = names(&store);
    let mut sorted = list.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(list, sorted);
    assert!(!store.has_session_data());
}

#[test]
fn snapshot_round_trip_preserves_state() {
    let mut store = store_with(&["Alice", "Bob"]);
    store.start_new_task("7");
    store.sign_in_at("Alice", at(9, 0));
    store.sign_in_at("Bob", at(9, 30));
    store.sign_out_at("Bob", at(10, 0));

    let restored = AttendanceStore::from_snapshot(store.snapshot());
    assert_eq!(restored, store);
}

#[test]
fn from_snapshot_normalizes_bad_data() {
    let snapshot = Snapshot {
        members: vec![Member::new("bob"), Member::new(" Alice "), Member::new("BOB")],
        active_sessions: vec![],
        attendance_log: vec![LogEntry {
            name: "Alice".into(),
            sign_in: at(10, 0),
            sign_out: at(9, 0),
        }],
        task_number: Some("  ".into()),
    };

    let store = AttendanceStore::from_snapshot(snapshot);
    assert_eq!(names(&store), vec!["Alice", "bob"]);
    assert!(store.attendance_log().is_empty());
    assert_eq!(store.task_number(), None);
}
