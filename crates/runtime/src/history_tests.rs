use super::*;
use serial_test::serial;
use tempfile::tempdir;

fn temp_store() -> (HistoryStore, tempfile::TempDir) {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("history.log");
    let store = HistoryStore::with_path(path);
    (store, dir)
}

#[test]
fn scan_event_new_sets_fields() {
    let before = Utc::now();
    let ev = ScanEvent::new("/srv/projects".into(), 12, 4, 4096, 17);
    let after = Utc::now();

    assert_eq!(ev.version, HISTORY_VERSION);
    assert_eq!(ev.root, "/srv/projects");
    assert_eq!(ev.files, 12);
    assert_eq!(ev.dirs, 4);
    assert_eq!(ev.total_size, 4096);
    assert_eq!(ev.duration_ms, 17);

    // Timestamp should be between before and after (up to clock drift).
    assert!(ev.timestamp >= before && ev.timestamp <= after);
}

#[test]
fn log_and_iter_round_trip_single_event() {
    let (store, _dir) = temp_store();

    let ev = ScanEvent::new("/tmp/a".into(), 5, 2, 100, 3);
    store.log_scan(ev.clone());

    let events: Vec<HistoryEvent> = store.iter_events().collect();
    assert_eq!(events.len(), 1);

    match &events[0] {
        HistoryEvent::Scan(s) => {
            assert_eq!(s.root, ev.root);
            assert_eq!(s.files, ev.files);
            assert_eq!(s.dirs, ev.dirs);
            assert_eq!(s.total_size, ev.total_size);
            assert_eq!(s.version, HISTORY_VERSION);
        }
    }
}

#[test]
fn iter_events_empty_when_file_missing() {
    let (store, _dir) = temp_store();
    assert_eq!(store.count(), 0);
    assert_eq!(store.iter_events().count(), 0);
}

#[test]
fn count_matches_number_of_events() {
    let (store, _dir) = temp_store();

    assert_eq!(store.count(), 0);

    store.log_scan(ScanEvent::new("/a".into(), 1, 1, 10, 10));
    assert_eq!(store.count(), 1);

    store.log_scan(ScanEvent::new("/b".into(), 2, 1, 20, 20));
    store.log_scan(ScanEvent::new("/c".into(), 3, 1, 30, 30));
    assert_eq!(store.count(), 3);
}

#[test]
fn recent_scans_returns_newest_first_and_truncates() {
    let (store, _dir) = temp_store();

    store.log_scan(ScanEvent::new("/first".into(), 1, 0, 0, 1));
    store.log_scan(ScanEvent::new("/second".into(), 2, 0, 0, 2));
    store.log_scan(ScanEvent::new("/third".into(), 3, 0, 0, 3));

    let recent = store.recent_scans(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].root, "/third");
    assert_eq!(recent[1].root, "/second");
}

#[test]
fn clear_removes_file_and_is_idempotent() {
    let (store, _dir) = temp_store();
    let path = store.path().to_path_buf();

    // Ensure file exists.
    store.log_scan(ScanEvent::new("/x".into(), 1, 1, 1, 1));
    assert!(path.exists());

    store.clear().expect("clear should succeed");
    assert!(!path.exists());

    // Second clear should still succeed and keep file absent
    store.clear().expect("clear should be idempotent");
    assert!(!path.exists());
}

#[test]
fn malformed_lines_are_skipped() {
    use std::io::Write as _;

    let (store, _dir) = temp_store();
    let path = store.path().to_path_buf();

    // Write a malformed line manually.
    {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .expect("open history file for malformed write");
        writeln!(file, "this is not json").unwrap();
    }

    let valid = ScanEvent::new("/ok".into(), 1, 1, 1, 1);
    store.log_scan(valid.clone());

    // Expect only the valid line to survive
    let events: Vec<HistoryEvent> = store.iter_events().collect();
    assert_eq!(events.len(), 1);

    match &events[0] {
        HistoryEvent::Scan(s) => {
            assert_eq!(s.root, valid.root);
            assert_eq!(s.files, valid.files);
        }
    }
}

#[test]
#[serial]
fn new_respects_history_disabled_env_zero() {
    unsafe { std::env::remove_var(HISTORY_DISABLED_ENV) };
    assert!(
        HistoryStore::new().is_some(),
        "history should be enabled by default"
    );

    unsafe { std::env::set_var(HISTORY_DISABLED_ENV, "0") };
    assert!(
        HistoryStore::new().is_none(),
        "history should be disabled when env is 0"
    );
    unsafe { std::env::remove_var(HISTORY_DISABLED_ENV) };
}

#[test]
#[serial]
fn new_respects_history_disabled_env_false() {
    unsafe { std::env::set_var(HISTORY_DISABLED_ENV, "false") };
    assert!(
        HistoryStore::new().is_none(),
        "history should be disabled when env is false"
    );

    unsafe { std::env::set_var(HISTORY_DISABLED_ENV, "TRUE") };
    assert!(HistoryStore::new().is_some());
    unsafe { std::env::remove_var(HISTORY_DISABLED_ENV) };
}
