mod common;

use common::{USER, day, sample_entry, spawn_fixed_backend, spawn_mock_backend};
use wjournal::errors::AppError;
use wjournal::models::{Entry, RowNumber};
use wjournal::store::{HttpRecordStore, RecordStore};

#[test]
fn fetch_of_an_unknown_date_is_absent() {
    let (url, _) = spawn_mock_backend();
    let store = HttpRecordStore::new(url, USER).unwrap();

    assert_eq!(store.fetch_entry(day("2024-05-01")).unwrap(), None);
}

#[test]
fn upsert_creates_then_updates_by_date() {
    let (url, backend) = spawn_mock_backend();
    let store = HttpRecordStore::new(url, USER).unwrap();
    let mut entry = sample_entry("2024-05-01");

    let created = store.upsert(&entry).unwrap();
    assert!(!created.was_update);
    assert_eq!(created.row_number, Some(RowNumber::new(2)));

    entry.physical_state = 2;
    let updated = store.upsert(&entry).unwrap();
    assert!(updated.was_update);
    assert_eq!(updated.row_number, created.row_number);
    assert_eq!(backend.len(), 1);

    let fetched = store.fetch_entry(day("2024-05-01")).unwrap().unwrap();
    assert_eq!(fetched.physical_state, 2);
    assert_eq!(fetched.task_1, entry.task_1);
    assert_eq!(fetched.row_number, Some(RowNumber::new(2)));
}

#[test]
fn list_is_newest_first_and_respects_the_limit() {
    let (url, _) = spawn_mock_backend();
    let store = HttpRecordStore::new(url, USER).unwrap();

    for date in ["2024-05-03", "2024-05-01", "2024-05-04", "2024-05-02"] {
        store.upsert(&Entry::new(day(date))).unwrap();
    }

    let listed: Vec<String> = store
        .list_entries(3)
        .unwrap()
        .iter()
        .map(Entry::date_str)
        .collect();
    assert_eq!(listed, ["2024-05-04", "2024-05-03", "2024-05-02"]);

    assert!(matches!(store.list_entries(0), Err(AppError::InvalidLimit(0))));
}

#[test]
fn empty_history_is_an_empty_list() {
    let (url, _) = spawn_mock_backend();
    let store = HttpRecordStore::new(url, USER).unwrap();
    assert!(store.list_entries(60).unwrap().is_empty());
}

#[test]
fn error_status_surfaces_code_and_body() {
    let url = spawn_fixed_backend(500, "Internal error");
    let store = HttpRecordStore::new(url, USER).unwrap();

    match store.fetch_entry(day("2024-05-01")) {
        Err(AppError::StoreUnavailable { status, body }) => {
            assert_eq!(status, Some(500));
            assert_eq!(body, "Internal error");
        }
        other => panic!("expected StoreUnavailable, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_unavailable_not_a_panic() {
    let url = spawn_fixed_backend(200, "<html>login required</html>");
    let store = HttpRecordStore::new(url, USER).unwrap();

    let err = store.list_entries(15).unwrap_err();
    assert!(matches!(err, AppError::StoreUnavailable { status: Some(200), .. }));
    assert!(err.to_string().contains("login required"));
}

#[test]
fn ok_false_reply_carries_the_backend_message() {
    let url = spawn_fixed_backend(200, r#"{"ok":false,"error":"Sheet not found"}"#);
    let store = HttpRecordStore::new(url, USER).unwrap();

    let err = store.upsert(&sample_entry("2024-05-01")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Record store unavailable (backend error): Sheet not found"
    );
}

#[test]
fn unreachable_endpoint_is_unavailable() {
    let store = HttpRecordStore::new("http://127.0.0.1:1/exec", USER).unwrap();
    assert!(matches!(
        store.fetch_entry(day("2024-05-01")),
        Err(AppError::StoreUnavailable { status: None, .. })
    ));
}

#[test]
fn lenient_rows_from_the_sheet_are_normalised() {
    let url = spawn_fixed_backend(
        200,
        r#"{"ok":true,"entry":{"date":"2024-05-01T00:00:00.000Z","emotional_state":"6","physical_state":0,"growth":null,"task_1":null,"task_2":42,"rowNumber":"7"}}"#,
    );
    let store = HttpRecordStore::new(url, USER).unwrap();

    let e = store.fetch_entry(day("2024-05-01")).unwrap().unwrap();
    assert_eq!(e.date, day("2024-05-01"));
    assert_eq!(e.emotional_state, 6);
    assert_eq!(e.physical_state, 4);
    assert_eq!(e.growth, 4);
    assert_eq!(e.alignment, 4);
    assert_eq!(e.task_1, "");
    assert_eq!(e.task_2, "42");
    assert_eq!(e.row_number.map(|r| r.to_string()), Some("7".to_string()));
}

#[test]
fn empty_endpoint_is_a_config_error() {
    assert!(matches!(
        HttpRecordStore::new("  ", USER),
        Err(AppError::Config(_))
    ));
}

#[test]
fn resubmitting_a_day_updates_the_same_row() {
    let (url, backend) = spawn_mock_backend();
    let store = HttpRecordStore::new(url, "alice").unwrap();

    let mut entry = Entry::new(day("2024-05-01"));
    entry.emotional_state = 5;
    entry.physical_state = 4;
    entry.social_connectedness = 3;
    entry.accomplishment = 4;
    entry.growth = 5;
    entry.alignment = 4;
    entry.task_1 = "wrote spec".to_string();
    entry.task_2 = "reviewed PR".to_string();
    entry.task_3 = "walked".to_string();
    entry.proud_of = "shipped feature".to_string();

    assert!(!store.upsert(&entry).unwrap().was_update);

    entry.accomplishment = 6;
    assert!(store.upsert(&entry).unwrap().was_update);

    let fetched = store.fetch_entry(day("2024-05-01")).unwrap().unwrap();
    assert_eq!(fetched.accomplishment, 6);
    assert_eq!(fetched.proud_of, "shipped feature");
    assert_eq!(backend.len(), 1);
}

#[test]
fn list_is_reordered_and_trimmed_whatever_the_backend_sends() {
    let url = spawn_fixed_backend(
        200,
        r#"{"ok":true,"entries":[{"date":"2024-05-01"},{"date":"2024-05-03"},{"date":"2024-05-02"}]}"#,
    );
    let store = HttpRecordStore::new(url, USER).unwrap();

    let listed: Vec<String> = store
        .list_entries(2)
        .unwrap()
        .iter()
        .map(Entry::date_str)
        .collect();
    assert_eq!(listed, ["2024-05-03", "2024-05-02"]);
}

#[test]
fn missing_entries_field_is_an_empty_list() {
    let url = spawn_fixed_backend(200, r#"{"ok":true}"#);
    let store = HttpRecordStore::new(url, USER).unwrap();
    assert!(store.list_entries(15).unwrap().is_empty());
}
