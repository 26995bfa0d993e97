#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, http::StatusCode};
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc;
use wjournal::models::Entry;
use wjournal::store::{MemoryRecordStore, RecordStore};

pub const USER: &str = "me";
pub const PASSWORD: &str = "correct horse";

/// The binary, isolated from the real user: HOME points at `home`
/// and no ambient settings leak in.
pub fn wj(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wjournal");
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("WJ_ENDPOINT")
        .env_remove("WJ_USERNAME")
        .env_remove("WJ_PASSWORD")
        .env_remove("WJ_SESSION_HOURS")
        .env_remove("WJ_GATEWAY_TARGET")
        .env_remove("WJ_GATEWAY_BIND");
    cmd
}

/// Like [`wj`], with credentials and the record store endpoint set.
pub fn wj_with(home: &Path, endpoint: &str) -> Command {
    let mut cmd = wj(home);
    cmd.env("WJ_ENDPOINT", endpoint)
        .env("WJ_USERNAME", USER)
        .env("WJ_PASSWORD", PASSWORD);
    cmd
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn sample_entry(date: &str) -> Entry {
    let mut e = Entry::new(day(date));
    e.emotional_state = 6;
    e.physical_state = 5;
    e.task_1 = "Finished the quarterly report".to_string();
    e.proud_of = "Went for a run before work".to_string();
    e
}

/// Serve `app` on 127.0.0.1 from a dedicated thread with its own runtime.
/// Works from plain `#[test]`s (blocking clients) and from `#[tokio::test]`s.
pub fn spawn_server(app: Router) -> SocketAddr {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind");
            tx.send(listener.local_addr().expect("addr")).expect("send addr");
            axum::serve(listener, app).await.expect("serve");
        });
    });
    rx.recv().expect("server address")
}

/// A backend speaking the record store protocol, kept in memory.
/// Returns the endpoint URL and the store behind it.
pub fn spawn_mock_backend() -> (String, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let app = Router::new()
        .route("/exec", get(mock_get).post(mock_post))
        .with_state(store.clone());
    let addr = spawn_server(app);
    (format!("http://{addr}/exec"), store)
}

/// A backend that answers every request with `status` and `body`.
pub fn spawn_fixed_backend(status: u16, body: &'static str) -> String {
    let status = StatusCode::from_u16(status).expect("status");
    let app = Router::new().fallback(move || async move { (status, body) });
    let addr = spawn_server(app);
    format!("http://{addr}/exec")
}

async fn mock_get(
    State(store): State<Arc<MemoryRecordStore>>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Value> {
    if q.get("action").map(String::as_str) == Some("list") {
        let limit = q.get("limit").and_then(|l| l.parse().ok()).unwrap_or(60);
        return match store.list_entries(limit) {
            Ok(entries) => Json(json!({ "ok": true, "entries": entries })),
            Err(e) => Json(json!({ "ok": false, "error": e.to_string() })),
        };
    }

    let Some(date) = q.get("date").map(|d| day(d)) else {
        return Json(json!({ "ok": false, "error": "missing date" }));
    };
    match store.fetch_entry(date) {
        Ok(entry) => Json(json!({ "ok": true, "entry": entry })),
        Err(e) => Json(json!({ "ok": false, "error": e.to_string() })),
    }
}

async fn mock_post(
    State(store): State<Arc<MemoryRecordStore>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let entry: Entry = match serde_json::from_value(body) {
        Ok(e) => e,
        Err(e) => return Json(json!({ "ok": false, "error": e.to_string() })),
    };
    match store.upsert(&entry) {
        Ok(outcome) => Json(json!({
            "ok": true,
            "rowNumber": outcome.row_number,
            "updated": outcome.was_update,
        })),
        Err(e) => Json(json!({ "ok": false, "error": e.to_string() })),
    }
}
