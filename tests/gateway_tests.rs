mod common;

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE};
use common::{USER, day, sample_entry, spawn_mock_backend, spawn_server};
use serde_json::{Value, json};
use wjournal::gateway;
use wjournal::store::{HttpRecordStore, RecordStore};

/// Backend that describes the request it received. `?fail=1` answers 500.
fn spawn_echo_backend() -> String {
    let app = Router::new().fallback(
        |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| async move {
            let query = uri.query().unwrap_or("").to_string();
            let status = if query.contains("fail=1") {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::OK
            };
            let content_type = headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            let described = json!({
                "method": method.as_str(),
                "path": uri.path(),
                "query": query,
                "content_type": content_type,
                "body": String::from_utf8_lossy(&body),
            });
            (status, described.to_string())
        },
    );
    format!("http://{}/exec", spawn_server(app))
}

async fn start_gateway(target: &str) -> String {
    let addr = gateway::spawn("127.0.0.1:0", target).await.unwrap();
    format!("http://{addr}")
}

fn assert_gateway_headers(resp: &reqwest::Response) {
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert_eq!(resp.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn get_query_is_forwarded_unchanged() {
    let gw = start_gateway(&spawn_echo_backend()).await;

    let resp = reqwest::get(format!("{gw}/anything?date=2024-05-01&username=me"))
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_gateway_headers(&resp);
    let seen: Value = resp.json().await.unwrap();
    assert_eq!(seen["method"], "GET");
    assert_eq!(seen["path"], "/exec");
    assert_eq!(seen["query"], "date=2024-05-01&username=me");
}

#[tokio::test]
async fn post_body_is_forwarded_as_json() {
    let gw = start_gateway(&spawn_echo_backend()).await;
    let payload = r#"{"date":"2024-05-01","username":"me"}"#;

    let resp = reqwest::Client::new()
        .post(&gw)
        .header(CONTENT_TYPE, "text/plain")
        .body(payload)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let seen: Value = resp.json().await.unwrap();
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["body"], payload);
    assert_eq!(seen["content_type"], "application/json");
}

#[tokio::test]
async fn get_body_is_not_forwarded() {
    let gw = start_gateway(&spawn_echo_backend()).await;

    let resp = reqwest::Client::new()
        .get(&gw)
        .body("ignored")
        .send()
        .await
        .unwrap();

    let seen: Value = resp.json().await.unwrap();
    assert_eq!(seen["body"], "");
}

#[tokio::test]
async fn backend_errors_pass_through_with_cors() {
    let gw = start_gateway(&spawn_echo_backend()).await;

    let resp = reqwest::get(format!("{gw}/?fail=1")).await.unwrap();

    assert_eq!(resp.status(), 500);
    assert_gateway_headers(&resp);
    let seen: Value = resp.json().await.unwrap();
    assert_eq!(seen["query"], "fail=1");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let gw = start_gateway("http://127.0.0.1:1/exec").await;

    let resp = reqwest::get(format!("{gw}/?date=2024-05-01")).await.unwrap();

    assert_eq!(resp.status(), 502);
    assert_gateway_headers(&resp);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn empty_target_is_rejected() {
    assert!(gateway::spawn("127.0.0.1:0", "").await.is_err());
}

#[test]
fn record_store_works_through_the_gateway() {
    let (backend, _) = spawn_mock_backend();

    // The gateway needs a runtime of its own; the adapter below is blocking.
    let rt = tokio::runtime::Runtime::new().unwrap();
    let addr = rt
        .block_on(gateway::spawn("127.0.0.1:0", backend))
        .unwrap();
    let store = HttpRecordStore::new(format!("http://{addr}/"), USER).unwrap();

    let outcome = store.upsert(&sample_entry("2024-05-01")).unwrap();
    assert!(!outcome.was_update);

    let fetched = store.fetch_entry(day("2024-05-01")).unwrap().unwrap();
    assert_eq!(fetched.emotional_state, 6);
    assert_eq!(store.list_entries(15).unwrap().len(), 1);
}

#[tokio::test]
async fn backend_500_is_relayed_verbatim() {
    let backend = common::spawn_fixed_backend(500, "internal error");
    let gw = start_gateway(&backend).await;

    let resp = reqwest::get(format!("{gw}/?date=2024-05-01&username=alice"))
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert_gateway_headers(&resp);
    assert_eq!(resp.text().await.unwrap(), "internal error");
}
