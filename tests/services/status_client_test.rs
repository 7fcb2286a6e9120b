use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::time::Duration;

use super::mock_server;
use crate::common::ADDRESS;
use validator_monitor::services::status::{FetchError, HttpStatusSource, StatusSource};

fn summaries() -> Value {
    json!([
        {
            "validator": "0x1111111111111111",
            "name": "Other",
            "isJailed": false,
            "isActive": true,
            "commission": "0.1",
            "unjailableAfter": null
        },
        {
            "validator": ADDRESS.to_uppercase().replace("0X", "0x"),
            "name": "Alpha",
            "isJailed": true,
            "isActive": false,
            "commission": "0.05",
            "unjailableAfter": 1700000000000i64
        }
    ])
}

async fn summaries_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body != json!({ "type": "validatorSummaries" }) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad query" })));
    }
    (StatusCode::OK, Json(summaries()))
}

fn client(base: &str) -> HttpStatusSource {
    HttpStatusSource::new(format!("{}/info", base), Duration::from_secs(2))
}

#[tokio::test]
async fn test_fetch_matches_address_case_insensitively() {
    let base = mock_server::spawn(Router::new().route("/info", post(summaries_handler))).await;

    let status = client(&base).fetch(&ADDRESS.to_lowercase()).await.unwrap();

    assert_eq!(status.name, "Alpha");
    assert!(status.is_jailed);
    assert!(!status.is_active);
    assert_eq!(status.commission, "0.05");
    assert_eq!(status.unjailable_after, Some(1_700_000_000_000));
}

#[tokio::test]
async fn test_fetch_all_returns_every_entry() {
    let base = mock_server::spawn(Router::new().route("/info", post(summaries_handler))).await;

    let all = client(&base).fetch_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_fetch_unknown_address() {
    let base = mock_server::spawn(Router::new().route("/info", post(summaries_handler))).await;

    let err = client(&base).fetch("0xdeadbeef").await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound { total: 2, .. }));
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let app = Router::new().route(
        "/info",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream down") }),
    );
    let base = mock_server::spawn(app).await;

    let err = client(&base).fetch(ADDRESS).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let app = Router::new().route("/info", post(|| async { "definitely not json" }));
    let base = mock_server::spawn(app).await;

    let err = client(&base).fetch(ADDRESS).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_times_out() {
    let app = Router::new().route(
        "/info",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(summaries())
        }),
    );
    let base = mock_server::spawn(app).await;

    let source = HttpStatusSource::new(format!("{}/info", base), Duration::from_millis(200));
    let err = source.fetch(ADDRESS).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let base = mock_server::closed_address().await;

    let err = client(&base).fetch(ADDRESS).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
