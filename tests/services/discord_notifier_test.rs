use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use super::mock_server;
use validator_monitor::services::notifier::{DeliveryError, DiscordNotifier, NotificationSink};

type Captured = Arc<Mutex<Vec<Value>>>;

async fn capture(State(store): State<Captured>, Json(body): Json<Value>) -> StatusCode {
    store.lock().unwrap().push(body);
    StatusCode::NO_CONTENT
}

#[tokio::test]
async fn test_notify_posts_content_field() {
    let store: Captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/hook", post(capture))
        .with_state(store.clone());
    let base = mock_server::spawn(app).await;

    let notifier = DiscordNotifier::new(format!("{}/hook", base));
    notifier.notify("🚨 Validator Alpha is JAILED").await.unwrap();

    let bodies = store.lock().unwrap().clone();
    assert_eq!(bodies, vec![json!({ "content": "🚨 Validator Alpha is JAILED" })]);
}

#[tokio::test]
async fn test_notify_accepts_200() {
    let app = Router::new().route("/hook", post(|| async { StatusCode::OK }));
    let base = mock_server::spawn(app).await;

    let notifier = DiscordNotifier::new(format!("{}/hook", base));
    assert!(notifier.notify("hello").await.is_ok());
}

#[tokio::test]
async fn test_notify_rejected_status() {
    let app = Router::new().route("/hook", post(|| async { StatusCode::TOO_MANY_REQUESTS }));
    let base = mock_server::spawn(app).await;

    let notifier = DiscordNotifier::new(format!("{}/hook", base));
    let err = notifier.notify("hello").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Status(429)));
}

#[tokio::test]
async fn test_notify_unreachable_webhook() {
    let base = mock_server::closed_address().await;

    let notifier = DiscordNotifier::new(format!("{}/hook", base));
    let err = notifier.notify("hello").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Network(_)));
}
