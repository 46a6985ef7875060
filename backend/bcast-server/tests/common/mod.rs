#![allow(dead_code)]

//! Test infrastructure for bcast-server router tests

use bcast_auth::{OperatorAllowList, WebhookSecret};
use bcast_core::{Notifier, RecipientDirectory, Transport};
use bcast_db::{RecipientRepository, run_migrations};
use bcast_engine::{DispatchConfig, DispatchMetrics, Dispatcher, SessionManager};
use bcast_server::{AppState, ShutdownCoordinator};
use bcast_telegram::TelegramClient;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TOKEN: &str = "test-token";
pub const OPERATOR: i64 = 1000;
pub const STRANGER: i64 = 4242;
pub const SECRET: &str = "s3cret";
pub const WEB_APP_URL: &str = "https://shop.example.com";

/// Create a migrated in-memory recipient directory
pub async fn create_test_repository() -> RecipientRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    RecipientRepository::new(pool)
}

/// Bot API double: answerCallbackQuery returns `true`, every other method a sent message.
pub async fn start_bot_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/answerCallbackQuery")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": true })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {
                "message_id": 1,
                "chat": { "id": OPERATOR, "type": "private" },
                "date": 1_700_000_000
            }
        })))
        .mount(&server)
        .await;

    server
}

pub struct TestApp {
    pub state: AppState,
    pub bot_api: MockServer,
}

/// Create AppState wired to an in-memory directory and a mocked Bot API
pub async fn create_test_app() -> TestApp {
    let bot_api = start_bot_api().await;
    let recipients = create_test_repository().await;
    let state = build_state(&bot_api, recipients);

    TestApp { state, bot_api }
}

pub fn build_state(bot_api: &MockServer, recipients: RecipientRepository) -> AppState {
    let client = TelegramClient::new(&bot_api.uri(), TOKEN, Duration::from_secs(5))
        .expect("Failed to build Bot API client");

    let metrics = DispatchMetrics::new();
    let transport: Arc<dyn Transport> = Arc::new(client.clone());
    let notifier: Arc<dyn Notifier> = Arc::new(client.clone());
    let directory: Arc<dyn RecipientDirectory> = Arc::new(recipients.clone());
    let dispatcher = Arc::new(Dispatcher::new(
        transport,
        Arc::clone(&notifier),
        DispatchConfig {
            min_interval: Duration::ZERO,
            progress_every: 10,
        },
        metrics.clone(),
    ));
    let sessions = SessionManager::new(
        OperatorAllowList::new([OPERATOR]),
        directory,
        dispatcher,
        notifier,
        metrics,
    );

    AppState {
        sessions,
        recipients,
        client,
        webhook_secret: WebhookSecret::new(Some(SECRET)),
        webhook_path: String::from("/webhook"),
        web_app_url: Some(String::from(WEB_APP_URL)),
        shutdown: ShutdownCoordinator::new(),
    }
}

pub fn webhook_request(update: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .header(bcast_auth::WEBHOOK_SECRET_HEADER, SECRET)
        .body(Body::from(update.to_string()))
        .unwrap()
}

pub fn message_update(update_id: i64, from: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "from": { "id": from, "is_bot": false, "first_name": "Test", "username": format!("user{from}") },
            "chat": { "id": from, "type": "private" },
            "date": 1_700_000_000,
            "text": text
        }
    })
}

pub fn callback_update(update_id: i64, from: i64, data: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cb{update_id}"),
            "from": { "id": from, "is_bot": false, "first_name": "Test" },
            "message": {
                "message_id": 99,
                "chat": { "id": from, "type": "private" },
                "date": 1_700_000_000
            },
            "data": data
        }
    })
}

/// JSON bodies the Bot API double received for one method, in arrival order.
pub async fn sent_bodies(bot_api: &MockServer, api_method: &str) -> Vec<Value> {
    let suffix = format!("/{api_method}");
    bot_api
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path().ends_with(&suffix))
        .map(|request| request.body_json::<Value>().unwrap())
        .collect()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Poll until `condition` holds or a second has passed.
pub async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
