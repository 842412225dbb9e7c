//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use futurama::app::{App, AppMessage};
use futurama::config::AppConfig;
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer};

/// Upper bound for any single fetch in these tests
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

pub fn fry() -> Value {
    json!({
        "id": 1,
        "name": "Fry",
        "gender": "Male",
        "status": "Alive",
        "species": "Human",
        "image": "https://futuramaapi.com/static/img/human/philip-j-fry.webp"
    })
}

pub fn character(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "gender": "Female",
        "status": "Alive",
        "species": "Human",
        "image": format!("https://example.test/{}.webp", id)
    })
}

pub fn page(items: Vec<Value>) -> Value {
    let total = items.len();
    json!({ "items": items, "total": total, "page": 1, "size": 50, "pages": 1 })
}

/// `GET /api/characters` with the fixed query.
pub fn characters_request() -> MockBuilder {
    Mock::given(method("GET"))
        .and(path("/api/characters"))
        .and(query_param("orderBy", "id"))
        .and(query_param("orderByDirection", "asc"))
        .and(query_param("page", "1"))
        .and(query_param("size", "50"))
}

pub fn config_for(server: &MockServer) -> AppConfig {
    AppConfig::default()
        .with_base_url(server.uri())
        .with_request_timeout(Duration::from_secs(2))
}

/// Base URL of a local port nothing listens on.
///
/// The OS picks a free port for a listener that is closed right away.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// An unmounted app pointed at `server`, with its outcome receiver.
pub fn app_for(server: &MockServer) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::from_config(&config_for(server));
    let rx = app
        .message_rx
        .take()
        .expect("fresh app owns its receiver");
    (app, rx)
}

/// Apply the next fetch outcome.
pub async fn settle_one(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) {
    let msg = tokio::time::timeout(SETTLE_TIMEOUT, rx.recv())
        .await
        .expect("fetch settles in time")
        .expect("channel open");
    app.handle_message(msg);
}

/// Wait until the server has seen `n` requests.
pub async fn wait_for_requests(server: &MockServer, n: usize) {
    let deadline = tokio::time::Instant::now() + SETTLE_TIMEOUT;
    loop {
        let seen = server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0);
        if seen >= n {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "server saw {} of {} requests",
            seen,
            n
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
