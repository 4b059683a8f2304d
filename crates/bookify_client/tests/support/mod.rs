//! Mock routes for the external booking API.
//!
//! Each helper mounts one route on a `MockServer` with the shapes and
//! statuses observed against the live service.

use bookify_client::models::BookingRecord;
use serde_json::json;
use std::sync::Once;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token the mock auth endpoint hands out and the mutating routes require.
pub const TOKEN: &str = "abc123";

static TRACING: Once = Once::new();

/// Installs a subscriber honoring RUST_LOG so client debug lines show up
/// when a scenario is run with `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn token_cookie() -> String {
    format!("token={TOKEN}")
}

pub async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": TOKEN })))
        .mount(server)
        .await;
}

/// Bad credentials come back as a 200 with a `reason` body, token absent.
pub async fn mount_auth_rejecting(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reason": "Bad credentials" })))
        .mount(server)
        .await;
}

pub async fn mount_create(server: &MockServer, id: i64, record: &BookingRecord) {
    Mock::given(method("POST"))
        .and(path("/booking"))
        .and(body_json(record))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bookingid": id,
            "booking": record,
        })))
        .mount(server)
        .await;
}

pub async fn mount_get(server: &MockServer, id: i64, record: &BookingRecord) {
    Mock::given(method("GET"))
        .and(path(format!("/booking/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(server)
        .await;
}

pub async fn mount_get_missing(server: &MockServer, id: i64) {
    Mock::given(method("GET"))
        .and(path(format!("/booking/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(server)
        .await;
}

pub async fn mount_update(server: &MockServer, id: i64, record: &BookingRecord) {
    Mock::given(method("PUT"))
        .and(path(format!("/booking/{id}")))
        .and(header("Cookie", token_cookie()))
        .and(body_json(record))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(server)
        .await;
}

/// The live API answers 201 on delete, not the documented 200.
pub async fn mount_delete(server: &MockServer, id: i64) {
    Mock::given(method("DELETE"))
        .and(path(format!("/booking/{id}")))
        .and(header("Cookie", token_cookie()))
        .respond_with(ResponseTemplate::new(201).set_body_string("Created"))
        .mount(server)
        .await;
}
