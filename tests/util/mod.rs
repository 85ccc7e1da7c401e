//! Helpers shared by the integration tests.

use airdesk::server::{model::app::AppState, service::resource::payload::Payload};
use airdesk_test_utils::{fixtures::factory, TestContext};
use axum::{body::to_bytes, response::Response};
use serde_json::Value;

/// Extension trait for TestContext to create the handler state
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Wraps a JSON object built by the payload factories into a request payload
pub fn payload(value: Value) -> Payload {
    Payload::from(factory::as_object(value))
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
