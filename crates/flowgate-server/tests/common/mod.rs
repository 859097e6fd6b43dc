//! Shared helpers for flowgate-server integration tests.

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use serde_json::Value;

use flowgate_core::FlowgateConfig;
use flowgate_server::{build_router, AppState};

/// Build the full application router with default configuration.
pub fn create_test_app() -> Router {
    create_test_app_with(FlowgateConfig::default())
}

/// Build the full application router from a custom configuration.
pub fn create_test_app_with(config: FlowgateConfig) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

/// Build a `POST /pipelines/parse` request carrying a JSON body.
pub fn parse_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/pipelines/parse")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}
