//! # Flowgate Server
//!
//! REST API for pipeline graph validation, a thin HTTP layer over
//! [`flowgate-core`](flowgate_core) with zero reimplemented graph logic.
//!
//! ## Endpoints
//!
//! - `POST /pipelines/parse`: count nodes and edges, report acyclicity
//! - `GET /health`: liveness probe
//! - `GET /metrics`: Prometheus exposition (behind the `prometheus` feature)
//! - `/swagger-ui`: interactive API docs (behind the `swagger-ui` feature)

#![warn(missing_docs)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use flowgate_core::{FlowgateConfig, ServerConfig};

pub mod handlers;
pub mod types;

pub use handlers::{health_check, parse_pipeline};
#[cfg(feature = "prometheus")]
pub use handlers::prometheus_metrics;

/// Shared application state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// Runtime configuration the router was built from.
    pub config: FlowgateConfig,
    validations: AtomicU64,
}

impl AppState {
    /// Create state from a loaded configuration.
    #[must_use]
    pub fn new(config: FlowgateConfig) -> Self {
        Self {
            config,
            validations: AtomicU64::new(0),
        }
    }

    /// Count one served validation.
    pub fn record_validation(&self) {
        self.validations.fetch_add(1, Ordering::Relaxed);
    }

    /// Validations served since startup.
    #[must_use]
    pub fn validations_served(&self) -> u64 {
        self.validations.load(Ordering::Relaxed)
    }
}

/// OpenAPI documentation for the flowgate REST API.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health::health_check, handlers::pipelines::parse_pipeline),
    components(schemas(
        types::NodeDescriptor,
        types::EdgeDescriptor,
        types::ParsePipelineRequest,
        types::ParsePipelineResponse,
        types::HealthResponse,
        types::ErrorResponse,
    )),
    tags(
        (name = "pipelines", description = "Pipeline graph validation"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Build the application router from shared state.
///
/// Routes, body limit, and CORS policy all come from `state.config`,
/// so integration tests and `main` assemble the exact same app. The
/// HTTP trace layer is left to `main`; tests stay quiet without it.
#[must_use]
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server);

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/pipelines/parse", post(parse_pipeline));

    #[cfg(feature = "prometheus")]
    let router = router.route("/metrics", get(prometheus_metrics));

    router
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(cors)
}

/// Build the CORS layer from server configuration.
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.cors_origins.is_empty() {
        tracing::warn!(
            "CORS: permissive (dev mode). Set server.cors_origins to restrict origins."
        );
        CorsLayer::permissive()
    } else {
        use tower_http::cors::AllowOrigin;
        let origin_list: Vec<_> = server
            .cors_origins
            .iter()
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origin_list))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_counts_validations() {
        let state = AppState::new(FlowgateConfig::default());
        assert_eq!(state.validations_served(), 0);
        state.record_validation();
        state.record_validation();
        assert_eq!(state.validations_served(), 2);
    }

    #[test]
    fn test_openapi_lists_public_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/pipelines/parse"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
