//! Prometheus metrics handler for the flowgate REST API.
//!
//! Provides a `/metrics` endpoint for Prometheus scraping.
//!
//! Metrics exposed:
//! - `flowgate_info`: Server version info
//! - `flowgate_up`: Server liveness gauge
//! - `flowgate_validations_total`: Pipeline validations served since startup

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::fmt::Write;
use std::sync::Arc;

use crate::AppState;

/// Prometheus text format metrics response.
///
/// Returns metrics in Prometheus exposition format.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Prometheus metrics", content_type = "text/plain")
    )
)]
pub async fn prometheus_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut output = String::new();

    writeln!(output, "# HELP flowgate_info Flowgate server information").unwrap();
    writeln!(output, "# TYPE flowgate_info gauge").unwrap();
    writeln!(
        output,
        "flowgate_info{{version=\"{}\"}} 1",
        env!("CARGO_PKG_VERSION")
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "# HELP flowgate_up Flowgate server is up and running").unwrap();
    writeln!(output, "# TYPE flowgate_up gauge").unwrap();
    writeln!(output, "flowgate_up 1").unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "# HELP flowgate_validations_total Pipeline validations served since startup"
    )
    .unwrap();
    writeln!(output, "# TYPE flowgate_validations_total counter").unwrap();
    writeln!(
        output,
        "flowgate_validations_total {}",
        state.validations_served()
    )
    .unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        output,
    )
}
