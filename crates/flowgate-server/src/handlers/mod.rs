//! HTTP handlers for the flowgate REST API.
//!
//! This module organizes handlers by domain:
//! - `health`: Health check endpoint
//! - `pipelines`: Pipeline graph validation
//! - `metrics`: Prometheus metrics (behind the `prometheus` feature)

pub mod health;
mod helpers;
#[cfg(feature = "prometheus")]
pub mod metrics;
pub mod pipelines;

pub use health::health_check;
#[cfg(feature = "prometheus")]
pub use metrics::prometheus_metrics;
pub use pipelines::parse_pipeline;
