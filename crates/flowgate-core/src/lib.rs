//! # Flowgate Core
//!
//! Graph model and acyclicity validation engine for pipeline graphs.
//!
//! A pipeline editor submits its canvas as node identifiers plus directed
//! edges; flowgate answers whether that graph can run as a pipeline, i.e.
//! whether it is a DAG. This crate holds the validation engine and the
//! service configuration; the HTTP surface lives in `flowgate-server`.
//!
//! ## Features
//!
//! - **Kahn's algorithm**: O(V + E), iterative, no recursion depth to exhaust
//! - **Tolerant input model**: duplicate identifiers collapse, dangling edges are ignored
//! - **Request-scoped indexes**: validation borrows the caller's data, no shared state
//! - **Layered configuration**: defaults, TOML file, `FLOWGATE_` environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use flowgate_core::graph::{validate, Edge};
//!
//! let nodes = vec!["ingest".to_string(), "train".to_string(), "deploy".to_string()];
//! let edges = vec![Edge::new("ingest", "train"), Edge::new("train", "deploy")];
//!
//! let report = validate(&nodes, &edges);
//! assert_eq!(report.num_nodes, 3);
//! assert_eq!(report.num_edges, 2);
//! assert!(report.is_dag);
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod graph;

pub use config::{ConfigError, FlowgateConfig, LimitsConfig, LoggingConfig, ServerConfig};
pub use graph::{is_acyclic, topological_order, validate, AdjacencyIndex, Edge, ValidationReport};
