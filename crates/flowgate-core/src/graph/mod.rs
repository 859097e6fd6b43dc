//! Pipeline graph model and acyclicity validation.
//!
//! A pipeline graph arrives as a list of node identifiers plus a list of
//! directed edges. Validation answers one question: can this graph execute
//! as a pipeline, i.e. is it free of directed cycles?
//!
//! # Example
//!
//! ```rust
//! use flowgate_core::graph::{is_acyclic, topological_order, Edge};
//!
//! let nodes = vec!["load".to_string(), "clean".to_string(), "train".to_string()];
//! let edges = vec![Edge::new("load", "clean"), Edge::new("clean", "train")];
//!
//! assert!(is_acyclic(&nodes, &edges));
//! assert_eq!(topological_order(&nodes, &edges).unwrap(), vec!["load", "clean", "train"]);
//! ```

mod adjacency;
mod types;
mod validate;

#[cfg(test)]
mod validate_tests;

pub use adjacency::AdjacencyIndex;
pub use types::Edge;
pub use validate::{is_acyclic, topological_order, validate, ValidationReport};
