//! # GraphPath Core
//!
//! Weighted directed graphs with Dijkstra shortest paths.
//!
//! A [`WeightedGraph`] stores named nodes in insertion order together with a
//! connection matrix and a weight matrix. Arcs are directed, carry a finite
//! non-negative weight, and at most one direction may exist between any two
//! nodes. Shortest paths are computed with a lazy-deletion Dijkstra search.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphpath_core::{Error, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! let inserted = graph.add_arc("home", "work", 4.0).unwrap();
//! assert_eq!(inserted.created, vec!["home", "work"]);
//!
//! // The reverse direction is rejected once one direction exists.
//! let err = graph.add_arc("work", "home", 4.0).unwrap_err();
//! assert!(matches!(err, Error::ReverseArcExists { .. }));
//!
//! let path = graph.shortest_path("home", "work").unwrap();
//! assert_eq!(path.distance, 4.0);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::uninlined_format_args))]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;

pub use config::{DisplayConfig, GraphPathConfig, OutputFormat};
pub use error::{Error, Result};
pub use graph::{DistanceTable, GraphArc, GraphSnapshot, NodeId, ShortestPath, WeightedGraph};
