//! In-memory weighted directed graph and shortest-path search.
//!
//! Provides the graph store, its adjacency matrices, Dijkstra's algorithm
//! with path reconstruction, and text rendering helpers.
//!
//! # Example
//!
//! ```rust
//! use graphpath_core::graph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_arc("A", "B", 1.0).unwrap();
//! graph.add_arc("B", "C", 2.0).unwrap();
//! graph.add_arc("A", "C", 5.0).unwrap();
//!
//! let path = graph.shortest_path("A", "C").unwrap();
//! assert_eq!(path.distance, 3.0);
//! assert_eq!(path.nodes, vec!["A", "B", "C"]);
//! ```

pub mod dijkstra;
mod matrix;
pub mod render;
mod store;
mod types;

#[cfg(test)]
mod dijkstra_tests;

pub use dijkstra::{dijkstra, path_weight, DistanceTable, ShortestPath, WeightedAdjacency};
pub use matrix::AdjacencyMatrix;
pub use store::WeightedGraph;
pub use types::{validate_weight, ArcInsertion, GraphArc, GraphSnapshot, NodeId};
