//! Weighted directed graph with name-addressed nodes.
//!
//! Nodes are kept in insertion order and addressed by name; the position in
//! that order is the node's [`NodeId`] and indexes the adjacency matrices.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};

use super::dijkstra::{dijkstra, DistanceTable, ShortestPath};
use super::matrix::AdjacencyMatrix;
use super::types::{validate_weight, ArcInsertion, GraphArc, GraphSnapshot, NodeId};

/// A simple weighted directed graph.
///
/// At most one arc exists between any unordered pair of nodes: once
/// `a -> b` is present, neither a second `a -> b` nor the reverse `b -> a`
/// can be added. Nodes and arcs are never removed; names and weights can be
/// edited in place.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Node names in insertion order; position is the `NodeId`.
    names: Vec<String>,
    /// Secondary index: name -> NodeId.
    index: HashMap<String, NodeId>,
    /// Connection and weight matrices.
    matrix: AdjacencyMatrix,
}

impl WeightedGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Adds a node, returning its index.
    ///
    /// If a node with this name already exists its index is returned and the
    /// graph is left untouched.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.matrix.grow();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        debug!(node = name, id, "Added node");
        id
    }

    /// Renames a node in place. Its index and incident arcs are unchanged.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if `old_name` does not exist.
    /// - `Error::NodeExists` if `new_name` already names a different node.
    pub fn rename_node(&mut self, old_name: &str, new_name: &str) -> Result<NodeId> {
        let id = self.require(old_name)?;
        if old_name == new_name {
            return Ok(id);
        }
        if self.index.contains_key(new_name) {
            return Err(Error::NodeExists(new_name.to_string()));
        }

        self.index.remove(old_name);
        self.index.insert(new_name.to_string(), id);
        self.names[id] = new_name.to_string();
        debug!(from = old_name, to = new_name, id, "Renamed node");
        Ok(id)
    }

    /// Returns the index of a node by name.
    #[must_use]
    pub fn node_index(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Returns the name of a node by index.
    #[must_use]
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns true if a node with the given name exists.
    #[must_use]
    pub fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns all node names in index order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.names
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Arcs ───────────────────────────────────────────────────────────

    /// Adds an arc `origin -> destination`, creating missing endpoints.
    ///
    /// A failed call leaves the graph unchanged: endpoints are only created
    /// once every check has passed.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWeight` if the weight is negative, NaN or infinite.
    /// - `Error::SelfLoop` if origin and destination are the same node.
    /// - `Error::DuplicateArc` if the arc already exists.
    /// - `Error::ReverseArcExists` if `destination -> origin` exists.
    pub fn add_arc(
        &mut self,
        origin: &str,
        destination: &str,
        weight: f64,
    ) -> Result<ArcInsertion> {
        let weight = validate_weight(weight)?;
        if origin == destination {
            return Err(Error::SelfLoop(origin.to_string()));
        }

        if let (Some(i), Some(j)) = (self.node_index(origin), self.node_index(destination)) {
            if self.matrix.is_connected(i, j) {
                return Err(Error::DuplicateArc {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                });
            }
            if self.matrix.is_connected(j, i) {
                return Err(Error::ReverseArcExists {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                });
            }
        }

        let mut created = Vec::new();
        for name in [origin, destination] {
            if !self.contains_node(name) {
                info!(node = name, "Node does not exist, adding it automatically");
                self.add_node(name);
                created.push(name.to_string());
            }
        }

        let i = self.require(origin)?;
        let j = self.require(destination)?;
        self.matrix.connect(i, j, weight);
        debug!(origin, destination, weight, "Added arc");

        Ok(ArcInsertion {
            origin: i,
            destination: j,
            created,
        })
    }

    /// Overwrites the weight of an existing arc, returning the previous weight.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if either endpoint does not exist.
    /// - `Error::ArcNotFound` if there is no arc `origin -> destination`.
    /// - `Error::InvalidWeight` if the new weight is negative, NaN or infinite.
    pub fn set_arc_weight(&mut self, origin: &str, destination: &str, weight: f64) -> Result<f64> {
        let i = self.require(origin)?;
        let j = self.require(destination)?;
        if !self.matrix.is_connected(i, j) {
            return Err(Error::ArcNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }
        let weight = validate_weight(weight).inspect_err(|_| {
            warn!(origin, destination, weight, "Rejected arc weight update");
        })?;

        let previous = self.matrix.set_weight(i, j, weight);
        debug!(origin, destination, previous, weight, "Updated arc weight");
        Ok(previous)
    }

    /// Returns the weight of the arc `origin -> destination`, if present.
    #[must_use]
    pub fn arc_weight(&self, origin: &str, destination: &str) -> Option<f64> {
        let i = self.node_index(origin)?;
        let j = self.node_index(destination)?;
        self.matrix
            .is_connected(i, j)
            .then(|| self.matrix.weight(i, j))
    }

    /// Returns true if there is an arc between the two indices.
    #[must_use]
    pub fn is_connected(&self, origin: NodeId, destination: NodeId) -> bool {
        self.matrix.is_connected(origin, destination)
    }

    /// Returns the weight matrix cell between the two indices.
    #[must_use]
    pub fn weight(&self, origin: NodeId, destination: NodeId) -> f64 {
        self.matrix.weight(origin, destination)
    }

    /// Returns `(destination, weight)` for every arc leaving `id`, by
    /// ascending destination index.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Vec<(NodeId, f64)> {
        self.matrix.successors(id).collect()
    }

    /// Returns all arcs ordered by origin, then destination index.
    #[must_use]
    pub fn arcs(&self) -> Vec<GraphArc> {
        (0..self.node_count())
            .flat_map(|i| {
                self.matrix
                    .successors(i)
                    .filter_map(move |(j, w)| GraphArc::new(i, j, w).ok())
            })
            .collect()
    }

    /// Returns the total number of arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.matrix.arc_count()
    }

    /// Borrows the underlying adjacency matrices.
    #[must_use]
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Exports node names and both matrices for display.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(
            self.names.clone(),
            self.matrix.connections().to_vec(),
            self.matrix
                .weights()
                .iter()
                .map(|row| row.iter().map(|&w| w.is_finite().then_some(w)).collect())
                .collect(),
        )
    }

    /// Computes the shortest path between two nodes with Dijkstra's algorithm.
    ///
    /// # Errors
    ///
    /// - `Error::NodeNotFound` if either endpoint does not exist.
    /// - `Error::NoPath` if `destination` is unreachable from `origin`.
    pub fn shortest_path(&self, origin: &str, destination: &str) -> Result<ShortestPath> {
        let source = self.require(origin)?;
        let target = self.require(destination)?;

        let table = dijkstra(self, source);
        let indices = table.path_to(target).ok_or_else(|| Error::NoPath {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })?;

        Ok(ShortestPath {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance: table.distance(target),
            nodes: indices.iter().map(|&id| self.names[id].clone()).collect(),
            indices,
        })
    }

    /// Runs Dijkstra from `origin` and returns the distance to every node.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` if `origin` does not exist.
    pub fn shortest_distances(&self, origin: &str) -> Result<DistanceTable> {
        let source = self.require(origin)?;
        Ok(dijkstra(self, source))
    }

    fn require(&self, name: &str) -> Result<NodeId> {
        self.node_index(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }
}
