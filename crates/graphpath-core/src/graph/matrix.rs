//! Connection and weight matrices backing [`WeightedGraph`](super::WeightedGraph).
//!
//! Rows and columns are indexed by [`NodeId`]. The matrices only ever grow:
//! [`AdjacencyMatrix::grow`] copies every existing cell into a matrix one
//! row and one column larger, so indices stay stable for the life of a graph.

use super::types::NodeId;

/// Paired boolean connection matrix and `f64` weight matrix.
///
/// Invariant: for `i != j`, `connected(i, j)` holds iff `weight(i, j)` is
/// finite. The diagonal weight is always `0.0` and never connected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyMatrix {
    connections: Vec<Vec<bool>>,
    weights: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    /// Creates an empty 0x0 matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rows (equal to the number of columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.connections.len()
    }

    /// Resizes both matrices to `(n + 1) x (n + 1)`, copying all existing
    /// cells, and returns the index of the new row/column.
    pub fn grow(&mut self) -> NodeId {
        let old = self.dimension();
        let new = old + 1;

        let mut connections = vec![vec![false; new]; new];
        let mut weights = vec![vec![f64::INFINITY; new]; new];
        for (i, (conn_row, weight_row)) in self.connections.iter().zip(&self.weights).enumerate() {
            connections[i][..old].copy_from_slice(conn_row);
            weights[i][..old].copy_from_slice(weight_row);
        }
        weights[old][old] = 0.0;

        self.connections = connections;
        self.weights = weights;
        old
    }

    /// Returns true if there is an arc `origin -> destination`.
    #[must_use]
    pub fn is_connected(&self, origin: NodeId, destination: NodeId) -> bool {
        self.connections
            .get(origin)
            .and_then(|row| row.get(destination))
            .copied()
            .unwrap_or(false)
    }

    /// Returns the weight cell `origin -> destination`.
    ///
    /// `0.0` on the diagonal, `f64::INFINITY` where there is no arc or the
    /// indices are out of range.
    #[must_use]
    pub fn weight(&self, origin: NodeId, destination: NodeId) -> f64 {
        self.weights
            .get(origin)
            .and_then(|row| row.get(destination))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Marks `origin -> destination` as connected with the given weight.
    pub(crate) fn connect(&mut self, origin: NodeId, destination: NodeId, weight: f64) {
        self.connections[origin][destination] = true;
        self.weights[origin][destination] = weight;
    }

    /// Overwrites the weight of an existing arc, returning the old weight.
    pub(crate) fn set_weight(&mut self, origin: NodeId, destination: NodeId, weight: f64) -> f64 {
        std::mem::replace(&mut self.weights[origin][destination], weight)
    }

    /// Returns the destinations of all arcs leaving `origin`, ascending.
    pub fn successors(&self, origin: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.connections
            .get(origin)
            .into_iter()
            .flat_map(|row| row.iter().enumerate())
            .filter(|(_, connected)| **connected)
            .map(move |(destination, _)| (destination, self.weights[origin][destination]))
    }

    /// Borrows the connection matrix rows.
    #[must_use]
    pub fn connections(&self) -> &[Vec<bool>] {
        &self.connections
    }

    /// Borrows the weight matrix rows.
    #[must_use]
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Counts connected cells.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.connections
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }
}
