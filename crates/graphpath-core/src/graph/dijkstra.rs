//! Dijkstra single-source shortest paths for non-negative weights.
//!
//! Generic over [`WeightedAdjacency`], so any weighted graph representation
//! can reuse the solver.
//!
//! The priority queue never decreases a key in place. An improved distance is
//! pushed as a new entry and older entries for the same node become stale;
//! they are discarded when popped because the node is already visited. This
//! is only correct when every arc weight is non-negative.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::debug;

use super::types::{NodeId, OrderedWeight};
use super::WeightedGraph;

/// Weighted adjacency view consumed by the shortest-path solver.
pub trait WeightedAdjacency {
    /// Returns the number of nodes; valid ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns `(destination, weight)` for every arc leaving `node`.
    fn outgoing_arcs(&self, node: NodeId) -> Vec<(NodeId, f64)>;

    /// Returns the weight of arc `origin -> destination`, if present.
    fn arc_cost(&self, origin: NodeId, destination: NodeId) -> Option<f64>;
}

impl WeightedAdjacency for WeightedGraph {
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn outgoing_arcs(&self, node: NodeId) -> Vec<(NodeId, f64)> {
        self.neighbors(node)
    }

    fn arc_cost(&self, origin: NodeId, destination: NodeId) -> Option<f64> {
        self.is_connected(origin, destination)
            .then(|| self.weight(origin, destination))
    }
}

/// Distances and predecessors from one origin to every node.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    origin: NodeId,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
}

impl DistanceTable {
    /// Returns the origin node of this table.
    #[must_use]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Returns the shortest distance to `node`, `f64::INFINITY` if unreachable.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns the node preceding `node` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Returns true if `node` is reachable from the origin.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Returns all distances, indexed by node.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Walks predecessor links back from `target` and returns the path in
    /// origin-to-target order, or `None` if `target` is unreachable.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.origin {
            current = self.predecessor(current)?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// A shortest path between two named nodes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShortestPath {
    /// Origin node name.
    pub origin: String,
    /// Destination node name.
    pub destination: String,
    /// Total weight of the path.
    pub distance: f64,
    /// Node names along the path, origin first.
    pub nodes: Vec<String>,
    /// Node indices along the path, origin first.
    pub indices: Vec<NodeId>,
}

impl ShortestPath {
    /// Returns the number of arcs traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.indices.len().saturating_sub(1)
    }

    /// Returns the `(origin, destination)` index pairs of each traversed arc.
    #[must_use]
    pub fn arcs(&self) -> Vec<(NodeId, NodeId)> {
        self.indices.windows(2).map(|w| (w[0], w[1])).collect()
    }
}

/// Runs Dijkstra's algorithm from `origin` over the whole graph.
#[must_use]
pub fn dijkstra<G: WeightedAdjacency>(graph: &G, origin: NodeId) -> DistanceTable {
    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue: BinaryHeap<Reverse<(OrderedWeight, NodeId)>> = BinaryHeap::new();

    if origin < n {
        distances[origin] = 0.0;
        queue.push(Reverse((OrderedWeight(0.0), origin)));
    }

    let mut pops = 0usize;
    let mut stale = 0usize;
    while let Some(Reverse((OrderedWeight(current_dist), current))) = queue.pop() {
        pops += 1;
        if visited[current] {
            stale += 1;
            continue;
        }
        visited[current] = true;

        for (neighbor, weight) in graph.outgoing_arcs(current) {
            let candidate = current_dist + weight;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(current);
                queue.push(Reverse((OrderedWeight(candidate), neighbor)));
            }
        }
    }
    debug!(origin, nodes = n, pops, stale, "Dijkstra finished");

    DistanceTable {
        origin,
        distances,
        predecessors,
    }
}

/// Sums arc weights along consecutive nodes of `path`.
///
/// Returns `None` if two consecutive nodes are not joined by an arc.
#[must_use]
pub fn path_weight<G: WeightedAdjacency>(graph: &G, path: &[NodeId]) -> Option<f64> {
    path.windows(2)
        .map(|w| graph.arc_cost(w[0], w[1]))
        .sum()
}
