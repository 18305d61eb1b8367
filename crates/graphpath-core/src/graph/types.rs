//! Graph types: node identifiers, arcs and weights.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable index of a node, assigned in order of first insertion.
pub type NodeId = usize;

/// A directed, weighted arc between two nodes.
///
/// # Example
///
/// ```rust
/// use graphpath_core::graph::GraphArc;
///
/// let arc = GraphArc::new(0, 1, 2.5).unwrap();
/// assert_eq!(arc.origin(), 0);
/// assert_eq!(arc.destination(), 1);
/// assert_eq!(arc.weight(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GraphArc {
    origin: NodeId,
    destination: NodeId,
    weight: f64,
}

impl GraphArc {
    /// Creates a new arc with the given endpoints and weight.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWeight` if the weight is negative or NaN.
    pub fn new(origin: NodeId, destination: NodeId, weight: f64) -> Result<Self> {
        Ok(Self {
            origin,
            destination,
            weight: validate_weight(weight)?,
        })
    }

    /// Returns the origin node index.
    #[must_use]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Returns the destination node index.
    #[must_use]
    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// Returns the arc weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Checks that a weight is usable by the shortest-path solver.
///
/// Infinity is rejected too: an infinite cell means "no arc".
pub fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_nan() || weight < 0.0 || weight.is_infinite() {
        return Err(Error::InvalidWeight(weight));
    }
    // -0.0 passes the checks above; store it as 0.0
    Ok(if weight == 0.0 { 0.0 } else { weight })
}

/// Outcome of a successful arc insertion.
///
/// Records which endpoints did not exist before and were created on the fly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcInsertion {
    /// Origin node index.
    pub origin: NodeId,
    /// Destination node index.
    pub destination: NodeId,
    /// Names of the endpoints created by this insertion, origin first.
    pub created: Vec<String>,
}

/// Wrapper for f64 to implement Ord for `BinaryHeap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrderedWeight(pub(crate) f64);

impl Eq for OrderedWeight {}

impl PartialOrd for OrderedWeight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedWeight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Read-only export of a graph for display.
///
/// Weight cells are `None` where there is no arc (infinite distance), so the
/// snapshot serializes to JSON with `null` in those cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphSnapshot {
    /// Node names in index order.
    pub nodes: Vec<String>,
    /// Connection matrix, `connections[i][j]` for arc `i -> j`.
    pub connections: Vec<Vec<bool>>,
    /// Weight matrix, `None` for infinite cells.
    pub weights: Vec<Vec<Option<f64>>>,
}

impl GraphSnapshot {
    /// Creates a snapshot from its parts.
    #[must_use]
    pub fn new(
        nodes: Vec<String>,
        connections: Vec<Vec<bool>>,
        weights: Vec<Vec<Option<f64>>>,
    ) -> Self {
        Self {
            nodes,
            connections,
            weights,
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
