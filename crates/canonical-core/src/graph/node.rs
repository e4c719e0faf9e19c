//! Graph nodes and their outgoing edges.

use std::fmt;

/// Weight of an edge that was added without one.
pub const DEFAULT_WEIGHT: i64 = 1;

/// Stable handle to a node inside a [`Graph`](super::Graph).
///
/// Handles index the graph's node arena. Nodes are never removed, so a handle
/// stays valid for the lifetime of the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A weighted outgoing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The node this edge points to.
    pub target: NodeIndex,
    /// Edge weight. [`DEFAULT_WEIGHT`] for unweighted edges.
    pub weight: i64,
}

/// A keyed node holding its outgoing edges.
///
/// Edges are kept in insertion order so traversals are deterministic. At most
/// one edge exists per target.
#[derive(Debug, Clone)]
pub struct Node {
    key: String,
    index: NodeIndex,
    neighbors: Vec<Edge>,
}

impl Node {
    pub(crate) const fn new(key: String, index: NodeIndex) -> Self {
        Self {
            key,
            index,
            neighbors: Vec::new(),
        }
    }

    /// The node's unique key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The node's handle in its graph.
    #[must_use]
    pub const fn index(&self) -> NodeIndex {
        self.index
    }

    /// Outgoing edges in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[Edge] {
        &self.neighbors
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if there is an edge to `target`.
    #[must_use]
    pub fn has_neighbor(&self, target: NodeIndex) -> bool {
        self.neighbors.iter().any(|edge| edge.target == target)
    }

    /// Weight of the edge to `target`, if any.
    #[must_use]
    pub fn weight_to(&self, target: NodeIndex) -> Option<i64> {
        self.neighbors
            .iter()
            .find(|edge| edge.target == target)
            .map(|edge| edge.weight)
    }

    /// Add an edge to `target`.
    ///
    /// Returns `false` and leaves the existing edge untouched if `target` is
    /// already a neighbor, whatever its weight.
    pub(crate) fn add_neighbor(&mut self, target: NodeIndex, weight: i64) -> bool {
        if self.has_neighbor(target) {
            return false;
        }
        self.neighbors.push(Edge { target, weight });
        true
    }

    /// Remove the edge to `target`, ignoring its weight.
    ///
    /// Returns `false` when there was no such edge.
    pub fn remove_neighbor(&mut self, target: NodeIndex) -> bool {
        let before = self.neighbors.len();
        self.neighbors.retain(|edge| edge.target != target);
        self.neighbors.len() != before
    }
}

/// Nodes compare by key only.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Node {}
