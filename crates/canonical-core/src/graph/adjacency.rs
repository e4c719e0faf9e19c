//! The adjacency-list graph: node arena, key index, and mutation API.

use std::collections::HashMap;

use tracing::debug;

use super::node::{Edge, Node, NodeIndex};
use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed, weighted graph stored as adjacency lists.
///
/// Nodes live in an arena and are addressed by [`NodeIndex`]; a key index
/// maps each unique string key to its handle. Edges are `(target, weight)`
/// pairs stored on the source node. Undirected edges are two directed edges.
///
/// Nodes are never removed, only edges, so handles stay valid.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Insert a node with the given key.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyKey`] if `key` is empty.
    /// - [`GraphError::DuplicateNode`] if the key is already present.
    pub fn add_node(&mut self, key: &str) -> Result<NodeIndex, GraphError> {
        if key.is_empty() {
            return Err(GraphError::EmptyKey);
        }
        if self.index.contains_key(key) {
            return Err(GraphError::DuplicateNode {
                key: key.to_string(),
            });
        }

        let idx = NodeIndex::new(self.nodes.len());
        self.nodes.push(Node::new(key.to_string(), idx));
        self.index.insert(key.to_string(), idx);
        debug!(key, index = idx.index(), "added node");
        Ok(idx)
    }

    /// Add a directed edge `source -> dest`.
    ///
    /// Missing endpoints are inserted first.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyKey`] if either key is empty.
    /// - [`GraphError::DuplicateEdge`] if `source` already points at `dest`.
    pub fn add_edge(&mut self, source: &str, dest: &str, weight: i64) -> Result<(), GraphError> {
        if source.is_empty() || dest.is_empty() {
            return Err(GraphError::EmptyKey);
        }
        let from = self.get_or_insert(source)?;
        let to = self.get_or_insert(dest)?;
        self.link(from, to, weight)
    }

    /// Add `source -> dest` and `dest -> source`, both with `weight`.
    ///
    /// Either both edges are added or neither is. When `source == dest` a
    /// single self-loop is added.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::add_edge`]; a duplicate in either direction fails
    /// before anything is inserted.
    pub fn add_undirected_edge(
        &mut self,
        source: &str,
        dest: &str,
        weight: i64,
    ) -> Result<(), GraphError> {
        if source.is_empty() || dest.is_empty() {
            return Err(GraphError::EmptyKey);
        }
        let a = self.get_or_insert(source)?;
        let b = self.get_or_insert(dest)?;

        if a == b {
            return self.link(a, a, weight);
        }
        if self.nodes[b.index()].has_neighbor(a) {
            return Err(self.duplicate_edge(b, a));
        }
        self.link(a, b, weight)?;
        self.link(b, a, weight)
    }

    /// Remove the edge `source -> dest` if it exists.
    ///
    /// Returns whether an edge was removed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either key is unknown.
    pub fn remove_edge(&mut self, source: &str, dest: &str) -> Result<bool, GraphError> {
        let from = self.require(source)?;
        let to = self.require(dest)?;
        let removed = self.nodes[from.index()].remove_neighbor(to);
        if removed {
            debug!(source, dest, "removed edge");
        }
        Ok(removed)
    }

    fn get_or_insert(&mut self, key: &str) -> Result<NodeIndex, GraphError> {
        match self.index.get(key) {
            Some(idx) => Ok(*idx),
            None => self.add_node(key),
        }
    }

    fn link(&mut self, from: NodeIndex, to: NodeIndex, weight: i64) -> Result<(), GraphError> {
        if !self.nodes[from.index()].add_neighbor(to, weight) {
            return Err(self.duplicate_edge(from, to));
        }
        debug!(
            source = self.nodes[from.index()].key(),
            dest = self.nodes[to.index()].key(),
            weight,
            "added edge"
        );
        Ok(())
    }

    fn duplicate_edge(&self, from: NodeIndex, to: NodeIndex) -> GraphError {
        GraphError::DuplicateEdge {
            from: self.nodes[from.index()].key().to_string(),
            to: self.nodes[to.index()].key().to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Returns `true` if a node with `key` exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Handle of the node with `key`.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }

    /// The node behind `idx`, if `idx` was issued by this graph.
    #[must_use]
    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.index())
    }

    /// The node with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.index_of(key).and_then(|idx| self.node(idx))
    }

    /// Weight of the edge `source -> dest`, if both nodes and the edge exist.
    #[must_use]
    pub fn weight(&self, source: &str, dest: &str) -> Option<i64> {
        let to = self.index_of(dest)?;
        self.get(source)?.weight_to(to)
    }

    /// Outgoing edges of `key`, resolved to `(target key, weight)`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `key` is unknown.
    pub fn neighbors(&self, key: &str) -> Result<Vec<(&str, i64)>, GraphError> {
        let idx = self.require(key)?;
        Ok(self.nodes[idx.index()]
            .neighbors()
            .iter()
            .map(|edge| (self.nodes[edge.target.index()].key(), edge.weight))
            .collect())
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges. An undirected edge counts twice.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve `key` or fail with [`GraphError::NodeNotFound`].
    pub(crate) fn require(&self, key: &str) -> Result<NodeIndex, GraphError> {
        self.index_of(key).ok_or_else(|| GraphError::NodeNotFound {
            key: key.to_string(),
        })
    }

    /// Node by handle for handles known to come from this graph.
    pub(crate) fn at(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx.index()]
    }

    /// Outgoing edges by handle.
    pub(crate) fn edges_of(&self, idx: NodeIndex) -> &[Edge] {
        self.nodes[idx.index()].neighbors()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
