//! Depth-first and breadth-first walks, plus reachability.
//!
//! # Design
//!
//! - **Lazy**: [`Dfs`] and [`Bfs`] are iterators over `&Node`. Callers decide
//!   whether to collect, print, or stop early.
//! - **Per-walk visited set**: every walk owns its own visited bitmap, so a
//!   walk never observes marks from another call.
//! - **Cycle-safe**: a node already visited is skipped, so cyclic graphs
//!   produce each reachable node exactly once and terminate.
//! - **Neighbor order**: edges are followed in insertion order, which makes
//!   output deterministic for a given construction sequence.

use std::collections::VecDeque;

use tracing::trace;

use super::adjacency::Graph;
use super::node::{Node, NodeIndex};
use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Dfs
// ---------------------------------------------------------------------------

/// Depth-first preorder walk.
///
/// Yields nodes in the same order as the recursive formulation
/// `visit(n) { emit n; for m in neighbors(n) { if !visited(m) visit(m) } }`,
/// using an explicit stack so deep graphs cannot overflow the call stack.
#[derive(Debug)]
pub struct Dfs<'g> {
    graph: &'g Graph,
    stack: Vec<NodeIndex>,
    visited: Vec<bool>,
}

impl<'g> Dfs<'g> {
    fn new(graph: &'g Graph, start: NodeIndex) -> Self {
        Self {
            graph,
            stack: vec![start],
            visited: vec![false; graph.node_count()],
        }
    }
}

impl<'g> Iterator for Dfs<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if self.visited[idx.index()] {
                continue;
            }
            self.visited[idx.index()] = true;

            // Reverse so the first neighbor is popped first.
            for edge in self.graph.edges_of(idx).iter().rev() {
                if !self.visited[edge.target.index()] {
                    self.stack.push(edge.target);
                }
            }

            let node = self.graph.at(idx);
            trace!(key = node.key(), "dfs visit");
            return Some(node);
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Bfs
// ---------------------------------------------------------------------------

/// Breadth-first (level-order) walk.
#[derive(Debug)]
pub struct Bfs<'g> {
    graph: &'g Graph,
    queue: VecDeque<NodeIndex>,
    visited: Vec<bool>,
}

impl<'g> Bfs<'g> {
    fn new(graph: &'g Graph, start: NodeIndex) -> Self {
        let mut visited = vec![false; graph.node_count()];
        visited[start.index()] = true;
        Self {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<'g> Iterator for Bfs<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.queue.pop_front()?;
        for edge in self.graph.edges_of(idx) {
            let next = edge.target.index();
            if !self.visited[next] {
                self.visited[next] = true;
                self.queue.push_back(edge.target);
            }
        }

        let node = self.graph.at(idx);
        trace!(key = node.key(), "bfs visit");
        Some(node)
    }
}

// ---------------------------------------------------------------------------
// Graph API
// ---------------------------------------------------------------------------

impl Graph {
    /// Depth-first walk from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `start` is unknown.
    pub fn dfs(&self, start: &str) -> Result<Dfs<'_>, GraphError> {
        let idx = self.require(start)?;
        Ok(Dfs::new(self, idx))
    }

    /// Breadth-first walk from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `start` is unknown.
    pub fn bfs(&self, start: &str) -> Result<Bfs<'_>, GraphError> {
        let idx = self.require(start)?;
        Ok(Bfs::new(self, idx))
    }

    /// Returns `true` if a directed path of one or more edges leads from
    /// `from` to `to`.
    ///
    /// A node reaches itself only through a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either key is unknown.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool, GraphError> {
        let source = self.require(from)?;
        let target = self.require(to)?;

        // Seed with the direct neighbors so `from == to` needs a real cycle.
        let mut visited = vec![false; self.node_count()];
        let mut stack: Vec<NodeIndex> = Vec::new();
        for edge in self.edges_of(source) {
            if !visited[edge.target.index()] {
                visited[edge.target.index()] = true;
                stack.push(edge.target);
            }
        }

        while let Some(current) = stack.pop() {
            if current == target {
                return Ok(true);
            }
            for edge in self.edges_of(current) {
                if !visited[edge.target.index()] {
                    visited[edge.target.index()] = true;
                    stack.push(edge.target);
                }
            }
        }

        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn build(edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new();
        for (from, to) in edges {
            g.add_edge(from, to, 1).unwrap();
        }
        g
    }

    fn keys<'g>(walk: impl Iterator<Item = &'g Node>) -> Vec<&'g str> {
        walk.map(Node::key).collect()
    }

    #[test]
    fn dfs_chain() {
        let g = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        assert_eq!(keys(g.dfs("A").unwrap()), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn dfs_matches_recursive_preorder() {
        // A -> B -> D, A -> C -> D: recursive preorder is A B D C.
        let g = build(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert_eq!(keys(g.dfs("A").unwrap()), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn dfs_terminates_on_cycle() {
        let g = build(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(keys(g.dfs("A").unwrap()), vec!["A", "B", "C"]);
    }

    #[test]
    fn dfs_self_loop() {
        let g = build(&[("A", "A")]);
        assert_eq!(keys(g.dfs("A").unwrap()), vec!["A"]);
    }

    #[test]
    fn dfs_unknown_start() {
        let g = build(&[("A", "B")]);
        assert!(matches!(g.dfs("Z"), Err(GraphError::NodeNotFound { .. })));
    }

    #[test]
    fn bfs_level_order() {
        // A -> B, A -> C, B -> D, C -> E
        let g = build(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")]);
        assert_eq!(keys(g.bfs("A").unwrap()), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn bfs_two_cycle() {
        let g = build(&[("A", "B"), ("B", "A")]);
        assert_eq!(keys(g.bfs("A").unwrap()), vec!["A", "B"]);
    }

    #[test]
    fn bfs_only_reaches_forward() {
        let g = build(&[("A", "B"), ("C", "A")]);
        assert_eq!(keys(g.bfs("A").unwrap()), vec!["A", "B"]);
    }

    #[test]
    fn walks_are_independent() {
        let g = build(&[("A", "B"), ("B", "C")]);
        let first = keys(g.bfs("A").unwrap());
        let second = keys(g.bfs("A").unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn walks_can_stop_early() {
        let g = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let first_two: Vec<&str> = g.dfs("A").unwrap().take(2).map(Node::key).collect();
        assert_eq!(first_two, vec!["A", "B"]);
    }

    #[test]
    fn reachable_follows_every_branch() {
        // The target hangs off the second neighbor, not the first.
        let g = build(&[("A", "B"), ("A", "C"), ("C", "D")]);
        assert!(g.is_reachable("A", "D").unwrap());
        assert!(!g.is_reachable("D", "A").unwrap());
        assert!(!g.is_reachable("B", "D").unwrap());
    }

    #[test]
    fn reachable_direct_neighbor() {
        let g = build(&[("A", "B")]);
        assert!(g.is_reachable("A", "B").unwrap());
    }

    #[test]
    fn reachable_self_requires_cycle() {
        let acyclic = build(&[("A", "B")]);
        assert!(!acyclic.is_reachable("A", "A").unwrap());

        let cyclic = build(&[("A", "B"), ("B", "A")]);
        assert!(cyclic.is_reachable("A", "A").unwrap());
    }

    #[test]
    fn reachable_terminates_on_cycle_without_target() {
        let mut g = build(&[("A", "B"), ("B", "A")]);
        g.add_node("Z").unwrap();
        assert!(!g.is_reachable("A", "Z").unwrap());
    }

    #[test]
    fn reachable_unknown_node() {
        let g = build(&[("A", "B")]);
        assert!(matches!(
            g.is_reachable("A", "Q"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }
}
