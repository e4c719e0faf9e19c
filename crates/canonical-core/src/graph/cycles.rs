//! Directed cycle detection.
//!
//! # Overview
//!
//! A cycle is a path that returns to its first node. Detection uses the
//! three-color DFS: a node is White before it is reached, Gray while it is on
//! the current DFS path, and Black once all its descendants are finished. An
//! edge into a Gray node is a back edge and closes a cycle.
//!
//! Diamonds (two paths into the same node) hit Black nodes, never Gray ones,
//! so they are not mistaken for cycles.
//!
//! # Scope
//!
//! - [`Graph::cycle_exists`] / [`Graph::find_cycle_from`] only search what is
//!   reachable from the start node.
//! - [`Graph::has_cycles`] restarts the search from every unfinished node and
//!   covers disconnected components.

#![allow(clippy::module_name_repetitions)]

use std::fmt;

use super::adjacency::Graph;
use super::node::NodeIndex;
use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// A directed cycle found in a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Node keys along the cycle. The first and last entries are the same
    /// node, e.g. `["A", "B", "C", "A"]`.
    pub path: Vec<String>,
}

impl Cycle {
    /// Number of distinct nodes on the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns `true` for a degenerate cycle with no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the cycle is a single node pointing at itself.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.len() == 1
    }

    /// Returns `true` for a 2-node cycle (A → B → A).
    #[must_use]
    pub fn is_mutual(&self) -> bool {
        self.len() == 2
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_self_loop() {
            write!(f, "cycle detected: self-loop on '{}'", self.path[0])
        } else if self.is_mutual() {
            write!(
                f,
                "cycle detected: '{}' and '{}' point at each other",
                self.path[0], self.path[1]
            )
        } else {
            write!(
                f,
                "cycle detected ({} nodes): {}",
                self.len(),
                self.path.join(" → ")
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    White,
    Gray,
    Black,
}

/// A node on the current DFS path and the position of its next edge.
///
/// The frame stack doubles as the Gray path, in order.
pub(crate) type Frame = (NodeIndex, usize);

impl Graph {
    /// Returns `true` if a directed cycle is reachable from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `start` is unknown.
    pub fn cycle_exists(&self, start: &str) -> Result<bool, GraphError> {
        Ok(self.find_cycle_from(start)?.is_some())
    }

    /// The first cycle reachable from `start`, in DFS order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `start` is unknown.
    pub fn find_cycle_from(&self, start: &str) -> Result<Option<Cycle>, GraphError> {
        let idx = self.require(start)?;
        let mut color = vec![Color::White; self.node_count()];
        Ok(self.dfs_find_cycle(idx, &mut color))
    }

    /// Returns `true` if any cycle exists anywhere in the graph.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        let mut color = vec![Color::White; self.node_count()];
        self.nodes().any(|node| {
            color[node.index().index()] == Color::White
                && self.dfs_find_cycle(node.index(), &mut color).is_some()
        })
    }

    /// DFS from `root` that stops at the first back edge.
    ///
    /// Runs on an explicit frame stack, so path length is bounded by memory
    /// rather than the call stack. Nodes finished before the stop are Black;
    /// the ones still on the path are left Gray.
    fn dfs_find_cycle(&self, root: NodeIndex, color: &mut [Color]) -> Option<Cycle> {
        color[root.index()] = Color::Gray;
        let mut frames: Vec<Frame> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let (node, pos) = *frame;
            let Some(edge) = self.edges_of(node).get(pos) else {
                color[node.index()] = Color::Black;
                frames.pop();
                continue;
            };
            frame.1 += 1;

            let next = edge.target;
            match color[next.index()] {
                Color::White => {
                    color[next.index()] = Color::Gray;
                    frames.push((next, 0));
                }
                Color::Gray => return Some(self.cycle_from_frames(&frames, next)),
                Color::Black => {}
            }
        }

        None
    }

    /// Read the cycle closed by a back edge into `back_to` off the Gray path.
    pub(crate) fn cycle_from_frames(&self, frames: &[Frame], back_to: NodeIndex) -> Cycle {
        let start = frames
            .iter()
            .position(|(idx, _)| *idx == back_to)
            .unwrap_or(0);
        let mut keys: Vec<String> = frames[start..]
            .iter()
            .map(|(idx, _)| self.at(*idx).key().to_string())
            .collect();
        keys.push(self.at(back_to).key().to_string());
        Cycle { path: keys }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
