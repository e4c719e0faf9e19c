//! Topological ordering.
//!
//! # Algorithm
//!
//! DFS post-order over every node, reversed:
//!
//! 1. Walk nodes in insertion order so disconnected components are covered.
//! 2. For each unvisited node, fully explore its descendants first.
//! 3. Push a node onto the explored stack once all its descendants are done.
//! 4. Popping the stack yields the order.
//!
//! Several valid orders usually exist; which one comes out depends on node
//! and edge insertion order. The three-color marking doubles as cycle
//! detection, so cyclic graphs fail instead of producing a bogus order.
//!
//! O(V + E) time and O(V) space.

use tracing::warn;

use super::adjacency::Graph;
use super::cycles::{Color, Frame};
use super::node::{Node, NodeIndex};
use crate::error::GraphError;

impl Graph {
    /// Nodes in topological order: for every edge `u -> v`, `u` comes first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CycleDetected`] with the offending cycle if the
    /// graph is not a DAG.
    pub fn topological_sort(&self) -> Result<Vec<&Node>, GraphError> {
        let mut color = vec![Color::White; self.node_count()];
        let mut explored: Vec<NodeIndex> = Vec::with_capacity(self.node_count());

        for node in self.nodes() {
            if color[node.index().index()] == Color::White {
                self.explore(node.index(), &mut color, &mut explored)?;
            }
        }

        Ok(explored.into_iter().rev().map(|idx| self.at(idx)).collect())
    }

    /// Post-order DFS from `root` on an explicit frame stack.
    fn explore(
        &self,
        root: NodeIndex,
        color: &mut [Color],
        explored: &mut Vec<NodeIndex>,
    ) -> Result<(), GraphError> {
        color[root.index()] = Color::Gray;
        let mut frames: Vec<Frame> = vec![(root, 0)];

        while let Some(frame) = frames.last_mut() {
            let (node, pos) = *frame;
            let Some(edge) = self.edges_of(node).get(pos) else {
                color[node.index()] = Color::Black;
                explored.push(node);
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
                Color::Gray => {
                    let cycle = self.cycle_from_frames(&frames, next);
                    warn!(%cycle, "topological sort aborted");
                    return Err(GraphError::CycleDetected(cycle));
                }
                Color::Black => {}
            }
        }

        Ok(())
    }
}

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

    fn order(g: &Graph) -> Vec<&str> {
        g.topological_sort().unwrap().into_iter().map(Node::key).collect()
    }

    fn assert_topological(g: &Graph) {
        let sorted = order(g);
        assert_eq!(sorted.len(), g.node_count());
        let pos = |key: &str| sorted.iter().position(|k| *k == key).unwrap();
        for node in g.nodes() {
            for (target, _) in g.neighbors(node.key()).unwrap() {
                assert!(
                    pos(node.key()) < pos(target),
                    "{} should precede {target} in {sorted:?}",
                    node.key()
                );
            }
        }
    }

    #[test]
    fn chain_has_unique_order() {
        let g = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        assert_eq!(order(&g), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn chain_inserted_backwards() {
        let g = build(&[("C", "D"), ("B", "C"), ("A", "B")]);
        assert_eq!(order(&g), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn diamond_is_valid() {
        let g = build(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        assert_topological(&g);
        assert_eq!(order(&g).first(), Some(&"A"));
        assert_eq!(order(&g).last(), Some(&"D"));
    }

    #[test]
    fn disconnected_components_all_listed() {
        let mut g = build(&[("A", "B"), ("X", "Y")]);
        g.add_node("lonely").unwrap();
        assert_topological(&g);
        assert_eq!(order(&g).len(), 5);
    }

    #[test]
    fn empty_graph_sorts_to_nothing() {
        assert!(Graph::new().topological_sort().unwrap().is_empty());
    }

    #[test]
    fn cycle_is_rejected_with_path() {
        let g = build(&[("A", "B"), ("B", "C"), ("C", "A")]);
        match g.topological_sort() {
            Err(GraphError::CycleDetected(cycle)) => {
                assert_eq!(cycle.len(), 3);
                assert_eq!(cycle.path.first(), cycle.path.last());
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn self_loop_is_rejected() {
        let g = build(&[("A", "A")]);
        assert!(matches!(
            g.topological_sort(),
            Err(GraphError::CycleDetected(_))
        ));
    }
}
