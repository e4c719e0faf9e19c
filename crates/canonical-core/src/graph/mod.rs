//! Directed weighted graph with classic traversals.
//!
//! The [`Graph`] owns an arena of [`Node`]s addressed by [`NodeIndex`]. Each
//! node stores its outgoing edges as `(target, weight)` pairs. Undirected
//! edges are modeled as a pair of directed edges.
//!
//! ## Submodules
//!
//! - [`node`] — node handle, edge, and per-node adjacency list.
//! - [`adjacency`] — the graph itself: insertion, removal, lookup.
//! - [`traversal`] — lazy DFS/BFS walks and reachability.
//! - [`topo`] — topological ordering of DAGs.
//! - [`cycles`] — reachability-bounded and whole-graph cycle detection.
//!
//! ## Example
//!
//! ```
//! use canonical_core::graph::{Graph, Node};
//!
//! let mut g = Graph::new();
//! g.add_edge("A", "B", 1)?;
//! g.add_edge("B", "C", 1)?;
//!
//! let order: Vec<&str> = g.bfs("A")?.map(Node::key).collect();
//! assert_eq!(order, ["A", "B", "C"]);
//! assert!(g.is_reachable("A", "C")?);
//! assert!(!g.cycle_exists("A")?);
//! # Ok::<(), canonical_core::error::GraphError>(())
//! ```

pub mod adjacency;
pub mod cycles;
pub mod node;
pub mod topo;
pub mod traversal;

pub use adjacency::Graph;
pub use cycles::Cycle;
pub use node::{DEFAULT_WEIGHT, Edge, Node, NodeIndex};
pub use traversal::{Bfs, Dfs};
