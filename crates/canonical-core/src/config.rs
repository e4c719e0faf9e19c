//! Graph definition files.
//!
//! A graph file is TOML with a list of standalone nodes and a list of edges:
//!
//! ```toml
//! [[nodes]]
//! key = "Juventus"
//!
//! [[edges]]
//! from = "Arsenal"
//! to = "Liverpool"
//! weight = 3          # optional, default 1
//! undirected = false  # optional, default false
//! ```
//!
//! Nodes that appear in an edge do not need a `[[nodes]]` entry. Building
//! replays nodes first, then edges, through the regular [`Graph`] API, so a
//! file that repeats a node or an edge fails exactly like the API would.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::GraphError;
use crate::graph::{DEFAULT_WEIGHT, Graph};

/// Environment variable naming the default graph file.
pub const GRAPH_ENV: &str = "CANON_GRAPH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GraphSpec {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeSpec {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: i64,
    #[serde(default)]
    pub undirected: bool,
}

impl GraphSpec {
    /// Build a graph from this definition.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError`] raised while replaying nodes and
    /// edges (empty key, duplicate node, duplicate edge).
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(&node.key)?;
        }
        for edge in &self.edges {
            if edge.undirected {
                graph.add_undirected_edge(&edge.from, &edge.to, edge.weight)?;
            } else {
                graph.add_edge(&edge.from, &edge.to, edge.weight)?;
            }
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph from definition"
        );
        Ok(graph)
    }
}

/// Parse a graph definition from TOML text.
///
/// # Errors
///
/// Returns an error if `content` is not a valid graph definition.
pub fn parse_graph_spec(content: &str) -> Result<GraphSpec> {
    toml::from_str::<GraphSpec>(content).context("Failed to parse graph definition")
}

/// Read and parse the graph definition at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_graph_spec(path: &Path) -> Result<GraphSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<GraphSpec>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the graph definition at `path` and build it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it violates
/// graph invariants. The [`GraphError`] stays reachable via
/// `anyhow::Error::downcast_ref`.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let spec = load_graph_spec(path)?;
    let graph = spec
        .build()
        .with_context(|| format!("Invalid graph in {}", path.display()))?;
    Ok(graph)
}

/// Pick the graph file: explicit flag first, then [`GRAPH_ENV`].
///
/// `None` means the caller should fall back to its built-in graph.
#[must_use]
pub fn resolve_graph_path(flag: Option<&Path>) -> Option<PathBuf> {
    resolve_graph_path_inner(flag, env::var(GRAPH_ENV).ok().as_deref())
}

fn resolve_graph_path_inner(flag: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    env_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

const fn default_weight() -> i64 {
    DEFAULT_WEIGHT
}
