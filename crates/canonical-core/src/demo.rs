//! Built-in sample data and the league walkthrough.
//!
//! The league graph records who beat whom. As shipped it contains the cycle
//! Chelsea → Barcelona → RealMadrid → Tottenham → Arsenal → Liverpool →
//! Chelsea; the walkthrough reports that cycle, drops the closing edge, and
//! runs every traversal on the resulting DAG.

use anyhow::Result;
use serde::Serialize;

use crate::config::{GraphSpec, parse_graph_spec};
use crate::error::GraphError;
use crate::graph::{Graph, Node};

const LEAGUE_TOML: &str = include_str!("../data/league.toml");

/// First LCS sample string.
pub const LCS_X: &str = "ABCBDAB";
/// Second LCS sample string.
pub const LCS_Y: &str = "XYZAYZXBDCABC";
/// Palindrome sample string.
pub const PALINDROME_INPUT: &str = "Ab3bd";

/// Where the cycle check starts.
pub const CYCLE_PROBE: &str = "Barcelona";
/// Where the traversals start.
pub const WALK_START: &str = "Chelsea";
/// Reachability target.
pub const REACH_TARGET: &str = "ManUtd";
/// The edge that closes the league cycle.
pub const CLOSING_EDGE: (&str, &str) = ("Liverpool", "Chelsea");

/// The league definition.
///
/// # Errors
///
/// Fails only if the embedded TOML is malformed.
pub fn league_spec() -> Result<GraphSpec> {
    parse_graph_spec(LEAGUE_TOML)
}

/// The league graph, cycle included.
///
/// # Errors
///
/// Fails only if the embedded definition is malformed.
pub fn league() -> Result<Graph> {
    Ok(league_spec()?.build()?)
}

/// Everything the walkthrough computes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueReport {
    /// Cycle found from [`CYCLE_PROBE`] before the closing edge is removed.
    pub cycle: Option<Vec<String>>,
    /// Whether the closing edge was removed.
    pub removed_edge: Option<(String, String)>,
    pub dfs: Vec<String>,
    pub bfs: Vec<String>,
    pub reachable: bool,
    pub topological: Vec<String>,
}

/// Run the walkthrough on `graph`.
///
/// If a cycle is reachable from [`CYCLE_PROBE`], the [`CLOSING_EDGE`] is
/// removed before the traversals run. The caller's graph is not modified.
///
/// # Errors
///
/// Returns a [`GraphError`] if the graph lacks the demo nodes or is still
/// cyclic after the removal.
pub fn walkthrough(graph: &Graph) -> Result<LeagueReport, GraphError> {
    let mut graph = graph.clone();

    let cycle = graph.find_cycle_from(CYCLE_PROBE)?;
    let removed_edge = if cycle.is_some() {
        let (from, to) = CLOSING_EDGE;
        graph
            .remove_edge(from, to)?
            .then(|| (from.to_string(), to.to_string()))
    } else {
        None
    };

    Ok(LeagueReport {
        cycle: cycle.map(|c| c.path),
        removed_edge,
        dfs: owned_keys(graph.dfs(WALK_START)?),
        bfs: owned_keys(graph.bfs(WALK_START)?),
        reachable: graph.is_reachable(WALK_START, REACH_TARGET)?,
        topological: owned_keys(graph.topological_sort()?.into_iter()),
    })
}

fn owned_keys<'g>(walk: impl Iterator<Item = &'g Node>) -> Vec<String> {
    walk.map(|node| node.key().to_string()).collect()
}
