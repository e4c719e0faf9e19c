//! `canon dfs` / `canon bfs` — walk the graph from a start node.

use std::path::Path;

use clap::Args;
use serde::Serialize;

use crate::cmd::{fail, load_graph, owned_keys};
use crate::output::{OutputMode, key_line, pretty_kv, pretty_section, render_mode};

/// Arguments shared by `canon dfs` and `canon bfs`.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Key of the node to start from.
    pub start: String,
}

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Walk {
    Dfs,
    Bfs,
}

impl Walk {
    const fn heading(self) -> &'static str {
        match self {
            Self::Dfs => "Depth-first order",
            Self::Bfs => "Breadth-first order",
        }
    }
}

#[derive(Debug, Serialize)]
struct WalkOutput {
    walk: Walk,
    start: String,
    order: Vec<String>,
}

/// Run a traversal and print the visit order.
///
/// # Errors
///
/// Returns an error if the graph cannot be loaded or `start` is unknown.
pub fn run_walk(
    walk: Walk,
    args: &WalkArgs,
    graph_flag: Option<&Path>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let graph = match load_graph(graph_flag) {
        Ok(g) => g,
        Err(e) => return fail(output, e),
    };

    let order = match walk {
        Walk::Dfs => graph.dfs(&args.start).map(owned_keys),
        Walk::Bfs => graph.bfs(&args.start).map(owned_keys),
    };
    let order = match order {
        Ok(order) => order,
        Err(e) => return fail(output, e),
    };

    let result = WalkOutput {
        walk,
        start: args.start.clone(),
        order,
    };

    render_mode(
        output,
        &result,
        |r, w| key_line(w, &r.order),
        |r, w| {
            pretty_section(w, r.walk.heading())?;
            pretty_kv(w, "start", &r.start)?;
            pretty_kv(w, "visited", r.order.len().to_string())?;
            key_line(w, &r.order)
        },
    )
}
