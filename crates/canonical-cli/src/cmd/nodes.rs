//! `canon nodes` — list every node with its weighted outgoing edges.

use std::path::Path;

use serde::Serialize;

use crate::cmd::{fail, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

#[derive(Debug, Serialize)]
struct EdgeOutput {
    to: String,
    weight: i64,
}

#[derive(Debug, Serialize)]
struct NodeOutput {
    key: String,
    edges: Vec<EdgeOutput>,
}

#[derive(Debug, Serialize)]
struct NodesOutput {
    node_count: usize,
    edge_count: usize,
    nodes: Vec<NodeOutput>,
}

fn edge_list(edges: &[EdgeOutput]) -> String {
    edges
        .iter()
        .map(|e| format!("{}({})", e.to, e.weight))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print nodes in insertion order.
///
/// Text lines look like `Barcelona -> RealMadrid(1) ManCity(1)`.
///
/// # Errors
///
/// Returns an error if the graph cannot be loaded.
pub fn run_nodes(graph_flag: Option<&Path>, output: OutputMode) -> anyhow::Result<()> {
    let graph = match load_graph(graph_flag) {
        Ok(g) => g,
        Err(e) => return fail(output, e),
    };

    let mut nodes = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let edges = match graph.neighbors(node.key()) {
            Ok(list) => list
                .into_iter()
                .map(|(to, weight)| EdgeOutput {
                    to: to.to_string(),
                    weight,
                })
                .collect(),
            Err(e) => return fail(output, e),
        };
        nodes.push(NodeOutput {
            key: node.key().to_string(),
            edges,
        });
    }

    let result = NodesOutput {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        nodes,
    };

    render_mode(
        output,
        &result,
        |r, w| {
            for node in &r.nodes {
                if node.edges.is_empty() {
                    writeln!(w, "{}", node.key)?;
                } else {
                    writeln!(w, "{} -> {}", node.key, edge_list(&node.edges))?;
                }
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, "Graph")?;
            pretty_kv(w, "nodes", r.node_count.to_string())?;
            pretty_kv(w, "edges", r.edge_count.to_string())?;
            writeln!(w)?;
            for node in &r.nodes {
                let edges = if node.edges.is_empty() {
                    "(none)".to_string()
                } else {
                    edge_list(&node.edges)
                };
                pretty_kv(w, &node.key, edges)?;
            }
            Ok(())
        },
    )
}
