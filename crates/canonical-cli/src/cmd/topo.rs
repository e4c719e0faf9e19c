//! `canon topo` — topological order of the whole graph.

use std::path::Path;

use serde::Serialize;

use crate::cmd::{fail, load_graph, owned_keys};
use crate::output::{OutputMode, key_line, pretty_section, render_mode};

#[derive(Debug, Serialize)]
struct TopoOutput {
    order: Vec<String>,
}

/// Print a topological order, or a `CycleDetected` error on cyclic graphs.
///
/// # Errors
///
/// Returns an error if the graph cannot be loaded or contains a cycle.
pub fn run_topo(graph_flag: Option<&Path>, output: OutputMode) -> anyhow::Result<()> {
    let graph = match load_graph(graph_flag) {
        Ok(g) => g,
        Err(e) => return fail(output, e),
    };

    let order = match graph.topological_sort() {
        Ok(nodes) => owned_keys(nodes.into_iter()),
        Err(e) => return fail(output, e),
    };

    render_mode(
        output,
        &TopoOutput { order },
        |r, w| key_line(w, &r.order),
        |r, w| {
            pretty_section(w, "Topological order")?;
            for (i, key) in r.order.iter().enumerate() {
                writeln!(w, "{:>3}. {key}", i + 1)?;
            }
            Ok(())
        },
    )
}
