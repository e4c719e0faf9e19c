//! `canon cycle` — report a cycle reachable from a start node.

use std::path::Path;

use clap::Args;
use serde::Serialize;

use crate::cmd::{fail, load_graph};
use crate::output::{OutputMode, key_line, pretty_kv, pretty_section, render_mode};

/// Arguments for `canon cycle`.
#[derive(Args, Debug)]
pub struct CycleArgs {
    /// Key of the node to search from.
    pub start: String,
}

#[derive(Debug, Serialize)]
struct CycleOutput {
    start: String,
    cycle_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cycle: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Search for a cycle and print `true`/`false`, then the cycle path if any.
///
/// # Errors
///
/// Returns an error if the graph cannot be loaded or `start` is unknown.
pub fn run_cycle(
    args: &CycleArgs,
    graph_flag: Option<&Path>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let graph = match load_graph(graph_flag) {
        Ok(g) => g,
        Err(e) => return fail(output, e),
    };

    let cycle = match graph.find_cycle_from(&args.start) {
        Ok(c) => c,
        Err(e) => return fail(output, e),
    };

    let result = CycleOutput {
        start: args.start.clone(),
        cycle_exists: cycle.is_some(),
        description: cycle.as_ref().map(ToString::to_string),
        cycle: cycle.map(|c| c.path),
    };

    render_mode(
        output,
        &result,
        |r, w| {
            writeln!(w, "{}", r.cycle_exists)?;
            match &r.cycle {
                Some(path) => key_line(w, path),
                None => Ok(()),
            }
        },
        |r, w| {
            pretty_section(w, "Cycle search")?;
            pretty_kv(w, "start", &r.start)?;
            match &r.description {
                Some(description) => writeln!(w, "{description}"),
                None => writeln!(w, "no cycle reachable from '{}'", r.start),
            }
        },
    )
}
