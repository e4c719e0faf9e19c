//! `canon reachable` — is there a path from one node to another?

use std::path::Path;

use clap::Args;
use serde::Serialize;

use crate::cmd::{fail, load_graph};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `canon reachable`.
#[derive(Args, Debug)]
pub struct ReachableArgs {
    /// Key of the node the path starts at.
    pub from: String,

    /// Key of the node the path should reach.
    pub to: String,
}

#[derive(Debug, Serialize)]
struct ReachableOutput {
    from: String,
    to: String,
    reachable: bool,
}

/// Check reachability and print `true` or `false`.
///
/// # Errors
///
/// Returns an error if the graph cannot be loaded or either key is unknown.
pub fn run_reachable(
    args: &ReachableArgs,
    graph_flag: Option<&Path>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let graph = match load_graph(graph_flag) {
        Ok(g) => g,
        Err(e) => return fail(output, e),
    };

    let reachable = match graph.is_reachable(&args.from, &args.to) {
        Ok(r) => r,
        Err(e) => return fail(output, e),
    };

    let result = ReachableOutput {
        from: args.from.clone(),
        to: args.to.clone(),
        reachable,
    };

    render_mode(
        output,
        &result,
        |r, w| writeln!(w, "{}", r.reachable),
        |r, w| {
            pretty_section(w, "Reachability")?;
            pretty_kv(w, "from", &r.from)?;
            pretty_kv(w, "to", &r.to)?;
            pretty_kv(w, "reachable", if r.reachable { "yes" } else { "no" })
        },
    )
}
