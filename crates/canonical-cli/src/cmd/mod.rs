//! Subcommand implementations for `canon`.
//!
//! Every command loads its graph through [`load_graph`], renders through
//! [`crate::output`], and reports failures with [`fail`].

pub mod completions;
pub mod cycles;
pub mod demo;
pub mod dp;
pub mod nodes;
pub mod reach;
pub mod topo;
pub mod traverse;

use std::path::Path;

use canonical_core::{Graph, config, demo as league};
use tracing::{debug, warn};

use crate::output::{CliError, OutputMode, render_error};

/// Load the graph named by `--graph`, then `CANON_GRAPH`, else the league.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or built.
pub fn load_graph(flag: Option<&Path>) -> anyhow::Result<Graph> {
    match config::resolve_graph_path(flag) {
        Some(path) => {
            debug!(path = %path.display(), "loading graph file");
            let graph = config::load_graph(&path)?;
            if graph.is_empty() {
                warn!(path = %path.display(), "graph file defines no nodes");
            }
            Ok(graph)
        }
        None => {
            debug!("no graph file given, using the league graph");
            league::league()
        }
    }
}

/// Render `err` for the user and return it for propagation.
///
/// # Errors
///
/// Always returns `err`, or the rendering failure if stderr is unwritable.
pub fn fail<T>(output: OutputMode, err: impl Into<anyhow::Error>) -> anyhow::Result<T> {
    let err = err.into();
    render_error(output, &CliError::from(&err))?;
    Err(err)
}

/// Collect traversal keys into owned strings for output.
#[must_use]
pub fn owned_keys<'g>(walk: impl Iterator<Item = &'g canonical_core::Node>) -> Vec<String> {
    walk.map(|node| node.key().to_string()).collect()
}
