//! `canon demo` — the league walkthrough plus both DP examples.
//!
//! Always runs on the built-in league graph; `--graph` is ignored here
//! because the walkthrough probes fixed team names.

use serde::Serialize;

use canonical_core::demo::{
    self as league, LCS_X, LCS_Y, LeagueReport, PALINDROME_INPUT, REACH_TARGET, WALK_START,
};

use crate::cmd::dp::{LcsOutput, PalindromeOutput};
use crate::cmd::fail;
use crate::output::{OutputMode, key_line, pretty_kv, pretty_rule, pretty_section, render_mode};

#[derive(Debug, Serialize)]
struct DemoOutput {
    league: LeagueReport,
    lcs: LcsOutput,
    palindrome: PalindromeOutput,
}

/// Run the walkthrough and print every stage.
///
/// # Errors
///
/// Returns an error if the league graph cannot be built or traversed.
pub fn run_demo(output: OutputMode) -> anyhow::Result<()> {
    let report = match league::league()
        .and_then(|g| league::walkthrough(&g).map_err(anyhow::Error::from))
    {
        Ok(report) => report,
        Err(e) => return fail(output, e),
    };

    let result = DemoOutput {
        league: report,
        lcs: LcsOutput::compute(LCS_X, LCS_Y),
        palindrome: PalindromeOutput::compute(PALINDROME_INPUT),
    };

    render_mode(
        output,
        &result,
        |r, w| {
            if let Some(cycle) = &r.league.cycle {
                writeln!(w, "Cycle exists in graph")?;
                key_line(w, cycle)?;
            }
            writeln!(w, "Dfs starting from {WALK_START} node is:")?;
            key_line(w, &r.league.dfs)?;
            writeln!(w, "Bfs starting from {WALK_START} node is:")?;
            key_line(w, &r.league.bfs)?;
            if r.league.reachable {
                writeln!(w, "{WALK_START} defeated {REACH_TARGET}.")?;
            }
            writeln!(w, "Topological sort of teams:")?;
            key_line(w, &r.league.topological)?;
            writeln!(w, "x   : {}", r.lcs.x)?;
            writeln!(w, "y   : {}", r.lcs.y)?;
            writeln!(w, "lcs : {} with length = {}", r.lcs.lcs, r.lcs.length)?;
            writeln!(w, "z: {}", r.palindrome.input)?;
            writeln!(w, "mcpCount: {}", r.palindrome.insertions)
        },
        |r, w| {
            pretty_section(w, "League")?;
            match &r.league.cycle {
                Some(cycle) => pretty_kv(w, "cycle", cycle.join(" → "))?,
                None => pretty_kv(w, "cycle", "none")?,
            }
            if let Some((from, to)) = &r.league.removed_edge {
                pretty_kv(w, "removed", format!("{from} → {to}"))?;
            }
            pretty_kv(w, "dfs", r.league.dfs.join(" "))?;
            pretty_kv(w, "bfs", r.league.bfs.join(" "))?;
            pretty_kv(
                w,
                "reachable",
                format!("{WALK_START} → {REACH_TARGET}: {}", r.league.reachable),
            )?;
            pretty_kv(w, "topological", r.league.topological.join(" "))?;
            writeln!(w)?;
            pretty_section(w, "Dynamic programming")?;
            pretty_kv(w, "x", &r.lcs.x)?;
            pretty_kv(w, "y", &r.lcs.y)?;
            pretty_kv(w, "lcs", format!("{} (length {})", r.lcs.lcs, r.lcs.length))?;
            pretty_rule(w)?;
            pretty_kv(w, "input", &r.palindrome.input)?;
            pretty_kv(w, "insertions", r.palindrome.insertions.to_string())
        },
    )
}
