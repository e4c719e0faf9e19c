//! `canon lcs` / `canon palindrome` — the dynamic-programming exercises.

use clap::Args;
use serde::Serialize;

use canonical_core::demo::{LCS_X, LCS_Y, PALINDROME_INPUT};
use canonical_core::dp::{lcs, lcs_len, min_insertions_palindrome};

use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `canon lcs`.
#[derive(Args, Debug)]
pub struct LcsArgs {
    /// First string.
    #[arg(default_value = LCS_X)]
    pub x: String,

    /// Second string.
    #[arg(default_value = LCS_Y)]
    pub y: String,
}

/// Arguments for `canon palindrome`.
#[derive(Args, Debug)]
pub struct PalindromeArgs {
    /// String to turn into a palindrome.
    #[arg(default_value = PALINDROME_INPUT)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LcsOutput {
    pub x: String,
    pub y: String,
    pub lcs: String,
    pub length: usize,
}

impl LcsOutput {
    pub(crate) fn compute(x: &str, y: &str) -> Self {
        Self {
            x: x.to_string(),
            y: y.to_string(),
            lcs: lcs(x, y),
            length: lcs_len(x, y),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PalindromeOutput {
    pub input: String,
    pub insertions: usize,
}

impl PalindromeOutput {
    pub(crate) fn compute(input: &str) -> Self {
        Self {
            input: input.to_string(),
            insertions: min_insertions_palindrome(input),
        }
    }
}

/// Print the longest common subsequence of two strings.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_lcs(args: &LcsArgs, output: OutputMode) -> anyhow::Result<()> {
    let result = LcsOutput::compute(&args.x, &args.y);

    render_mode(
        output,
        &result,
        |r, w| writeln!(w, "{}", r.lcs),
        |r, w| {
            pretty_section(w, "Longest common subsequence")?;
            pretty_kv(w, "x", &r.x)?;
            pretty_kv(w, "y", &r.y)?;
            pretty_kv(w, "lcs", format!("{} (length {})", r.lcs, r.length))
        },
    )
}

/// Print the minimum number of insertions that make a string a palindrome.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_palindrome(args: &PalindromeArgs, output: OutputMode) -> anyhow::Result<()> {
    let result = PalindromeOutput::compute(&args.input);

    render_mode(
        output,
        &result,
        |r, w| writeln!(w, "{}", r.insertions),
        |r, w| {
            pretty_section(w, "Minimum palindrome insertions")?;
            pretty_kv(w, "input", &r.input)?;
            pretty_kv(w, "insertions", r.insertions.to_string())
        },
    )
}
