//! `canon completions` — print a shell completion script.

use std::io::{self, Write};

use clap::{Args, Command};
use clap_complete::{Shell, generate};

/// Name the scripts complete for.
const BIN_NAME: &str = "canon";

/// Arguments for `canon completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate the script for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `args.shell` to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn run_completions(args: &CompletionsArgs, mut command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_script(args.shell, &mut command, &mut out)?;
    Ok(())
}

fn write_script(shell: Shell, command: &mut Command, out: &mut dyn Write) -> io::Result<()> {
    generate(shell, command, BIN_NAME, out);
    out.flush()
}
