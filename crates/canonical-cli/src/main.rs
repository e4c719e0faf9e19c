#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cmd::traverse::Walk;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "canon: graph traversal and dynamic-programming exercises",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML graph definition (defaults to $CANON_GRAPH, then the league graph).
    #[arg(long, global = true, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Traversal",
        about = "Depth-first traversal from a node",
        long_about = "Walk the graph depth-first from START and print the visit order.\n\nNeighbors are explored in insertion order; nodes on a cycle are visited once.",
        after_help = "EXAMPLES:\n    # Walk the league graph from Chelsea\n    canon dfs Chelsea\n\n    # Walk a graph file\n    canon --graph deps.toml dfs app"
    )]
    Dfs(cmd::traverse::WalkArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Breadth-first traversal from a node",
        long_about = "Walk the graph breadth-first from START and print the visit order.",
        after_help = "EXAMPLES:\n    # Walk the league graph from Chelsea\n    canon bfs Chelsea\n\n    # Emit machine-readable output\n    canon bfs Chelsea --format json"
    )]
    Bfs(cmd::traverse::WalkArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Check whether one node can reach another",
        long_about = "Print true if a directed path of at least one edge leads from FROM to TO.",
        after_help = "EXAMPLES:\n    # Did Chelsea's results chain reach Manchester United?\n    canon reachable Chelsea ManUtd"
    )]
    Reachable(cmd::reach::ReachableArgs),

    #[command(
        next_help_heading = "Ordering",
        about = "Topological order of the whole graph",
        long_about = "Print every node so that each edge points forward.\n\nFails with E2002 and the offending cycle if the graph is cyclic.",
        after_help = "EXAMPLES:\n    # Order a dependency file\n    canon --graph deps.toml topo"
    )]
    Topo,

    #[command(
        next_help_heading = "Ordering",
        about = "Look for a cycle reachable from a node",
        long_about = "Print true and the cycle path if a cycle is reachable from START, else false.",
        after_help = "EXAMPLES:\n    # The league graph has a results cycle through Barcelona\n    canon cycle Barcelona"
    )]
    Cycle(cmd::cycles::CycleArgs),

    #[command(
        next_help_heading = "Ordering",
        about = "List nodes and their weighted edges",
        after_help = "EXAMPLES:\n    # Inspect the loaded graph\n    canon nodes\n\n    # As JSON\n    canon nodes --json"
    )]
    Nodes,

    #[command(
        next_help_heading = "Dynamic programming",
        about = "Longest common subsequence of two strings",
        after_help = "EXAMPLES:\n    # Reference strings\n    canon lcs\n\n    # Your own\n    canon lcs AGGTAB GXTXAYB"
    )]
    Lcs(cmd::dp::LcsArgs),

    #[command(
        next_help_heading = "Dynamic programming",
        about = "Minimum insertions to make a string a palindrome",
        after_help = "EXAMPLES:\n    # Reference input (Ab3bd)\n    canon palindrome\n\n    # Your own\n    canon palindrome google"
    )]
    Palindrome(cmd::dp::PalindromeArgs),

    #[command(
        next_help_heading = "Dynamic programming",
        about = "Run the league walkthrough and both DP examples",
        after_help = "EXAMPLES:\n    canon demo\n    canon demo --format text"
    )]
    Demo,

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash\n    canon completions bash > ~/.local/share/bash-completion/completions/canon"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CANON_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "canonical=debug,info"
        } else {
            "canonical=info,warn"
        })
    });

    let format = env::var("CANON_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    let graph = cli.graph.as_deref();

    match cli.command {
        Commands::Dfs(ref args) => cmd::traverse::run_walk(Walk::Dfs, args, graph, output),
        Commands::Bfs(ref args) => cmd::traverse::run_walk(Walk::Bfs, args, graph, output),
        Commands::Reachable(ref args) => cmd::reach::run_reachable(args, graph, output),
        Commands::Topo => cmd::topo::run_topo(graph, output),
        Commands::Cycle(ref args) => cmd::cycles::run_cycle(args, graph, output),
        Commands::Nodes => cmd::nodes::run_nodes(graph, output),
        Commands::Lcs(ref args) => cmd::dp::run_lcs(args, output),
        Commands::Palindrome(ref args) => cmd::dp::run_palindrome(args, output),
        Commands::Demo => cmd::demo::run_demo(output),
        Commands::Completions(ref args) => cmd::completions::run_completions(args, Cli::command()),
    }
}
