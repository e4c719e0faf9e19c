//! canonical-core library.
//!
//! Textbook exercises with a real API around them:
//!
//! - [`graph`] — adjacency-list graph with DFS, BFS, reachability,
//!   topological sort, and cycle detection.
//! - [`dp`] — longest common subsequence and minimum palindrome insertions.
//! - [`config`] — TOML graph definitions.
//! - [`demo`] — the built-in league graph and sample DP inputs.
//!
//! # Conventions
//!
//! - **Errors**: graph operations return [`error::GraphError`]; file loading
//!   returns `anyhow::Result`.
//! - **Logging**: `tracing` macros only. The library never prints.

pub mod config;
pub mod demo;
pub mod dp;
pub mod error;
pub mod graph;

pub use error::{ErrorCode, GraphError};
pub use graph::{Graph, Node, NodeIndex};
