use std::fmt;

use crate::graph::Cycle;

/// Errors raised by graph construction and queries.
///
/// Every variant is a broken precondition on the caller's side. None of them
/// is expected at runtime in a correct program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node key was empty.
    #[error("node key must not be empty")]
    EmptyKey,

    /// A node with this key is already in the graph.
    #[error("node '{key}' already exists")]
    DuplicateNode { key: String },

    /// The source node already has an outgoing edge to the destination.
    #[error("edge '{from}' -> '{to}' already exists")]
    DuplicateEdge { from: String, to: String },

    /// No node with this key is in the graph.
    #[error("node '{key}' not found")]
    NodeNotFound { key: String },

    /// The operation requires an acyclic graph.
    #[error("{0}")]
    CycleDetected(Cycle),
}

impl GraphError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyKey => ErrorCode::EmptyKey,
            Self::DuplicateNode { .. } => ErrorCode::DuplicateNode,
            Self::DuplicateEdge { .. } => ErrorCode::DuplicateEdge,
            Self::NodeNotFound { .. } => ErrorCode::NodeNotFound,
            Self::CycleDetected(_) => ErrorCode::CycleDetected,
        }
    }
}

/// Machine-readable error codes for scripting against the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyKey,
    DuplicateNode,
    DuplicateEdge,
    NodeNotFound,
    CycleDetected,
    GraphFileInvalid,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyKey => "E1001",
            Self::DuplicateNode => "E1002",
            Self::DuplicateEdge => "E1003",
            Self::NodeNotFound => "E2001",
            Self::CycleDetected => "E2002",
            Self::GraphFileInvalid => "E3001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyKey => "Empty node key",
            Self::DuplicateNode => "Node already exists",
            Self::DuplicateEdge => "Edge already exists",
            Self::NodeNotFound => "Node not found",
            Self::CycleDetected => "Graph contains a cycle",
            Self::GraphFileInvalid => "Graph file parse error",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::EmptyKey => Some("Give every node a non-empty key."),
            Self::DuplicateNode => Some("Declare each node once; edges add missing nodes on their own."),
            Self::DuplicateEdge => Some("Remove the repeated edge from the graph definition."),
            Self::NodeNotFound => Some("Run `canon nodes` to list the keys in the graph."),
            Self::CycleDetected => Some("Remove an edge on the reported cycle to make the graph a DAG."),
            Self::GraphFileInvalid => Some("Fix the TOML syntax in the graph file and retry."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
