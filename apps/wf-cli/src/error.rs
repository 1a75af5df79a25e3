//! Error types for the wf-cli adapter.

use std::path::PathBuf;

/// Adapter error type wrapping file, parse, and core graph failures.
///
/// Raw text parsing is entirely the adapter's concern; the core only
/// raises [`wf_graph::GraphError`] for already-parsed bad input such as a
/// query on a nonexistent node.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read graph file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed graph file at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Graph error: {0}")]
    Graph(#[from] wf_graph::GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wf-cli operations.
pub type CliResult<T> = Result<T, CliError>;
