//! Graph-specific error types.

use std::fmt::Display;

use wf_core::WfError;

/// Errors raised by graph queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An operation referenced a node id not present in the graph.
    #[error("Node not found: {node}")]
    NodeNotFound { node: String },
}

impl GraphError {
    /// Build a `NodeNotFound` for any displayable key.
    pub fn node_not_found(node: &impl Display) -> Self {
        GraphError::NodeNotFound {
            node: node.to_string(),
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for WfError {
    fn from(err: GraphError) -> Self {
        WfError::NotFound {
            what: err.to_string(),
        }
    }
}
