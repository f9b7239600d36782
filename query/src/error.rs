//! Query error types.

use nset_core::{NodeId, StoreError};
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur during query execution.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Intervals that cannot be nested into a tree.
    #[error("Malformed tree at {node}: {message}")]
    Malformed { node: NodeId, message: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl QueryError {
    pub fn malformed(node: NodeId, message: impl Into<String>) -> Self {
        Self::Malformed {
            node,
            message: message.into(),
        }
    }
}
