//! Store error types.
//!
//! Every failure reported by a data store adapter is a `StoreError`. The
//! mutation engine propagates these unchanged.

use crate::NodeId;
use thiserror::Error;

/// Errors that can occur inside a data store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A row with this identity already exists.
    #[error("Duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// A row does not carry a column the schema requires.
    #[error("Missing column {column} on node {node}")]
    MissingColumn { node: NodeId, column: String },

    /// An update expression does not fit the stored value.
    #[error("Type mismatch on column {column}: expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },

    /// A row could not be read back as a node interval.
    #[error("Malformed row: {0}")]
    MalformedRow(String),

    /// Any other backend failure (connectivity, constraints, injected faults).
    #[error("Store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn missing_column(node: NodeId, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            node,
            column: column.into(),
        }
    }

    pub fn type_mismatch(
        column: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn malformed_row(message: impl Into<String>) -> Self {
        Self::MalformedRow(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
