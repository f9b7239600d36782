//! Mutation error types.

use nset_core::{NodeId, NodeInterval, StoreError};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
///
/// None of these is retried. Any error aborts the remaining steps of the
/// operation; undoing the steps already applied is left to the enclosing
/// transaction.
#[derive(Debug, Error)]
pub enum MutationError {
    /// The stored tree contradicts its own encoding, e.g. a node with
    /// `level > 0` has no ancestor one level up.
    #[error("Tree is malformed at {node}: {message}")]
    StructuralCorruption { node: NodeId, message: String },

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The record passed in no longer matches the stored row.
    #[error("Stale interval for {node}: given {given}, stored {stored}")]
    StaleInterval {
        node: NodeId,
        given: NodeInterval,
        stored: NodeInterval,
    },

    #[error("Node already exists in the table: {0}")]
    NodeAlreadyExists(NodeId),

    #[error("Cannot move {node} next to or under {target}: target lies inside the moved subtree")]
    InvalidMove { node: NodeId, target: NodeId },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl MutationError {
    pub fn structural_corruption(node: NodeId, message: impl Into<String>) -> Self {
        Self::StructuralCorruption {
            node,
            message: message.into(),
        }
    }

    pub fn stale_interval(given: NodeInterval, stored: NodeInterval) -> Self {
        Self::StaleInterval {
            node: given.id,
            given,
            stored,
        }
    }

    pub fn invalid_move(node: NodeId, target: NodeId) -> Self {
        Self::InvalidMove { node, target }
    }
}
