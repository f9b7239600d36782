//! Transaction error types.

use nset_core::StoreError;
use nset_mutation::MutationError;
use thiserror::Error;

/// Transaction errors.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// No transaction is active.
    #[error("no transaction is active")]
    NoActiveTransaction,

    /// Transaction is already active.
    #[error("transaction already active")]
    AlreadyActive,

    /// Savepoint not found.
    #[error("savepoint not found: {name}")]
    SavepointNotFound { name: String },

    /// Mutation error during transaction.
    #[error("mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl TransactionError {
    pub fn savepoint_not_found(name: impl Into<String>) -> Self {
        Self::SavepointNotFound { name: name.into() }
    }
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
