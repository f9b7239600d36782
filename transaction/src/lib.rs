//! nset Transaction
//!
//! Atomic wrapping of a tree store.
//!
//! Responsibilities:
//! - Implement BEGIN/COMMIT/ROLLBACK over store snapshots
//! - Savepoints inside an active transaction
//! - Run a closure atomically, rolling back when it fails

mod error;
mod manager;
mod restore;

pub use error::{TransactionError, TransactionResult};
pub use manager::{atomically, TransactionManager, TransactionState};
pub use restore::Restorable;
