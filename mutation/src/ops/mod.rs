//! Mutation operation implementations.
//!
//! Each operation (REMOVE, INSERT, MOVE, REBUILD) is implemented
//! in its own module for better organization and testability.

mod insert;
mod relocate;
mod rebuild;
mod remove;

pub use insert::{execute_insert, execute_insert_root};
pub use rebuild::execute_rebuild;
pub use relocate::execute_move;
pub use remove::{execute_remove_single, execute_remove_subtree};
