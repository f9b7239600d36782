//! nset Query
//!
//! Read operations on nested set trees.
//!
//! Responsibilities:
//! - Answer children/parent/ancestors/descendants with single range lookups
//! - Assemble a scope into nested `TreeNode`s and export it as JSON
//! - Verify the interval invariants of a scope

mod error;
mod reader;
mod tree;
mod verify;

pub use error::{QueryError, QueryResult};
pub use reader::TreeReader;
pub use tree::TreeNode;
pub use verify::{verify, Violation};
