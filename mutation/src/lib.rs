//! nset Mutation
//!
//! Structural writes on nested set trees (REMOVE/INSERT/MOVE/REBUILD).
//!
//! Responsibilities:
//! - Remove a single node, promoting its children one level up
//! - Remove a whole subtree
//! - Insert and move nodes relative to a target node
//! - Renumber the rest of the tree so the interval invariants keep holding
//!
//! Every operation is a fixed sequence of scoped store statements computed
//! from the intervals passed in. The sequence is not atomic on its own: run
//! it inside one transaction of the backing store.
//!
//! # Module Structure
//!
//! - `executor` - `TreeMutator`, the entry point bound to a store and a scope
//! - `ops/` - Individual operation implementations (remove, insert, move, rebuild)
//! - `shift` - The boundary-shift primitive every operation is built on
//! - `position` - Where an inserted or moved node lands relative to its target
//! - `error` - Error types for mutation failures
//! - `result` - Result types for mutation outcomes

mod error;
mod executor;
mod lookup;
mod ops;
mod position;
mod result;
mod shift;

pub use error::{MutationError, MutationResult};
pub use executor::TreeMutator;
pub use position::Position;
pub use result::{MutationOutcome, Relocation, Removal};
pub use shift::{shift_bounds, shift_field};
