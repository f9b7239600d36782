//! nset Store
//!
//! The data store port the mutation engine talks to, and an in-memory adapter:
//! - Predicates and range updates over logical node fields
//! - Tree scopes (discriminators) narrowing every query to one tree
//! - The `TreeStore` trait: range update, range delete, single-row lookup
//! - `MemoryStore`: rows keyed by physical column names from the schema

mod memory;
mod query;
mod scope;
mod store;

pub use memory::{MemoryStore, Row};
pub use query::*;
pub use scope::{ColumnScope, TreeScope, WholeTable};
pub use store::TreeStore;
