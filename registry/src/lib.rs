//! nset Registry
//!
//! Runtime schema lookup: which physical column holds the id, parent, left,
//! right and level of each node type. Schemas are registered once through
//! `SchemaRegistryBuilder` and the resulting registry is immutable.

mod builder;
mod registry;
mod types;

pub use builder::{NodeTypeBuilder, RegistryError, SchemaRegistryBuilder};
pub use registry::SchemaRegistry;
pub use types::*;
