//! nset core types
//!
//! This crate provides the foundational types shared by the nested set crates:
//! - Identity type (NodeId)
//! - Logical node fields (Field)
//! - Stored column values (Value)
//! - The node interval record (NodeInterval)
//! - Store error types

mod error;
mod field;
mod id;
mod interval;
mod value;

pub use error::*;
pub use field::*;
pub use id::*;
pub use interval::*;
pub use value::*;
