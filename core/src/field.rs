//! Logical roles of the columns a nested set row carries.

use std::fmt;

/// A logical node field.
///
/// The engine only ever talks about these roles; the physical column that
/// holds each role is resolved per node type by the schema registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Parent,
    Left,
    Right,
    Level,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Parent,
        Field::Left,
        Field::Right,
        Field::Level,
    ];

    /// Logical name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Parent => "parent",
            Field::Left => "left",
            Field::Right => "right",
            Field::Level => "level",
        }
    }

    /// Returns true for the integer-valued positional fields.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Left | Field::Right | Field::Level)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
