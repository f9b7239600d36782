//! Schema definition types.

use nset_core::Field;
use std::fmt;

/// Identifier for a node type in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Physical layout of one node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSchema {
    /// Type name the schema was registered under.
    pub name: String,
    /// Table (entity) name; defaults to the type name.
    pub table: String,
    /// Column holding the node identity.
    pub id_column: String,
    /// Column holding the parent identity.
    pub parent_column: String,
    /// Column holding the left boundary.
    pub left_column: String,
    /// Column holding the right boundary.
    pub right_column: String,
    /// Column holding the level.
    pub level_column: String,
}

impl NodeSchema {
    /// Schema with the conventional column names.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            table: name.clone(),
            name,
            id_column: "id".to_string(),
            parent_column: "parent_id".to_string(),
            left_column: "lft".to_string(),
            right_column: "rgt".to_string(),
            level_column: "level".to_string(),
        }
    }

    /// Physical column for a logical field.
    pub fn column(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id_column,
            Field::Parent => &self.parent_column,
            Field::Left => &self.left_column,
            Field::Right => &self.right_column,
            Field::Level => &self.level_column,
        }
    }

    /// Logical field stored in a physical column, if any.
    pub fn field_of(&self, column: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.column(*f) == column)
    }

    pub(crate) fn column_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Id => &mut self.id_column,
            Field::Parent => &mut self.parent_column,
            Field::Left => &mut self.left_column,
            Field::Right => &mut self.right_column,
            Field::Level => &mut self.level_column,
        }
    }
}

impl Default for NodeSchema {
    fn default() -> Self {
        Self::new("node")
    }
}
