//! SchemaRegistryBuilder for constructing an immutable SchemaRegistry.

use crate::{NodeSchema, SchemaRegistry, TypeId};
use nset_core::Field;
use regex_lite::Regex;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Physical names must be plain SQL-style identifiers.
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Errors that can occur during registry construction or lookup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Invalid column name {column:?} on type {type_name}")]
    InvalidColumnName { type_name: String, column: String },

    #[error("Column {column} mapped to more than one field on type {type_name}")]
    DuplicateColumn { type_name: String, column: String },

    #[error("Invalid identifier pattern: {0}")]
    Pattern(String),
}

/// Builder for constructing an immutable SchemaRegistry.
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Schemas being built.
    schemas: HashMap<TypeId, NodeSchema>,
    /// Type name to ID mapping.
    names: HashMap<String, TypeId>,
}

impl SchemaRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node type. Columns default to `id`, `parent_id`, `lft`, `rgt`, `level`.
    pub fn add_type(&mut self, name: impl Into<String>) -> NodeTypeBuilder<'_> {
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        NodeTypeBuilder {
            builder: self,
            id,
            schema: NodeSchema::new(name),
        }
    }

    /// Build the immutable SchemaRegistry.
    pub fn build(self) -> SchemaRegistry {
        SchemaRegistry::new(self.schemas, self.names)
    }
}

/// Builder for a node type schema.
pub struct NodeTypeBuilder<'a> {
    builder: &'a mut SchemaRegistryBuilder,
    id: TypeId,
    schema: NodeSchema,
}

impl<'a> NodeTypeBuilder<'a> {
    /// Set the table name.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.schema.table = table.into();
        self
    }

    /// Map a logical field to a physical column.
    pub fn column(mut self, field: Field, column: impl Into<String>) -> Self {
        *self.schema.column_mut(field) = column.into();
        self
    }

    pub fn id(self, column: impl Into<String>) -> Self {
        self.column(Field::Id, column)
    }

    pub fn parent(self, column: impl Into<String>) -> Self {
        self.column(Field::Parent, column)
    }

    pub fn left(self, column: impl Into<String>) -> Self {
        self.column(Field::Left, column)
    }

    pub fn right(self, column: impl Into<String>) -> Self {
        self.column(Field::Right, column)
    }

    pub fn level(self, column: impl Into<String>) -> Self {
        self.column(Field::Level, column)
    }

    /// Finish building this type.
    pub fn done(self) -> Result<TypeId, RegistryError> {
        let name = self.schema.name.clone();
        if self.builder.names.contains_key(&name) {
            return Err(RegistryError::DuplicateTypeName(name));
        }

        let identifier =
            Regex::new(IDENTIFIER_PATTERN).map_err(|e| RegistryError::Pattern(e.to_string()))?;

        let mut seen = HashSet::new();
        for field in Field::ALL {
            let column = self.schema.column(field);
            if !identifier.is_match(column) {
                return Err(RegistryError::InvalidColumnName {
                    type_name: name,
                    column: column.to_string(),
                });
            }
            if !seen.insert(column.to_string()) {
                return Err(RegistryError::DuplicateColumn {
                    type_name: name,
                    column: column.to_string(),
                });
            }
        }
        if !identifier.is_match(&self.schema.table) {
            return Err(RegistryError::InvalidColumnName {
                type_name: name,
                column: self.schema.table.clone(),
            });
        }

        self.builder.names.insert(name, self.id);
        self.builder.schemas.insert(self.id, self.schema);

        Ok(self.id)
    }
}
