//! The SchemaRegistry - immutable schema lookup.

use crate::{NodeSchema, RegistryError, TypeId};
use std::collections::HashMap;

/// The SchemaRegistry resolves node types to their physical layout.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    /// Schemas by type ID.
    schemas: HashMap<TypeId, NodeSchema>,
    /// Type ID lookup by name.
    names: HashMap<String, TypeId>,
}

impl SchemaRegistry {
    pub(crate) fn new(schemas: HashMap<TypeId, NodeSchema>, names: HashMap<String, TypeId>) -> Self {
        Self { schemas, names }
    }

    /// Get a schema by type ID.
    pub fn get(&self, id: TypeId) -> Option<&NodeSchema> {
        self.schemas.get(&id)
    }

    /// Get a schema by type name.
    pub fn get_by_name(&self, name: &str) -> Option<&NodeSchema> {
        self.names.get(name).and_then(|id| self.schemas.get(id))
    }

    /// Get a type ID by name.
    pub fn type_id(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Resolve a type name, failing if it was never registered.
    pub fn resolve(&self, name: &str) -> Result<&NodeSchema, RegistryError> {
        self.get_by_name(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))
    }

    /// Number of registered node types.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over all registered schemas.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &NodeSchema)> {
        self.schemas.iter().map(|(id, schema)| (*id, schema))
    }
}
