//! In-memory adapter for the data store port.
//!
//! Rows are column maps keyed by the physical column names of a
//! `NodeSchema`, the same way a relational table would hold them. Every
//! logical field in a predicate or update is resolved through the schema.

use crate::query::{Column, Direction, OrderBy, Predicate, RangeUpdate, UpdateExpr};
use crate::store::TreeStore;
use nset_core::{Field, NodeId, NodeInterval, StoreError, StoreResult, Value};
use nset_registry::NodeSchema;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A stored row: physical column name -> value.
pub type Row = BTreeMap<String, Value>;

/// The in-memory node table.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Physical layout of the rows
    schema: NodeSchema,
    /// Row storage, keyed by identity
    rows: BTreeMap<NodeId, Row>,
    /// Number of write statements issued
    writes: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(NodeSchema::default())
    }
}

impl MemoryStore {
    /// Create an empty table with the given layout.
    pub fn new(schema: NodeSchema) -> Self {
        Self {
            schema,
            rows: BTreeMap::new(),
            writes: 0,
        }
    }

    pub fn schema(&self) -> &NodeSchema {
        &self.schema
    }

    /// Number of rows across all scopes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of update, delete and insert statements issued so far,
    /// including statements that matched no row.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Get the raw row of a node.
    pub fn row(&self, id: NodeId) -> Option<&Row> {
        self.rows.get(&id)
    }

    /// Read a node back as an interval record, ignoring scopes.
    pub fn get(&self, id: NodeId) -> StoreResult<Option<NodeInterval>> {
        self.rows.get(&id).map(|row| self.read(id, row)).transpose()
    }

    /// Copy of every row, for later `restore`.
    pub fn snapshot(&self) -> BTreeMap<NodeId, Row> {
        self.rows.clone()
    }

    /// Replace all rows with a snapshot. The write counter is kept.
    pub fn restore(&mut self, rows: BTreeMap<NodeId, Row>) {
        tracing::trace!(rows = rows.len(), "restoring snapshot");
        self.rows = rows;
    }

    fn column_name<'a>(&'a self, column: &'a Column) -> &'a str {
        match column {
            Column::Field(field) => self.schema.column(*field),
            Column::Named(name) => name,
        }
    }

    fn matches(&self, row: &Row, predicate: &Predicate) -> bool {
        predicate.conditions().iter().all(|condition| {
            let stored = row
                .get(self.column_name(&condition.column))
                .unwrap_or(&Value::Null);
            condition.matches(stored)
        })
    }

    fn read_int(&self, id: NodeId, row: &Row, field: Field) -> StoreResult<i64> {
        let column = self.schema.column(field);
        let value = row
            .get(column)
            .ok_or_else(|| StoreError::missing_column(id, column))?;
        value
            .as_int()
            .ok_or_else(|| StoreError::type_mismatch(column, "Int", value.type_name()))
    }

    fn read(&self, id: NodeId, row: &Row) -> StoreResult<NodeInterval> {
        let parent_column = self.schema.column(Field::Parent);
        let parent_id = match row.get(parent_column) {
            None => None,
            Some(value) if value.is_null() => None,
            Some(value) => Some(value.as_node_ref().ok_or_else(|| {
                StoreError::type_mismatch(parent_column, "NodeRef", value.type_name())
            })?),
        };

        Ok(NodeInterval {
            id,
            parent_id,
            left: self.read_int(id, row, Field::Left)?,
            right: self.read_int(id, row, Field::Right)?,
            level: self.read_int(id, row, Field::Level)?,
        })
    }

    fn matching_ids(&self, predicate: &Predicate) -> Vec<NodeId> {
        self.rows
            .iter()
            .filter(|(_, row)| self.matches(row, predicate))
            .map(|(id, _)| *id)
            .collect()
    }

    fn matching(&self, predicate: &Predicate) -> StoreResult<Vec<NodeInterval>> {
        self.rows
            .iter()
            .filter(|(_, row)| self.matches(row, predicate))
            .map(|(id, row)| self.read(*id, row))
            .collect()
    }

    /// Compute the new column values of one row without writing them.
    fn assigned_values(
        &self,
        id: NodeId,
        row: &Row,
        update: &RangeUpdate,
    ) -> StoreResult<Vec<(String, Value)>> {
        let mut values = Vec::with_capacity(update.assignments.len());
        for (field, expr) in &update.assignments {
            let column = self.schema.column(*field);
            if *field == Field::Id {
                return Err(StoreError::backend(format!(
                    "identity column {} cannot be updated",
                    column
                )));
            }
            let value = match expr {
                UpdateExpr::Set(value) => value.clone(),
                UpdateExpr::Add(delta) => Value::Int(self.read_int(id, row, *field)? + delta),
            };
            values.push((column.to_string(), value));
        }
        Ok(values)
    }
}

fn compare_field(a: &NodeInterval, b: &NodeInterval, field: Field) -> Ordering {
    match field {
        Field::Id => a.id.cmp(&b.id),
        Field::Parent => a.parent_id.cmp(&b.parent_id),
        Field::Left => a.left.cmp(&b.left),
        Field::Right => a.right.cmp(&b.right),
        Field::Level => a.level.cmp(&b.level),
    }
}

fn sort(nodes: &mut [NodeInterval], order: Option<OrderBy>) {
    if let Some(order) = order {
        nodes.sort_by(|a, b| {
            let ordering = compare_field(a, b, order.field);
            let ordering = match order.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });
    }
}

impl TreeStore for MemoryStore {
    fn range_update(&mut self, update: &RangeUpdate) -> StoreResult<usize> {
        self.writes += 1;

        // Select and evaluate everything first, then write.
        let targets = self.matching_ids(&update.predicate);
        let mut changes = Vec::with_capacity(targets.len());
        for id in targets {
            let row = self
                .rows
                .get(&id)
                .ok_or_else(|| StoreError::backend(format!("row {} vanished", id)))?;
            changes.push((id, self.assigned_values(id, row, update)?));
        }

        let count = changes.len();
        for (id, values) in changes {
            if let Some(row) = self.rows.get_mut(&id) {
                row.extend(values);
            }
        }

        tracing::trace!(predicate = %update.predicate, rows = count, "range update");
        Ok(count)
    }

    fn range_delete(&mut self, predicate: &Predicate) -> StoreResult<usize> {
        self.writes += 1;

        let targets = self.matching_ids(predicate);
        for id in &targets {
            self.rows.remove(id);
        }

        tracing::trace!(predicate = %predicate, rows = targets.len(), "range delete");
        Ok(targets.len())
    }

    fn find_one(
        &self,
        predicate: &Predicate,
        order: Option<OrderBy>,
    ) -> StoreResult<Option<NodeInterval>> {
        let mut nodes = self.matching(predicate)?;
        sort(&mut nodes, order);
        Ok(nodes.into_iter().next())
    }

    fn select(
        &self,
        predicate: &Predicate,
        order: Option<OrderBy>,
    ) -> StoreResult<Vec<NodeInterval>> {
        let mut nodes = self.matching(predicate)?;
        sort(&mut nodes, order);
        Ok(nodes)
    }

    fn insert(&mut self, node: &NodeInterval, tags: &[(String, Value)]) -> StoreResult<()> {
        self.writes += 1;

        if self.rows.contains_key(&node.id) {
            return Err(StoreError::DuplicateId(node.id));
        }

        let mut row = Row::new();
        for (column, value) in tags {
            row.insert(column.clone(), value.clone());
        }
        row.insert(self.schema.column(Field::Id).to_string(), node.id.into());
        row.insert(
            self.schema.column(Field::Parent).to_string(),
            node.parent_id.into(),
        );
        row.insert(self.schema.column(Field::Left).to_string(), node.left.into());
        row.insert(
            self.schema.column(Field::Right).to_string(),
            node.right.into(),
        );
        row.insert(
            self.schema.column(Field::Level).to_string(),
            node.level.into(),
        );

        self.rows.insert(node.id, row);
        Ok(())
    }
}
