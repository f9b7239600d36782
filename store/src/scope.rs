//! Tree scopes (discriminators).
//!
//! Several independent trees may share one table. A scope narrows every
//! query the engine issues to a single tree and stamps the discriminator on
//! rows the engine inserts.

use crate::query::{Column, Condition, Predicate};
use nset_core::Value;

/// Narrows store operations to one logical tree.
pub trait TreeScope {
    /// Add the scope's conditions to a predicate.
    ///
    /// Must be idempotent: applying a scope twice yields the same predicate
    /// as applying it once.
    fn apply(&self, predicate: Predicate) -> Predicate;

    /// Discriminator columns written on newly inserted rows.
    fn tags(&self) -> Vec<(String, Value)> {
        Vec::new()
    }
}

/// The whole table is one tree scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WholeTable;

impl TreeScope for WholeTable {
    fn apply(&self, predicate: Predicate) -> Predicate {
        predicate
    }
}

/// Trees discriminated by the value of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnScope {
    column: String,
    value: Value,
}

impl ColumnScope {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    fn condition(&self) -> Condition {
        Condition::new(
            Column::Named(self.column.clone()),
            crate::CmpOp::Eq,
            self.value.clone(),
        )
    }
}

impl TreeScope for ColumnScope {
    fn apply(&self, predicate: Predicate) -> Predicate {
        let condition = self.condition();
        if predicate.contains(&condition) {
            predicate
        } else {
            predicate.and(condition)
        }
    }

    fn tags(&self) -> Vec<(String, Value)> {
        vec![(self.column.clone(), self.value.clone())]
    }
}

impl<T: TreeScope + ?Sized> TreeScope for &T {
    fn apply(&self, predicate: Predicate) -> Predicate {
        (**self).apply(predicate)
    }

    fn tags(&self) -> Vec<(String, Value)> {
        (**self).tags()
    }
}
