//! Predicates, orderings and range updates.
//!
//! These are the only query shapes the engine issues: conjunctions of simple
//! comparisons, an optional single-column ordering, and field assignments
//! that either set a value or add a delta.

use nset_core::{Field, Value};
use std::cmp::Ordering;
use std::fmt;

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CmpOp {
    /// Evaluate the operator against the ordering of `stored` relative to the operand.
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            CmpOp::Eq => ordering == Ordering::Equal,
            CmpOp::Lt => ordering == Ordering::Less,
            CmpOp::Gt => ordering == Ordering::Greater,
            CmpOp::Le => ordering != Ordering::Greater,
            CmpOp::Ge => ordering != Ordering::Less,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
        }
    }
}

/// Column a condition refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// One of the logical node fields, resolved through the schema.
    Field(Field),
    /// A physical column outside the node fields, e.g. a tree discriminator.
    Named(String),
}

impl From<Field> for Column {
    fn from(field: Field) -> Self {
        Column::Field(field)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Field(field) => write!(f, "{}", field),
            Column::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A single comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: Column,
    pub op: CmpOp,
    pub value: Value,
}

impl Condition {
    pub fn new(column: impl Into<Column>, op: CmpOp, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluate against a stored value. Values of another kind never match.
    pub fn matches(&self, stored: &Value) -> bool {
        stored
            .compare(&self.value)
            .is_some_and(|ordering| self.op.holds(ordering))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.column, self.op.symbol(), self.value)
    }
}

/// A conjunction of conditions. The empty predicate matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// Predicate matching every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a condition.
    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn eq(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.and(Condition::new(column, CmpOp::Eq, value))
    }

    pub fn lt(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.and(Condition::new(column, CmpOp::Lt, value))
    }

    pub fn gt(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.and(Condition::new(column, CmpOp::Gt, value))
    }

    pub fn le(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.and(Condition::new(column, CmpOp::Le, value))
    }

    pub fn ge(self, column: impl Into<Column>, value: impl Into<Value>) -> Self {
        self.and(Condition::new(column, CmpOp::Ge, value))
    }

    /// Returns true if this exact condition is already part of the predicate.
    pub fn contains(&self, condition: &Condition) -> bool {
        self.conditions.contains(condition)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "true");
        }
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Single-field ordering of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: Field,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateExpr {
    /// Replace the stored value.
    Set(Value),
    /// Add a signed delta to an integer column.
    Add(i64),
}

/// A conditional update of one or more fields.
///
/// All assignments read the row as it was before the update, the way a
/// single SQL `UPDATE ... SET a = a - 1, b = b - 1` statement does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeUpdate {
    pub assignments: Vec<(Field, UpdateExpr)>,
    pub predicate: Predicate,
}

impl RangeUpdate {
    pub fn new(predicate: Predicate) -> Self {
        Self {
            assignments: Vec::new(),
            predicate,
        }
    }

    /// Assign a value.
    pub fn set(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.assignments.push((field, UpdateExpr::Set(value.into())));
        self
    }

    /// Add a delta.
    pub fn add(mut self, field: Field, delta: i64) -> Self {
        self.assignments.push((field, UpdateExpr::Add(delta)));
        self
    }
}
