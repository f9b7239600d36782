//! The data store port.

use crate::query::{OrderBy, Predicate, RangeUpdate};
use nset_core::{NodeInterval, StoreResult, Value};

/// Storage the mutation engine operates on.
///
/// Predicates passed in are already narrowed by the active tree scope. An
/// implementation must evaluate each statement atomically: the rows an
/// update or delete touches are selected before any of them is written.
/// Multi-statement atomicity is the caller's business (see `nset-transaction`).
pub trait TreeStore {
    /// Apply the update's assignments to every matching row.
    /// Returns the number of rows changed.
    fn range_update(&mut self, update: &RangeUpdate) -> StoreResult<usize>;

    /// Delete every matching row. Returns the number of rows deleted.
    fn range_delete(&mut self, predicate: &Predicate) -> StoreResult<usize>;

    /// Return the first matching row under `order`, or `None`.
    fn find_one(
        &self,
        predicate: &Predicate,
        order: Option<OrderBy>,
    ) -> StoreResult<Option<NodeInterval>>;

    /// Return every matching row under `order`.
    fn select(&self, predicate: &Predicate, order: Option<OrderBy>)
        -> StoreResult<Vec<NodeInterval>>;

    /// Store a new row carrying the given discriminator columns.
    fn insert(&mut self, node: &NodeInterval, tags: &[(String, Value)]) -> StoreResult<()>;
}

impl<S: TreeStore + ?Sized> TreeStore for &mut S {
    fn range_update(&mut self, update: &RangeUpdate) -> StoreResult<usize> {
        (**self).range_update(update)
    }

    fn range_delete(&mut self, predicate: &Predicate) -> StoreResult<usize> {
        (**self).range_delete(predicate)
    }

    fn find_one(
        &self,
        predicate: &Predicate,
        order: Option<OrderBy>,
    ) -> StoreResult<Option<NodeInterval>> {
        (**self).find_one(predicate, order)
    }

    fn select(
        &self,
        predicate: &Predicate,
        order: Option<OrderBy>,
    ) -> StoreResult<Vec<NodeInterval>> {
        (**self).select(predicate, order)
    }

    fn insert(&mut self, node: &NodeInterval, tags: &[(String, Value)]) -> StoreResult<()> {
        (**self).insert(node, tags)
    }
}
