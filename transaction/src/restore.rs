//! Stores that can be rolled back to an earlier state.

use nset_core::NodeId;
use nset_store::{MemoryStore, Row, TreeStore};
use std::collections::BTreeMap;

/// A store whose full contents can be captured and put back.
pub trait Restorable: TreeStore {
    type Snapshot: Clone;

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: Self::Snapshot);
}

impl Restorable for MemoryStore {
    type Snapshot = BTreeMap<NodeId, Row>;

    fn snapshot(&self) -> Self::Snapshot {
        MemoryStore::snapshot(self)
    }

    fn restore(&mut self, snapshot: Self::Snapshot) {
        MemoryStore::restore(self, snapshot)
    }
}
