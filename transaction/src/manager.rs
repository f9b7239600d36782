//! Transaction manager for atomic tree mutations.

use nset_core::{NodeId, NodeInterval};
use nset_mutation::{MutationOutcome, MutationResult, Position, TreeMutator};
use nset_store::TreeScope;
use tracing::{debug, warn};

use crate::error::{TransactionError, TransactionResult};
use crate::restore::Restorable;

/// Transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// No transaction is active.
    Inactive,
    /// Transaction is active.
    Active,
}

/// Transaction manager over one store.
///
/// Mutations are applied to the store directly; the snapshot taken at
/// `begin` is put back on rollback. Single writer: nothing else may touch
/// the store while a transaction is active.
pub struct TransactionManager<'s, S: Restorable> {
    store: &'s mut S,
    state: TransactionState,
    snapshot: Option<S::Snapshot>,
    /// Oldest first.
    savepoints: Vec<(String, S::Snapshot)>,
    auto_commit: bool,
}

impl<'s, S: Restorable> TransactionManager<'s, S> {
    /// Create a new transaction manager.
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            state: TransactionState::Inactive,
            snapshot: None,
            savepoints: Vec::new(),
            auto_commit: false,
        }
    }

    /// Check if a transaction is active.
    pub fn is_active(&self) -> bool {
        self.state == TransactionState::Active
    }

    /// Get the current transaction state.
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Commit after every successful mutation.
    pub fn set_auto_commit(&mut self, enabled: bool) {
        self.auto_commit = enabled;
    }

    pub fn is_auto_commit(&self) -> bool {
        self.auto_commit
    }

    /// Read access to the store, including uncommitted changes.
    pub fn store(&self) -> &S {
        &*self.store
    }

    fn ensure_active(&self) -> TransactionResult<()> {
        if self.state != TransactionState::Active {
            return Err(TransactionError::NoActiveTransaction);
        }
        Ok(())
    }

    // ========== Transaction Lifecycle ==========

    /// Begin a new transaction.
    pub fn begin(&mut self) -> TransactionResult<()> {
        if self.state == TransactionState::Active {
            return Err(TransactionError::AlreadyActive);
        }

        self.snapshot = Some(self.store.snapshot());
        self.savepoints.clear();
        self.state = TransactionState::Active;
        debug!("transaction started");

        Ok(())
    }

    /// Commit the current transaction.
    pub fn commit(&mut self) -> TransactionResult<()> {
        self.ensure_active()?;

        self.snapshot = None;
        self.savepoints.clear();
        self.state = TransactionState::Inactive;
        debug!("transaction committed");

        Ok(())
    }

    /// Rollback the current transaction.
    pub fn rollback(&mut self) -> TransactionResult<()> {
        self.ensure_active()?;

        if let Some(snapshot) = self.snapshot.take() {
            self.store.restore(snapshot);
        }
        self.savepoints.clear();
        self.state = TransactionState::Inactive;
        debug!("transaction rolled back");

        Ok(())
    }

    // ========== Savepoints ==========

    /// Create a savepoint. A name may be reused; the newest one wins.
    pub fn savepoint(&mut self, name: &str) -> TransactionResult<()> {
        self.ensure_active()?;
        self.savepoints
            .push((name.to_string(), self.store.snapshot()));
        Ok(())
    }

    /// Position of the newest savepoint called `name`.
    fn find_savepoint(&self, name: &str) -> TransactionResult<usize> {
        self.savepoints
            .iter()
            .rposition(|(candidate, _)| candidate == name)
            .ok_or_else(|| TransactionError::savepoint_not_found(name))
    }

    /// Rollback to a savepoint.
    ///
    /// The savepoint stays usable. Savepoints created after it are discarded,
    /// since the states they captured no longer exist.
    pub fn rollback_to(&mut self, name: &str) -> TransactionResult<()> {
        self.ensure_active()?;

        let index = self.find_savepoint(name)?;
        self.savepoints.truncate(index + 1);
        if let Some((_, snapshot)) = self.savepoints.last() {
            self.store.restore(snapshot.clone());
        }

        Ok(())
    }

    /// Release a savepoint together with every savepoint created after it.
    pub fn release_savepoint(&mut self, name: &str) -> TransactionResult<()> {
        self.ensure_active()?;

        let index = self.find_savepoint(name)?;
        self.savepoints.truncate(index);

        Ok(())
    }

    // ========== Operations ==========

    /// Run mutations against one tree scope inside the transaction.
    ///
    /// A failing mutation rolls the whole transaction back before the error
    /// is returned, so the store never keeps a half-applied removal.
    pub fn mutate<D, T, F>(&mut self, scope: D, f: F) -> TransactionResult<T>
    where
        D: TreeScope,
        F: FnOnce(&mut TreeMutator<'_, S, D>) -> MutationResult<T>,
    {
        self.ensure_active()?;

        let result = {
            let mut mutator = TreeMutator::new(&mut *self.store, scope);
            f(&mut mutator)
        };

        match result {
            Ok(value) => {
                if self.auto_commit {
                    self.commit()?;
                }
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "mutation failed, rolling back");
                self.rollback()?;
                Err(e.into())
            }
        }
    }

    /// Remove one node inside the transaction.
    pub fn remove_single<D: TreeScope>(
        &mut self,
        scope: D,
        node: &NodeInterval,
    ) -> TransactionResult<MutationOutcome> {
        self.mutate(scope, |m| m.remove_single(node))
    }

    /// Remove a whole subtree inside the transaction.
    pub fn remove_subtree<D: TreeScope>(
        &mut self,
        scope: D,
        node: &NodeInterval,
    ) -> TransactionResult<MutationOutcome> {
        self.mutate(scope, |m| m.remove_subtree(node))
    }

    /// Insert a leaf inside the transaction.
    pub fn insert<D: TreeScope>(
        &mut self,
        scope: D,
        id: NodeId,
        target: &NodeInterval,
        position: Position,
    ) -> TransactionResult<MutationOutcome> {
        self.mutate(scope, |m| m.insert(id, target, position))
    }

    /// Move a subtree inside the transaction.
    pub fn move_node<D: TreeScope>(
        &mut self,
        scope: D,
        node: &NodeInterval,
        target: &NodeInterval,
        position: Position,
    ) -> TransactionResult<MutationOutcome> {
        self.mutate(scope, |m| m.move_node(node, target, position))
    }
}

/// Run `f` against `store`, restoring the prior contents if it fails.
pub fn atomically<S, T, E, F>(store: &mut S, f: F) -> Result<T, E>
where
    S: Restorable,
    F: FnOnce(&mut S) -> Result<T, E>,
{
    let snapshot = store.snapshot();
    let result = f(store);
    if result.is_err() {
        debug!("atomic block failed, restoring snapshot");
        store.restore(snapshot);
    }
    result
}
