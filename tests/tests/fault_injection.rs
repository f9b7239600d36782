//! Store failures in the middle of a mutation.
//!
//! A mutation is a sequence of statements; a failure part way through leaves
//! the tree inconsistent unless the caller's transaction undoes it.

use nset_tests::prelude::*;

const SEED: &str = "
    1
      2
        3
        4
      5
    ";

fn seeded() -> MemoryStore {
    let mut store = MemoryStore::default();
    for n in parse_outline(SEED).unwrap() {
        store.insert(&n, &[]).unwrap();
    }
    store
}

fn is_valid(store: &MemoryStore) -> bool {
    TreeReader::new(store, WholeTable).verify().unwrap().is_empty()
}

#[test]
fn test_atomically_undoes_every_partial_single_removal() {
    // single removal issues five writes: re-parent, delete, descend, shift left, shift right
    for fail_at in 0..5 {
        // GIVEN
        let store = seeded();
        let before = store.snapshot();
        let target = store.get(NodeId(2)).unwrap().unwrap();
        let mut failing = FailingStore::new(store, fail_at);

        // WHEN
        let result = atomically(&mut failing, |store| {
            TreeMutator::new(store, WholeTable).remove_single(&target)
        });

        // THEN
        assert!(
            matches!(result, Err(MutationError::Store(_))),
            "write {} should fail",
            fail_at
        );
        assert_eq!(failing.attempted(), fail_at + 1);
        assert_eq!(failing.into_inner().snapshot(), before);
    }
}

#[test]
fn test_partial_removal_without_transaction_breaks_invariants() {
    // GIVEN: the descend step fails after the node is already gone
    let store = seeded();
    let target = store.get(NodeId(2)).unwrap().unwrap();
    let mut failing = FailingStore::new(store, 2);

    // WHEN
    let result = TreeMutator::new(&mut failing, WholeTable).remove_single(&target);

    // THEN
    assert!(result.is_err());
    let store = failing.into_inner();
    assert_eq!(store.get(NodeId(2)).unwrap(), None);
    assert!(!is_valid(&store));
}

#[test]
fn test_transaction_manager_rolls_back_failed_subtree_removal() {
    // GIVEN: subtree removal fails on its first shift
    let store = seeded();
    let before = store.snapshot();
    let target = store.get(NodeId(2)).unwrap().unwrap();
    let mut failing = FailingStore::new(store, 1);
    let mut manager = TransactionManager::new(&mut failing);
    manager.begin().unwrap();

    // WHEN
    let result = manager.remove_subtree(WholeTable, &target);

    // THEN
    assert!(result.is_err());
    assert!(!manager.is_active());
    let store = failing.into_inner();
    assert_eq!(store.snapshot(), before);
    assert!(is_valid(&store));
}

#[test]
fn test_failure_after_completion_is_not_triggered() {
    // GIVEN: insert issues three writes, the failure is armed for a fourth
    let store = seeded();
    let target = store.get(NodeId(5)).unwrap().unwrap();
    let mut failing = FailingStore::new(store, 3);

    // WHEN
    let result = TreeMutator::new(&mut failing, WholeTable).insert(
        NodeId(6),
        &target,
        Position::NextSibling,
    );

    // THEN
    assert!(result.is_ok());
    assert_eq!(failing.attempted(), 3);
    assert!(is_valid(failing.inner()));
}
