//! Rebuild integration tests.

use nset_tests::prelude::*;

fn node(id: u64, parent: Option<u64>, left: i64, right: i64, level: i64) -> NodeInterval {
    NodeInterval::new(NodeId(id), parent.map(NodeId), left, right, level)
}

mod rebuild_valid_tree {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("rebuild_valid_tree")
            .seed(
                "
                1
                  2
                  3
                4
                ",
            )
            .operations(
                r#"
--# rebuild
REBUILD
"#,
            )
            .unwrap()
            .step("rebuild", |a| a.renumbered(0).interval(4, 7, 8, 0))
    }

    #[test]
    fn test_rebuild_of_consistent_tree_is_a_no_op() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_rebuild_repairs_broken_intervals() {
    // GIVEN: correct parent links, intervals left over from a crashed writer
    let mut store = MemoryStore::default();
    for n in [
        node(1, None, 1, 20, 0),
        node(2, Some(1), 3, 4, 1),
        node(3, Some(1), 7, 8, 5),
        node(4, Some(3), 2, 2, 0),
    ] {
        store.insert(&n, &[]).unwrap();
    }
    assert!(!TreeReader::new(&store, WholeTable).verify().unwrap().is_empty());

    // WHEN
    let outcome = TreeMutator::new(&mut store, WholeTable).rebuild().unwrap();

    // THEN
    assert_eq!(outcome, MutationOutcome::Rebuilt { renumbered: 4 });
    let reader = TreeReader::new(&store, WholeTable);
    assert_eq!(reader.verify().unwrap(), vec![]);
    assert_eq!(
        render_outline(&reader.tree().unwrap()),
        "1\n  2\n  3\n    4\n"
    );
}

#[test]
fn test_rebuild_detects_cycle_without_writing() {
    // GIVEN: 2 and 3 point at each other
    let mut store = MemoryStore::default();
    for n in [
        node(1, None, 1, 2, 0),
        node(2, Some(3), 3, 4, 0),
        node(3, Some(2), 5, 6, 0),
    ] {
        store.insert(&n, &[]).unwrap();
    }
    let writes = store.writes();

    // WHEN
    let result = TreeMutator::new(&mut store, WholeTable).rebuild();

    // THEN
    assert!(matches!(
        result,
        Err(MutationError::StructuralCorruption { .. })
    ));
    assert_eq!(store.writes(), writes);
}

#[test]
fn test_rebuild_only_touches_its_scope() {
    // GIVEN
    let mut store = MemoryStore::default();
    let broken = ColumnScope::new("tree_id", 1i64);
    let other = ColumnScope::new("tree_id", 2i64);
    store.insert(&node(1, None, 5, 9, 3), &broken.tags()).unwrap();
    store.insert(&node(2, Some(1), 6, 7, 0), &broken.tags()).unwrap();
    store.insert(&node(3, None, 1, 2, 0), &other.tags()).unwrap();

    // WHEN
    TreeMutator::new(&mut store, &broken).rebuild().unwrap();

    // THEN
    assert_eq!(store.get(NodeId(1)).unwrap(), Some(node(1, None, 1, 4, 0)));
    assert_eq!(store.get(NodeId(2)).unwrap(), Some(node(2, Some(1), 2, 3, 1)));
    assert_eq!(store.get(NodeId(3)).unwrap(), Some(node(3, None, 1, 2, 0)));
}
