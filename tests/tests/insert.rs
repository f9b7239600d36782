//! Insert integration tests.

use nset_tests::prelude::*;

mod positions {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("positions")
            .seed("1\n  2\n")
            .operations(
                r#"
--# first_child
INSERT 3 FIRST_CHILD OF 1

--# next_sibling
INSERT 4 NEXT_SIBLING OF 3

--# prev_sibling
INSERT 5 PREV_SIBLING OF 3

--# last_child
INSERT 6 LAST_CHILD OF 4

--# new_root
ROOT 7

--# root_sibling
INSERT 8 NEXT_SIBLING OF 7
"#,
            )
            .unwrap()
            .step("first_child", |a| {
                a.inserted(1)
                    .interval(3, 2, 3, 1)
                    .interval(2, 4, 5, 1)
                    .interval(1, 1, 6, 0)
            })
            .step("next_sibling", |a| {
                a.interval(4, 4, 5, 1).outline(
                    "
                    1
                      3
                      4
                      2
                    ",
                )
            })
            .step("prev_sibling", |a| {
                a.interval(5, 2, 3, 1).parent(5, Some(1)).outline(
                    "
                    1
                      5
                      3
                      4
                      2
                    ",
                )
            })
            .step("last_child", |a| {
                a.interval(6, 7, 8, 2)
                    .interval(4, 6, 9, 1)
                    .interval(1, 1, 12, 0)
                    .parent(6, Some(4))
            })
            .step("new_root", |a| a.interval(7, 13, 14, 0).parent(7, None))
            .step("root_sibling", |a| {
                a.interval(8, 15, 16, 0).parent(8, None).count(8)
            })
    }

    #[test]
    fn test_every_position() {
        scenario().run().unwrap();
    }
}

mod build_from_empty {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("build_from_empty")
            .operations(
                r#"
--# grow
ROOT 1
INSERT 2 LAST_CHILD OF 1
INSERT 3 LAST_CHILD OF 2
INSERT 4 LAST_CHILD OF 1
INSERT 5 FIRST_CHILD OF 4
"#,
            )
            .unwrap()
            .step("grow", |a| {
                a.inserted(5).interval(1, 1, 10, 0).outline(
                    "
                    1
                      2
                        3
                      4
                        5
                    ",
                )
            })
    }

    #[test]
    fn test_tree_grows_from_empty_scope() {
        scenario().run().unwrap();
    }
}

mod duplicate_id {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("duplicate_id")
            .seed("1\n  2\n")
            .operations(
                r#"
--# reinsert
INSERT 9 LAST_CHILD OF 1
INSERT 2 LAST_CHILD OF 1
"#,
            )
            .unwrap()
            // the whole step is undone, including the first insert
            .step("reinsert", |a| a.error("already exists"))
    }

    #[test]
    fn test_existing_id_is_rejected() {
        scenario().run().unwrap();
    }
}

mod scoped_insert {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("scoped_insert")
            .scoped("tree_id", "left")
            .seed("1\n")
            .neighbour("right", "10\n  11\n")
            .operations(
                r#"
--# add
INSERT 2 FIRST_CHILD OF 1
ROOT 3
"#,
            )
            .unwrap()
            .step("add", |a| a.interval(2, 2, 3, 1).interval(3, 5, 6, 0))
    }

    #[test]
    fn test_insert_stamps_scope() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_inserted_rows_carry_discriminator() {
    // GIVEN
    let mut store = MemoryStore::default();
    let scope = ColumnScope::new("tree_id", 7i64);

    // WHEN
    TreeMutator::new(&mut store, &scope)
        .insert_root(NodeId(1))
        .unwrap();

    // THEN
    let row = store.row(NodeId(1)).unwrap();
    assert_eq!(row.get("tree_id"), Some(&Value::Int(7)));
    assert_eq!(TreeReader::new(&store, WholeTable).all().unwrap().len(), 1);
    assert_eq!(TreeReader::new(&store, &scope).roots().unwrap().len(), 1);
}
