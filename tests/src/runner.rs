//! Scenario runner.

use nset_core::{NodeInterval, Value};
use nset_mutation::{MutationOutcome, MutationResult, TreeMutator};
use nset_query::TreeReader;
use nset_store::{ColumnScope, MemoryStore, TreeScope, TreeStore, WholeTable};
use nset_transaction::atomically;
use tracing::debug;

use crate::assertion::{StepResult, StepState};
use crate::error::{ExampleError, ExampleResult};
use crate::loader::Command;
use crate::outline::{parse_outline, render_outline};
use crate::scenario::Scenario;

/// Run commands in order against one scope, reading every interval fresh.
pub fn run_commands<S, D>(
    store: &mut S,
    scope: D,
    commands: &[Command],
) -> MutationResult<Vec<MutationOutcome>>
where
    S: TreeStore + ?Sized,
    D: TreeScope,
{
    let mut mutator = TreeMutator::new(store, scope);
    let mut outcomes = Vec::with_capacity(commands.len());

    for command in commands {
        let outcome = match *command {
            Command::Root(id) => mutator.insert_root(id)?,
            Command::Insert {
                id,
                position,
                target,
            } => {
                let target = mutator.fetch(target)?;
                mutator.insert(id, &target, position)?
            }
            Command::RemoveSingle(id) => {
                let node = mutator.fetch(id)?;
                mutator.remove_single(&node)?
            }
            Command::RemoveSubtree(id) => {
                let node = mutator.fetch(id)?;
                mutator.remove_subtree(&node)?
            }
            Command::Move {
                id,
                position,
                target,
            } => {
                let node = mutator.fetch(id)?;
                let target = mutator.fetch(target)?;
                mutator.move_node(&node, &target, position)?
            }
            Command::Rebuild => mutator.rebuild()?,
        };
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Runs a scenario against a fresh `MemoryStore`.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    fn scope(&self) -> Box<dyn TreeScope> {
        match self.scenario.scope() {
            Some((column, value)) => Box::new(ColumnScope::new(column.clone(), value.clone())),
            None => Box::new(WholeTable),
        }
    }

    fn neighbour_scope(&self, value: &Value) -> ExampleResult<ColumnScope> {
        let (column, _) = self.scenario.scope().ok_or_else(|| {
            ExampleError::Seed("neighbour trees need a scoped scenario".to_string())
        })?;
        Ok(ColumnScope::new(column.clone(), value.clone()))
    }

    fn seed(&self, store: &mut MemoryStore) -> ExampleResult<()> {
        if let Some(outline) = self.scenario.seed_outline() {
            let tags = self.scope().tags();
            for node in parse_outline(outline)? {
                store
                    .insert(&node, &tags)
                    .map_err(|e| ExampleError::Seed(e.to_string()))?;
            }
        }
        for (value, outline) in self.scenario.neighbours() {
            let tags = self.neighbour_scope(value)?.tags();
            for node in parse_outline(outline)? {
                store
                    .insert(&node, &tags)
                    .map_err(|e| ExampleError::Seed(e.to_string()))?;
            }
        }
        Ok(())
    }

    fn read(
        store: &MemoryStore,
        scope: &dyn TreeScope,
    ) -> ExampleResult<(Vec<NodeInterval>, String)> {
        let reader = TreeReader::new(store, scope);
        let nodes = reader
            .all()
            .map_err(|e| ExampleError::assertion_failed("<read>", e.to_string()))?;
        let outline = match reader.tree() {
            Ok(trees) => render_outline(&trees),
            Err(e) => format!("<malformed: {}>", e),
        };
        Ok((nodes, outline))
    }

    /// Run the scenario.
    pub fn run(&self) -> ExampleResult<()> {
        debug!(scenario = self.scenario.name(), "running scenario");

        // 1. Seed the table
        let mut store = MemoryStore::default();
        self.seed(&mut store)?;

        let scope = self.scope();
        let mut neighbours = Vec::new();
        for (value, _) in self.scenario.neighbours() {
            let neighbour = self.neighbour_scope(value)?;
            let (nodes, _) = Self::read(&store, &neighbour)?;
            neighbours.push((neighbour, nodes));
        }

        // 2. Execute each step atomically and verify assertions
        for step in self.scenario.steps() {
            let commands = self
                .scenario
                .get_operations()
                .get_step(&step.name)
                .ok_or_else(|| ExampleError::step_not_found(&step.name))?;

            let result: StepResult = atomically(&mut store, |store| {
                run_commands(store, &*scope, commands)
            })
            .map_err(|e| e.to_string());

            let (nodes, outline) = Self::read(&store, &*scope)?;
            step.assertion.verify(
                &step.name,
                &result,
                &StepState {
                    nodes: &nodes,
                    outline: &outline,
                },
            )?;

            // 3. Other trees in the table must not have moved
            for (neighbour, before) in &neighbours {
                let (after, _) = Self::read(&store, neighbour)?;
                if &after != before {
                    return Err(ExampleError::assertion_failed(
                        &step.name,
                        format!("tree {} changed", neighbour.value()),
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::scenario::Scenario;

    #[test]
    fn test_runner_with_inline_operations() {
        let ops_source = r#"
--# drop_a
REMOVE SINGLE 2

--# add_leaf
INSERT 9 LAST_CHILD OF 4
"#;

        let scenario = Scenario::new("inline")
            .seed(
                "
                1
                  2
                    3
                  4
                ",
            )
            .operations(ops_source)
            .unwrap()
            .step("drop_a", |a| a.removed(1).promoted(1).interval(1, 1, 6, 0))
            .step("add_leaf", |a| a.inserted(1).interval(9, 5, 6, 2));

        scenario.run().unwrap();
    }

    #[test]
    fn test_runner_reports_missing_step() {
        let scenario = Scenario::new("missing")
            .seed("1")
            .step("nowhere", |a| a);

        assert!(scenario.run().is_err());
    }
}
