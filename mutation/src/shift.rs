//! The boundary-shift primitive.
//!
//! Every structural operation reduces to deletes, re-parents and calls to
//! `shift_field`: move every value of one positional field that lies past a
//! threshold by a signed delta. Negative deltas close gaps, positive ones
//! open them.

use nset_core::Field;
use nset_store::{Predicate, RangeUpdate, TreeScope, TreeStore};

use crate::error::MutationResult;

/// `field = field + delta` for every row in scope where `field > threshold`.
/// Returns the number of rows changed.
pub fn shift_field<S, D>(
    store: &mut S,
    scope: &D,
    field: Field,
    threshold: i64,
    delta: i64,
) -> MutationResult<usize>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    let update = RangeUpdate::new(scope.apply(Predicate::all().gt(field, threshold)))
        .add(field, delta);
    let rows = store.range_update(&update)?;
    tracing::trace!(%field, threshold, delta, rows, "shifted boundary");
    Ok(rows)
}

/// Shift `left` and `right` independently past the same threshold.
pub fn shift_bounds<S, D>(store: &mut S, scope: &D, threshold: i64, delta: i64) -> MutationResult<()>
where
    S: TreeStore + ?Sized,
    D: TreeScope + ?Sized,
{
    shift_field(store, scope, Field::Left, threshold, delta)?;
    shift_field(store, scope, Field::Right, threshold, delta)?;
    Ok(())
}
