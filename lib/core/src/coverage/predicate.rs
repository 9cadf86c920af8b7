use crate::assignment::Assignment;
use crate::table::TruthTable;

/// The first true row and the first false row of `table`, in that order.
///
/// Either is omitted when the table has no such row: a tautology yields only the true case,
/// a contradiction only the false one.
pub fn predicate_coverage(table: &TruthTable) -> Vec<Assignment> {
    let first_with = |value: bool| table.rows().iter().find(|row| row.result() == Some(value));
    [first_with(true), first_with(false)].into_iter().flatten().cloned().collect()
}
