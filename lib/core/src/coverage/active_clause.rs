use log::debug;
use serde::Serialize;

use expr_parser::Var;

use crate::assignment::{serialize_var, Assignment};
use crate::error::EvaluationError;
use crate::eval::ExpressionEvaluator;

/// Two assignments that differ only in `var` and evaluate to different results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeterminantPair {
    #[serde(serialize_with = "serialize_var")]
    pub var: Var,
    /// A row of the table that evaluates to true.
    pub original: Assignment,
    /// `original` with `var` negated; evaluates to false.
    pub flipped: Assignment,
}

/// For each variable, the first true row in which flipping that variable makes the expression false.
///
/// Only true rows are searched, so a variable that is determinant solely through a false-to-true
/// flip gets no pair. Variables are visited in the order of `vars`, and each contributes at most
/// one pair; different variables may share the same original row.
pub fn active_clause_coverage(
    true_rows: &[Assignment],
    vars: &[Var],
    evaluator: &ExpressionEvaluator,
) -> Result<Vec<DeterminantPair>, EvaluationError> {
    let mut pairs = Vec::new();

    'vars: for &var in vars {
        for row in true_rows.iter().filter(|row| row.result() == Some(true)) {
            let flipped = row.flipped(var);
            if !evaluator.evaluate(&flipped)? {
                debug!("{} is determinant at {}", var, row);
                pairs.push(DeterminantPair {
                    var,
                    original: row.clone(),
                    flipped: flipped.with_result(false),
                });
                continue 'vars;
            }
        }
        debug!("{} is not determinant in any true row", var);
    }

    Ok(pairs)
}

/// The pairs flattened into `original, flipped, original, flipped, ...`.
pub fn flatten_pairs(pairs: &[DeterminantPair]) -> impl Iterator<Item = &Assignment> {
    pairs.iter().flat_map(|pair| [&pair.original, &pair.flipped])
}
