use std::fmt::Write as _;

use itertools::Itertools;
use log::{debug, trace, warn};
use rayon::prelude::*;
use serde::Serialize;

use expr_parser::Var;

use crate::assignment::{serialize_vars, tf, Assignment};
use crate::error::{AnalysisError, EvaluationError};
use crate::eval::ExpressionEvaluator;
use crate::options::Options;

/// Evaluated rows of an expression, in ascending row index order.
///
/// Row `i` assigns bit `j` of `i` to the `j`-th variable. Rows that failed to evaluate are
/// absent, so a table built from a broken expression is shorter than `2^n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    #[serde(serialize_with = "serialize_vars")]
    vars: Vec<Var>,
    rows: Vec<Assignment>,
}

impl TruthTable {
    pub fn new(vars: Vec<Var>) -> Self {
        TruthTable { vars, rows: Vec::new() }
    }

    /// Add a row to the truth table.
    pub fn add_row(&mut self, row: Assignment) {
        self.rows.push(row);
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn rows(&self) -> &[Assignment] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Assignment> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows of the full table, `2^n`, saturating at `usize::MAX`.
    pub fn expected_len(&self) -> usize {
        u32::try_from(self.vars.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .unwrap_or(usize::MAX)
    }

    /// Whether every row evaluated successfully.
    pub fn is_complete(&self) -> bool {
        self.len() == self.expected_len()
    }

    /// Display the truth table in a simple format.
    ///
    /// ```txt
    /// F F | F
    /// T F | F
    /// F T | F
    /// T T | T
    /// ```
    pub fn display_simple(&self) -> String {
        let mut output = String::new();

        for row in self.rows.iter() {
            let cells = row.values().iter().map(|&(_, b)| tf(b)).join(" ");
            let result = row.result().map_or('?', tf);
            if cells.is_empty() {
                writeln!(output, "| {}", result).unwrap();
            } else {
                writeln!(output, "{} | {}", cells, result).unwrap();
            }
        }

        output
    }
}

/// Rows that failed during generation.
#[derive(Debug, Clone)]
pub struct RowFailure {
    pub failed_rows: usize,
    /// Error of the failed row with the highest index.
    pub last_error: EvaluationError,
}

/// Result of enumerating a truth table: the rows that evaluated, plus the failures, if any.
#[derive(Debug, Clone)]
pub struct TableOutcome {
    pub table: TruthTable,
    pub failure: Option<RowFailure>,
}

impl TableOutcome {
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Diagnostic of the last failed row.
    pub fn message(&self) -> Option<String> {
        self.failure.as_ref().map(|f| f.last_error.to_string())
    }
}

/// Enumerate all `2^n` assignments of `vars` and evaluate each one.
///
/// A row that fails to evaluate does not stop the enumeration: it is left out of the table,
/// counted, and its error replaces the previously recorded one. Only exceeding the variable
/// limit of `options` is an immediate error.
pub fn generate_truth_table(
    vars: &[Var],
    evaluator: &ExpressionEvaluator,
    options: &Options,
) -> Result<TableOutcome, AnalysisError> {
    let max = options.variable_limit();
    if vars.len() > max {
        return Err(AnalysisError::TooManyVariables { count: vars.len(), max });
    }

    let total_rows = 1usize << vars.len();
    debug!(
        "Generating truth table for '{}': {} variables, {} rows",
        evaluator.expression(),
        vars.len(),
        total_rows
    );

    let evaluate_row = |i: usize| -> Result<Assignment, EvaluationError> {
        let row = Assignment::from_index(vars, i);
        let result = evaluator.evaluate(&row)?;
        trace!("row {} = {}", i, row);
        Ok(row.with_result(result))
    };

    let mut collector = RowCollector::new(vars.to_vec(), total_rows);
    if options.parallel {
        // Collected in index order, so the outcome is identical to the sequential one.
        let results: Vec<Result<Assignment, EvaluationError>> =
            (0..total_rows).into_par_iter().map(evaluate_row).collect();
        results.into_iter().for_each(|r| collector.push(r));
    } else {
        (0..total_rows).map(evaluate_row).for_each(|r| collector.push(r));
    }

    let outcome = collector.finish();
    if let Some(failure) = &outcome.failure {
        warn!(
            "{} of {} rows failed to evaluate, last error: {}",
            failure.failed_rows, total_rows, failure.last_error
        );
    }
    Ok(outcome)
}

struct RowCollector {
    table: TruthTable,
    failure: Option<RowFailure>,
}

impl RowCollector {
    fn new(vars: Vec<Var>, capacity: usize) -> Self {
        let mut table = TruthTable::new(vars);
        table.rows.reserve(capacity);
        RowCollector { table, failure: None }
    }

    fn push(&mut self, result: Result<Assignment, EvaluationError>) {
        match result {
            Ok(row) => self.table.add_row(row),
            Err(e) => match &mut self.failure {
                Some(failure) => {
                    failure.failed_rows += 1;
                    failure.last_error = e;
                }
                None => {
                    self.failure = Some(RowFailure {
                        failed_rows: 1,
                        last_error: e,
                    });
                }
            },
        }
    }

    fn finish(self) -> TableOutcome {
        TableOutcome {
            table: self.table,
            failure: self.failure,
        }
    }
}
