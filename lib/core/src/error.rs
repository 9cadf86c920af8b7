use snafu::Snafu;

use expr_parser::{EvalError, ParseError};

#[derive(Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EvaluationError {
    #[snafu(display("Cannot evaluate '{expression}': {source}"))]
    Parse { expression: String, source: ParseError },

    /// An assignment did not cover every variable of the expression.
    #[snafu(display("Cannot evaluate '{expression}': {source}"))]
    Unassigned { expression: String, source: EvalError },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AnalysisError {
    #[snafu(display("Expression has {count} distinct variables, at most {max} are supported"))]
    TooManyVariables { count: usize, max: usize },

    #[snafu(display("{failed_rows} of {total_rows} truth table rows failed to evaluate; last error: {source}"))]
    RowsFailed {
        failed_rows: usize,
        total_rows: usize,
        source: EvaluationError,
    },

    #[snafu(display("Active clause search failed: {source}"))]
    ActiveClause { source: EvaluationError },
}

impl AnalysisError {
    /// Human-readable cause, without the aggregation prefix.
    pub fn cause(&self) -> String {
        match self {
            AnalysisError::RowsFailed { source, .. } | AnalysisError::ActiveClause { source } => source.to_string(),
            e => e.to_string(),
        }
    }
}
