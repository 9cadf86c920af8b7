use log::{debug, info};
use serde::Serialize;
use snafu::ResultExt;

use expr_parser::{extract_variables, Var};

use crate::assignment::{serialize_vars, Assignment};
use crate::coverage::active_clause::flatten_pairs;
use crate::coverage::{active_clause_coverage, combinatorial_coverage, predicate_coverage, Criterion, DeterminantPair};
use crate::display::render_rows;
use crate::error::{ActiveClauseSnafu, AnalysisError};
use crate::eval::ExpressionEvaluator;
use crate::options::Options;
use crate::table::generate_truth_table;

/// Everything derived from one expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub expression: String,
    #[serde(serialize_with = "serialize_vars")]
    pub variables: Vec<Var>,
    pub truth_table: Vec<Assignment>,
    pub predicate: Vec<Assignment>,
    pub combinatorial: Vec<Assignment>,
    pub active_clause: Vec<DeterminantPair>,
}

impl CoverageReport {
    /// Rows of one result set; active clause pairs are flattened as `original, flipped`.
    pub fn rows(&self, criterion: Criterion) -> Vec<&Assignment> {
        match criterion {
            Criterion::TruthTable => self.truth_table.iter().collect(),
            Criterion::Predicate => self.predicate.iter().collect(),
            Criterion::Combinatorial => self.combinatorial.iter().collect(),
            Criterion::ActiveClause => flatten_pairs(&self.active_clause).collect(),
        }
    }

    /// Text table of one result set.
    pub fn render(&self, criterion: Criterion) -> String {
        render_rows(&self.variables, self.rows(criterion))
    }
}

/// Runs the pipeline with fixed [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: Options,
}

impl Analyzer {
    pub fn new(options: Options) -> Self {
        Analyzer { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Computes the truth table and all coverage sets for `expression`.
    ///
    /// If any truth table row fails to evaluate, the whole analysis fails and no result set
    /// is returned, even though every row was attempted.
    pub fn analyze(&self, expression: &str) -> Result<CoverageReport, AnalysisError> {
        info!("Analyzing '{}'", expression);

        let variables = extract_variables(expression);
        debug!("variables = {:?}", variables);

        let evaluator = ExpressionEvaluator::new(expression);
        let outcome = generate_truth_table(&variables, &evaluator, &self.options)?;
        let total_rows = outcome.table.expected_len();
        if let Some(failure) = outcome.failure {
            return Err(AnalysisError::RowsFailed {
                failed_rows: failure.failed_rows,
                total_rows,
                source: failure.last_error,
            });
        }
        let table = outcome.table;

        let predicate = predicate_coverage(&table);
        let combinatorial = combinatorial_coverage(&table);
        let active_clause =
            active_clause_coverage(&combinatorial, &variables, &evaluator).context(ActiveClauseSnafu)?;
        info!(
            "{} rows, {} predicate, {} combinatorial, {} active clause pairs",
            table.len(),
            predicate.len(),
            combinatorial.len(),
            active_clause.len()
        );

        Ok(CoverageReport {
            expression: expression.to_string(),
            variables,
            truth_table: table.into_rows(),
            predicate,
            combinatorial,
            active_clause,
        })
    }
}

/// Analyze `expression` with the default options.
pub fn analyze(expression: &str) -> Result<CoverageReport, AnalysisError> {
    Analyzer::default().analyze(expression)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_and_report() {
        let report = analyze("A && B").unwrap();
        assert_eq!(report.variables, vec![Var('A'), Var('B')]);
        assert_eq!(report.truth_table.len(), 4);
        assert_eq!(report.rows(Criterion::Predicate).len(), 2);
        assert_eq!(report.rows(Criterion::Combinatorial).len(), 1);
        assert_eq!(report.rows(Criterion::ActiveClause).len(), 4);
    }

    #[test]
    fn test_failed_rows_suppress_results() {
        let err = analyze("A &&").unwrap_err();
        match err {
            AnalysisError::RowsFailed {
                failed_rows,
                total_rows,
                ..
            } => {
                assert_eq!(failed_rows, 2);
                assert_eq!(total_rows, 2);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_variable_limit() {
        let analyzer = Analyzer::new(Options {
            max_variables: 2,
            ..Options::default()
        });
        assert!(matches!(
            analyzer.analyze("A + B + C"),
            Err(AnalysisError::TooManyVariables { count: 3, max: 2 })
        ));
        assert!(analyzer.analyze("A + B").is_ok());
    }

    #[test]
    fn test_idempotent() {
        let first = analyze("(A || B) && !C").unwrap();
        let second = analyze("(A || B) && !C").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_json() -> color_eyre::Result<()> {
        let report = analyze("A && B")?;
        let json = serde_json::to_value(&report)?;
        assert_eq!(json["variables"], serde_json::json!(["A", "B"]));
        assert_eq!(json["combinatorial"], serde_json::json!([{"A": true, "B": true, "Result": true}]));
        assert_eq!(json["active_clause"][1]["var"], serde_json::json!("B"));
        Ok(())
    }
}
