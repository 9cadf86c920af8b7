use log::debug;
use snafu::ResultExt;

use expr_parser::{parse_expr, Expr, ParseError};

use crate::assignment::Assignment;
use crate::error::{EvaluationError, ParseSnafu, UnassignedSnafu};

/// Evaluates one expression under many assignments.
///
/// The expression is parsed once, on construction. A parse failure is kept and reported by
/// every later call to [`evaluate`][ExpressionEvaluator::evaluate].
#[derive(Debug, Clone)]
pub struct ExpressionEvaluator {
    expression: String,
    parsed: Result<Expr, ParseError>,
}

impl ExpressionEvaluator {
    pub fn new(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let parsed = parse_expr(&expression);
        match &parsed {
            Ok(expr) => debug!("Parsed '{}' as {}", expression, expr),
            Err(e) => debug!("Could not parse '{}': {}", expression, e),
        }
        ExpressionEvaluator { expression, parsed }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn expr(&self) -> Option<&Expr> {
        self.parsed.as_ref().ok()
    }

    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvaluationError> {
        let expr = self.parsed.as_ref().map_err(Clone::clone).context(ParseSnafu {
            expression: &self.expression,
        })?;
        expr.eval(assignment).context(UnassignedSnafu {
            expression: &self.expression,
        })
    }
}

/// One-shot evaluation of `expression` under `assignment`.
pub fn evaluate(expression: &str, assignment: &Assignment) -> Result<bool, EvaluationError> {
    ExpressionEvaluator::new(expression).evaluate(assignment)
}
