use snafu::Snafu;

use crate::parser::Rule;
use crate::var::Var;

#[derive(Debug, Clone, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
    #[snafu(display("Invalid syntax:\n{source}"))]
    Syntax { source: pest::error::Error<Rule> },

    #[snafu(display(
        "Identifier '{identifier}' at {line}:{column} is not a single letter; separate variables with an operator"
    ))]
    MultiCharIdentifier { identifier: String, line: usize, column: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EvalError {
    #[snafu(display("Variable '{var}' has no assigned value"))]
    UnassignedVariable { var: Var },
}
