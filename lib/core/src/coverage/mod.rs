//! Logic coverage criteria derived from a truth table.

use serde::Serialize;

pub mod active_clause;
pub mod combinatorial;
pub mod predicate;

pub use active_clause::{active_clause_coverage, DeterminantPair};
pub use combinatorial::combinatorial_coverage;
pub use predicate::predicate_coverage;

/// The result sets produced for an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Criterion {
    TruthTable,
    Predicate,
    Combinatorial,
    ActiveClause,
}

impl Criterion {
    pub const ALL: [Criterion; 4] = [
        Criterion::TruthTable,
        Criterion::Predicate,
        Criterion::Combinatorial,
        Criterion::ActiveClause,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Criterion::TruthTable => "Truth Table",
            Criterion::Predicate => "Predicate Coverage",
            Criterion::Combinatorial => "Combinatorial Coverage",
            Criterion::ActiveClause => "Active Clause Coverage",
        }
    }

    /// Short explanation of what the set contains.
    pub fn help(self) -> &'static [&'static str] {
        match self {
            Criterion::TruthTable => &[
                "The set of all combinations of truth values each variable can take.",
                "There are 2^n rows, since each variable can be true or false.",
                "Each row ends with the result of evaluating the entire expression.",
            ],
            Criterion::Predicate => &[
                "One assignment which evaluates to true, and",
                "one assignment which evaluates to false.",
            ],
            Criterion::Combinatorial => &["The set of all rows of the truth table which evaluate to true."],
            Criterion::ActiveClause => &[
                "A pair of assignments for each variable, where that variable is determinant.",
                "Being determinant means that changing only this value changes the result of the expression.",
            ],
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
