//! Truth tables and logic coverage criteria for boolean predicates.
//!
//! The entry point is [`analyze`], which runs the whole pipeline for one expression:
//!
//! 1. extract the variables in order of first appearance;
//! 2. enumerate the truth table, row `i` assigning bit `j` of `i` to the `j`-th variable;
//! 3. derive predicate, combinatorial and active clause coverage from the table.
//!
//! ```
//! use coverage_core::analyze;
//!
//! let report = analyze("A && B").unwrap();
//! assert_eq!(report.truth_table.len(), 4);
//! assert_eq!(report.combinatorial.len(), 1);
//! assert_eq!(report.active_clause.len(), 2);
//! ```

pub mod analyze;
pub mod assignment;
pub mod coverage;
pub mod display;
pub mod error;
pub mod eval;
pub mod options;
pub mod table;

pub use analyze::{analyze, Analyzer, CoverageReport};
pub use assignment::Assignment;
pub use coverage::Criterion;
pub use error::{AnalysisError, EvaluationError};
pub use eval::{evaluate, ExpressionEvaluator};
pub use options::Options;
pub use table::{generate_truth_table, TableOutcome, TruthTable};

pub use expr_parser::Var;
