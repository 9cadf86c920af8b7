//! Parser and evaluator for boolean predicates over single-letter variables.
//!
//! The accepted syntax is:
//!
//! - variables: a single alphabetic character (`A`, `b`, `é`, ...), case-sensitive;
//! - constants: `1` or `⊤` for true, `0` or `⊥` for false;
//! - negation: `!`, binds tightest;
//! - conjunction: `&&` or `*`;
//! - disjunction: `||` or `+`, binds weakest;
//! - parentheses for grouping.
//!
//! ```
//! use expr_parser::parser::parse_expr;
//! use expr_parser::var::Var;
//! use std::collections::HashMap;
//!
//! let expr = parse_expr("A && !(B || C)").unwrap();
//! let mapping = HashMap::from([(Var('A'), true), (Var('B'), false), (Var('C'), false)]);
//! assert_eq!(expr.eval(&mapping), Ok(true));
//! ```

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod expr;
pub mod parser;
pub mod var;
pub mod vars;

pub use error::{EvalError, ParseError};
pub use expr::Expr;
pub use parser::parse_expr;
pub use var::{Valuation, Var};
pub use vars::extract_variables;
