use std::fmt::{Display, Formatter};
use std::ops;

use itertools::Itertools;
use log::trace;

use crate::error::{EvalError, UnassignedVariableSnafu};
use crate::var::{Valuation, Var};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Const(bool),
    Var(Var),
    Not { arg: Box<Expr> },
    And { lhs: Box<Expr>, rhs: Box<Expr> },
    Or { lhs: Box<Expr>, rhs: Box<Expr> },
}

// Constructors
impl Expr {
    pub fn not(arg: Self) -> Self {
        Expr::Not { arg: Box::new(arg) }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl Expr {
    /// Evaluates the expression under `valuation`.
    ///
    /// Both operands of `&&` and `||` are always evaluated, so a missing variable is reported
    /// no matter where it occurs.
    pub fn eval<V>(&self, valuation: &V) -> Result<bool, EvalError>
    where
        V: Valuation + ?Sized,
    {
        let value = match self {
            Expr::Const(b) => *b,
            Expr::Var(var) => match valuation.value(*var) {
                Some(b) => b,
                None => return UnassignedVariableSnafu { var: *var }.fail(),
            },
            Expr::Not { arg } => !arg.eval(valuation)?,
            Expr::And { lhs, rhs } => {
                let lhs = lhs.eval(valuation)?;
                let rhs = rhs.eval(valuation)?;
                lhs && rhs
            }
            Expr::Or { lhs, rhs } => {
                let lhs = lhs.eval(valuation)?;
                let rhs = rhs.eval(valuation)?;
                lhs || rhs
            }
        };
        trace!("eval({self}) = {value}");
        Ok(value)
    }

    /// Distinct variables of the expression, left to right.
    pub fn vars(&self) -> Vec<Var> {
        fn collect(expr: &Expr, out: &mut Vec<Var>) {
            match expr {
                Expr::Const(_) => {}
                Expr::Var(var) => out.push(*var),
                Expr::Not { arg } => collect(arg, out),
                Expr::And { lhs, rhs } | Expr::Or { lhs, rhs } => {
                    collect(lhs, out);
                    collect(rhs, out);
                }
            }
        }

        let mut vars = Vec::new();
        collect(self, &mut vars);
        vars.into_iter().unique().collect()
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Const(b)
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            match self {
                Expr::Const(b) => {
                    write!(f, "Const({b})")
                }
                Expr::Var(var) => {
                    write!(f, "{var:#}")
                }
                Expr::Not { arg } => {
                    write!(f, "Not({arg:#})")
                }
                Expr::And { lhs, rhs } => {
                    write!(f, "And({lhs:#}, {rhs:#})")
                }
                Expr::Or { lhs, rhs } => {
                    write!(f, "Or({lhs:#}, {rhs:#})")
                }
            }
        } else {
            match self {
                Expr::Const(b) => {
                    write!(f, "{}", if *b { "1" } else { "0" })
                }
                Expr::Var(var) => {
                    write!(f, "{var}")
                }
                Expr::Not { arg } => {
                    write!(f, "!{arg}")
                }
                Expr::And { lhs, rhs } => {
                    write!(f, "({lhs} && {rhs})")
                }
                Expr::Or { lhs, rhs } => {
                    write!(f, "({lhs} || {rhs})")
                }
            }
        }
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}
