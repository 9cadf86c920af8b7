use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// A predicate variable: exactly one alphabetic character.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(pub char);

impl Var {
    pub fn name(self) -> char {
        self.0
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "Var({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<char> for Var {
    fn from(c: char) -> Self {
        Var(c)
    }
}

/// Source of variable values used by [`Expr::eval`][crate::expr::Expr::eval].
pub trait Valuation {
    /// Returns the value of `var`, or `None` if it is unassigned.
    fn value(&self, var: Var) -> Option<bool>;
}

impl Valuation for HashMap<Var, bool> {
    fn value(&self, var: Var) -> Option<bool> {
        self.get(&var).copied()
    }
}

impl Valuation for [(Var, bool)] {
    fn value(&self, var: Var) -> Option<bool> {
        self.iter().find(|(v, _)| *v == var).map(|&(_, b)| b)
    }
}
