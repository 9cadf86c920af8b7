use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use expr_parser::{Valuation, Var};

/// Values of all variables of an expression, in extraction order, plus the expression's value.
///
/// The result is `None` until the assignment has been evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<(Var, bool)>,
    result: Option<bool>,
}

impl Assignment {
    pub fn new(values: Vec<(Var, bool)>) -> Self {
        Assignment { values, result: None }
    }

    /// The assignment for truth table row `index`: variable `j` takes bit `j` of `index`.
    pub fn from_index(vars: &[Var], index: usize) -> Self {
        let values = vars
            .iter()
            .enumerate()
            .map(|(j, &var)| (var, (index >> j) & 1 == 1))
            .collect();
        Assignment::new(values)
    }

    /// Inverse of [`Assignment::from_index`].
    pub fn index(&self) -> usize {
        self.values
            .iter()
            .enumerate()
            .fold(0, |acc, (j, &(_, b))| acc | ((b as usize) << j))
    }

    pub fn values(&self) -> &[(Var, bool)] {
        &self.values
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.values.iter().map(|&(var, _)| var)
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values.value(var)
    }

    pub fn result(&self) -> Option<bool> {
        self.result
    }

    pub fn with_result(self, result: bool) -> Self {
        Assignment {
            result: Some(result),
            ..self
        }
    }

    /// A new, unevaluated assignment with the value of `var` negated.
    pub fn flipped(&self, var: Var) -> Self {
        let values = self
            .values
            .iter()
            .map(|&(v, b)| if v == var { (v, !b) } else { (v, b) })
            .collect();
        Assignment::new(values)
    }

    /// Number of variables whose values differ between `self` and `other`.
    pub fn distance(&self, other: &Assignment) -> usize {
        self.values
            .iter()
            .filter(|&&(var, b)| other.get(var) != Some(b))
            .count()
    }
}

impl Valuation for Assignment {
    fn value(&self, var: Var) -> Option<bool> {
        self.get(var)
    }
}

pub(crate) fn tf(b: bool) -> char {
    if b {
        'T'
    } else {
        'F'
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let result = self.result.map_or('?', tf);
        if self.values.is_empty() {
            write!(f, "{{Result:{}}}", result)
        } else {
            write!(
                f,
                "{{{}, Result:{}}}",
                self.values.iter().map(|&(var, b)| format!("{}:{}", var, tf(b))).join(", "),
                result
            )
        }
    }
}

/// Serialized as a flat map, `{"A": true, "B": false, "Result": true}`.
impl Serialize for Assignment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        for (var, b) in self.values.iter() {
            map.serialize_entry(&var.to_string(), b)?;
        }
        map.serialize_entry("Result", &self.result)?;
        map.end()
    }
}

pub(crate) fn serialize_var<S>(var: &Var, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_char(var.name())
}

pub(crate) fn serialize_vars<S>(vars: &[Var], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(vars.iter().map(|v| v.name()))
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::*;

    const A: Var = Var('A');
    const B: Var = Var('B');
    const C: Var = Var('C');

    #[test]
    fn test_from_index_bit_order() {
        let vars = [A, B, C];
        let row = Assignment::from_index(&vars, 0b110);
        assert_eq!(row.values(), &[(A, false), (B, true), (C, true)]);
        assert_eq!(row.result(), None);
        assert_eq!(row.index(), 0b110);
    }

    #[test]
    fn test_from_index_no_vars() {
        let row = Assignment::from_index(&[], 0);
        assert!(row.values().is_empty());
        assert_eq!(row.index(), 0);
    }

    #[test]
    fn test_flipped_is_new_and_unevaluated() {
        let row = Assignment::from_index(&[A, B], 0b11).with_result(true);
        let flipped = row.flipped(A);
        assert_eq!(flipped.get(A), Some(false));
        assert_eq!(flipped.get(B), Some(true));
        assert_eq!(flipped.result(), None);
        // Source row untouched.
        assert_eq!(row.get(A), Some(true));
        assert_eq!(row.result(), Some(true));
        assert_eq!(row.distance(&flipped), 1);
    }

    #[test]
    fn test_display() {
        let row = Assignment::from_index(&[A, B], 0b01);
        assert_eq!(row.to_string(), "{A:T, B:F, Result:?}");
        assert_eq!(row.with_result(false).to_string(), "{A:T, B:F, Result:F}");
        assert_eq!(Assignment::new(vec![]).with_result(true).to_string(), "{Result:T}");
    }

    fn first_vars(n: u8) -> Vec<Var> {
        ('A'..='Z').take(n as usize % 8).map(Var).collect()
    }

    #[quickcheck]
    fn index_matches_from_index(n: u8, index: usize) -> bool {
        let vars = first_vars(n);
        let index = index % (1 << vars.len());
        Assignment::from_index(&vars, index).index() == index
    }

    #[quickcheck]
    fn flipping_twice_restores_row(n: u8, index: usize, which: usize) -> bool {
        let vars = first_vars(n);
        if vars.is_empty() {
            return true;
        }
        let row = Assignment::from_index(&vars, index % (1 << vars.len()));
        let var = vars[which % vars.len()];
        let flipped = row.flipped(var);
        flipped.distance(&row) == 1 && flipped.flipped(var) == row
    }

    #[test]
    fn test_serialize() -> color_eyre::Result<()> {
        let row = Assignment::from_index(&[A, B], 0b10).with_result(true);
        let json = serde_json::to_string(&row)?;
        assert_eq!(json, r#"{"A":false,"B":true,"Result":true}"#);
        Ok(())
    }
}
