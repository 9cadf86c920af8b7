use color_eyre::eyre::{ensure, eyre};
use itertools::Itertools;
use quickcheck::{Arbitrary, Gen};

use coverage_core::{Assignment, CoverageReport, ExpressionEvaluator};
use expr_parser::Var;

/// Builds an evaluated row, e.g. `row("AB", "TF", false)` for `{A:T, B:F, Result:F}`.
pub fn row(vars: &str, values: &str, result: bool) -> Assignment {
    assert_eq!(vars.chars().count(), values.chars().count(), "one value per variable");
    let values = vars
        .chars()
        .zip(values.chars())
        .map(|(var, value)| match value {
            'T' => (Var(var), true),
            'F' => (Var(var), false),
            c => panic!("Bad value '{}', expected 'T' or 'F'", c),
        })
        .collect();
    Assignment::new(values).with_result(result)
}

/// Checks the structural guarantees every successful report must satisfy.
pub fn check_report(report: &CoverageReport) -> color_eyre::Result<()> {
    let n = report.variables.len();
    let table = &report.truth_table;
    ensure!(table.len() == 1 << n, "table has {} rows for {} variables", table.len(), n);

    for (i, row) in table.iter().enumerate() {
        let vars = row.vars().collect_vec();
        ensure!(vars == report.variables, "row {} has variables {:?}", i, vars);
        ensure!(row.index() == i, "row {} encodes index {}", i, row.index());
        ensure!(row.result().is_some(), "row {} is not evaluated", i);
    }

    // Combinatorial: order-preserving subsequence of the true rows.
    let true_rows = table.iter().filter(|r| r.result() == Some(true)).collect_vec();
    ensure!(
        report.combinatorial.iter().collect_vec() == true_rows,
        "combinatorial coverage is not the true rows of the table"
    );

    // Predicate: first true row, then first false row.
    let first_true = table.iter().find(|r| r.result() == Some(true));
    let first_false = table.iter().find(|r| r.result() == Some(false));
    let expected = [first_true, first_false].into_iter().flatten().collect_vec();
    ensure!(report.predicate.len() <= 2, "predicate coverage has {} rows", report.predicate.len());
    ensure!(
        report.predicate.iter().collect_vec() == expected,
        "predicate coverage is not the first true and first false rows"
    );

    let evaluator = ExpressionEvaluator::new(report.expression.as_str());
    let expr = evaluator
        .expr()
        .ok_or_else(|| eyre!("report for unparsable expression '{}'", report.expression))?;
    for var in expr.vars() {
        ensure!(report.variables.contains(&var), "variable {} of the expression is not reported", var);
    }

    // Active clause: one pair per determinant variable, in variable order.
    let mut last_position = None;
    for pair in report.active_clause.iter() {
        let position = report
            .variables
            .iter()
            .position(|&v| v == pair.var)
            .ok_or_else(|| eyre!("pair for unknown variable {}", pair.var))?;
        ensure!(
            last_position.map_or(true, |last| last < position),
            "pair for {} is out of variable order",
            pair.var
        );
        last_position = Some(position);

        ensure!(pair.original.distance(&pair.flipped) == 1, "pair for {} differs in more than one variable", pair.var);
        ensure!(pair.original.get(pair.var) != pair.flipped.get(pair.var), "pair for {} does not flip it", pair.var);
        ensure!(table.contains(&pair.original), "original row for {} is not in the table", pair.var);
        ensure!(pair.original.result() == Some(true), "original row for {} is not true", pair.var);
        ensure!(pair.flipped.result() == Some(false), "flipped row for {} is not false", pair.var);
        ensure!(!evaluator.evaluate(&pair.flipped)?, "flipped row for {} evaluates to true", pair.var);
    }

    Ok(())
}

/// A random well-formed predicate over a handful of variables and constants.
#[derive(Debug, Clone)]
pub struct PredicateString(pub String);

const ATOMS: &[&str] = &["A", "B", "C", "D", "t", "e", "1", "0"];
const AND_OPS: &[&str] = &[" && ", "&&", " * ", "*"];
const OR_OPS: &[&str] = &[" || ", "||", " + ", "+"];

fn gen_predicate(g: &mut Gen, depth: usize) -> String {
    if depth == 0 || u8::arbitrary(g) % 3 == 0 {
        return g.choose(ATOMS).copied().unwrap_or("A").to_string();
    }
    match u8::arbitrary(g) % 4 {
        0 => format!("!{}", gen_predicate(g, depth - 1)),
        1 => format!("({})", gen_predicate(g, depth - 1)),
        2 => {
            let op = g.choose(AND_OPS).copied().unwrap_or("&&");
            format!("{}{}{}", gen_predicate(g, depth - 1), op, gen_predicate(g, depth - 1))
        }
        _ => {
            let op = g.choose(OR_OPS).copied().unwrap_or("||");
            format!("{}{}{}", gen_predicate(g, depth - 1), op, gen_predicate(g, depth - 1))
        }
    }
}

impl Arbitrary for PredicateString {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(4);
        PredicateString(gen_predicate(g, depth))
    }
}
