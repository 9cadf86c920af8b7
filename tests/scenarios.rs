use color_eyre::eyre::Result;
use itertools::Itertools;
use test_log::test;

use coverage_nexus::core::{analyze, AnalysisError, Analyzer, Criterion, Options};
use coverage_nexus::parser::Var;
use coverage_test_utils::{check_report, row};

#[test]
fn and_of_two_variables() -> Result<()> {
    let report = analyze("A && B")?;
    check_report(&report)?;

    assert_eq!(report.variables, vec![Var('A'), Var('B')]);
    assert_eq!(
        report.truth_table,
        vec![
            row("AB", "FF", false),
            row("AB", "TF", false),
            row("AB", "FT", false),
            row("AB", "TT", true),
        ]
    );
    assert_eq!(report.predicate, vec![row("AB", "TT", true), row("AB", "FF", false)]);
    assert_eq!(report.combinatorial, vec![row("AB", "TT", true)]);

    assert_eq!(report.active_clause.len(), 2);
    assert_eq!(report.active_clause[0].var, Var('A'));
    assert_eq!(report.active_clause[0].original, row("AB", "TT", true));
    assert_eq!(report.active_clause[0].flipped, row("AB", "FT", false));
    assert_eq!(report.active_clause[1].var, Var('B'));
    assert_eq!(report.active_clause[1].original, row("AB", "TT", true));
    assert_eq!(report.active_clause[1].flipped, row("AB", "TF", false));

    Ok(())
}

#[test]
fn tautology() -> Result<()> {
    let report = analyze("A || !A")?;
    check_report(&report)?;

    assert_eq!(report.predicate, vec![row("A", "F", true)]);
    assert_eq!(report.combinatorial, report.truth_table);
    assert!(report.active_clause.is_empty());
    assert_eq!(report.render(Criterion::ActiveClause), "No data available.\n");

    Ok(())
}

#[test]
fn contradiction() -> Result<()> {
    let report = analyze("A * !A")?;
    check_report(&report)?;

    assert_eq!(report.predicate, vec![row("A", "F", false)]);
    assert!(report.combinatorial.is_empty());
    assert!(report.active_clause.is_empty());

    Ok(())
}

#[test]
fn malformed_expression_fails_every_row() {
    match analyze("A &&") {
        Err(AnalysisError::RowsFailed {
            failed_rows,
            total_rows,
            source,
        }) => {
            assert_eq!(failed_rows, 2);
            assert_eq!(total_rows, 2);
            assert!(source.to_string().starts_with("Cannot evaluate 'A &&'"));
        }
        other => panic!("expected a row failure, got {:?}", other),
    }
}

#[test]
fn multi_character_identifier_is_rejected() {
    // f, o and B are still extracted, so all 8 rows fail on the parse error.
    let err = analyze("foo && B").unwrap_err();
    assert!(matches!(err, AnalysisError::RowsFailed { total_rows: 8, .. }));
    assert!(err.cause().contains("foo"));
}

#[test]
fn constants_only() -> Result<()> {
    let report = analyze("1 && !0 || ⊥")?;
    check_report(&report)?;

    assert!(report.variables.is_empty());
    assert_eq!(report.truth_table.len(), 1);
    assert_eq!(report.truth_table[0].to_string(), "{Result:T}");
    assert_eq!(report.predicate.len(), 1);
    assert_eq!(report.render(Criterion::TruthTable), "Result\nT\n");

    Ok(())
}

#[test]
fn variables_in_order_of_first_appearance() -> Result<()> {
    let report = analyze("C + (A * !C) + B")?;
    check_report(&report)?;
    assert_eq!(report.variables, vec![Var('C'), Var('A'), Var('B')]);
    Ok(())
}

#[test]
fn row_bits_follow_row_index() -> Result<()> {
    let report = analyze("(A || B) && !(C * D)")?;
    check_report(&report)?;

    for (i, assignment) in report.truth_table.iter().enumerate() {
        let bits = report
            .variables
            .iter()
            .map(|&var| assignment.get(var))
            .collect_vec();
        let expected = (0..report.variables.len()).map(|j| Some((i >> j) & 1 == 1)).collect_vec();
        assert_eq!(bits, expected, "row {}", i);
    }

    Ok(())
}

#[test]
fn analysis_is_repeatable() -> Result<()> {
    let expression = "A && (B || !C) + D";
    let sequential = analyze(expression)?;
    let parallel = Analyzer::new(Options {
        parallel: true,
        ..Options::default()
    })
    .analyze(expression)?;
    assert_eq!(sequential, analyze(expression)?);
    assert_eq!(sequential, parallel);
    Ok(())
}

#[test]
fn variable_limit() {
    let analyzer = Analyzer::new(Options {
        max_variables: 3,
        ..Options::default()
    });
    let err = analyzer.analyze("A + B + C + D").unwrap_err();
    assert!(matches!(err, AnalysisError::TooManyVariables { count: 4, max: 3 }));
}

#[test]
fn text_rendering() -> Result<()> {
    let report = analyze("A && B")?;
    assert_eq!(
        report.render(Criterion::TruthTable),
        "A B | Result\nF F | F\nT F | F\nF T | F\nT T | T\n"
    );
    assert_eq!(
        report.render(Criterion::ActiveClause),
        "A B | Result\nT T | T\nF T | F\nT T | T\nT F | F\n"
    );
    Ok(())
}

#[test]
fn json_report() -> Result<()> {
    let report = analyze("A || B")?;
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["expression"], "A || B");
    assert_eq!(json["predicate"][0], serde_json::json!({"A": true, "B": false, "Result": true}));
    assert_eq!(json["predicate"][1], serde_json::json!({"A": false, "B": false, "Result": false}));
    assert_eq!(json["truth_table"].as_array().map(|rows| rows.len()), Some(4));
    Ok(())
}
