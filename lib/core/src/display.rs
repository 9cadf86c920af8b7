use std::fmt::Write as _;

use itertools::Itertools;

use expr_parser::Var;

use crate::assignment::{tf, Assignment};

/// Printed in place of an empty table.
pub const NO_DATA: &str = "No data available.";

/// Render rows as a text table with one `T`/`F` column per variable and a `Result` column.
///
/// ```txt
/// A B | Result
/// T T | T
/// F F | F
/// ```
pub fn render_rows<'a, I>(vars: &[Var], rows: I) -> String
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let rows = rows.into_iter().collect_vec();
    if rows.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let mut output = String::new();
    if vars.is_empty() {
        writeln!(output, "Result").unwrap();
    } else {
        writeln!(output, "{} | Result", vars.iter().join(" ")).unwrap();
    }

    for row in rows {
        let result = row.result().map_or('?', tf);
        if vars.is_empty() {
            writeln!(output, "{}", result).unwrap();
        } else {
            let cells = vars
                .iter()
                .map(|&var| row.get(var).map_or('?', tf))
                .join(" ");
            writeln!(output, "{} | {}", cells, result).unwrap();
        }
    }

    output
}

/// Syntax accepted in expressions, for display after a failed analysis.
pub fn syntax_rules() -> &'static [&'static str] {
    &[
        "To represent OR, use '||' or '+'.",
        "To represent AND, use '&&' or '*'.",
        "To represent NOT, use '!'.",
        "Variables must each be a single alphabetic character.",
        "Constants are '1' or '⊤' for true, '0' or '⊥' for false.",
        "Parentheses can be used to group expressions; each must have a match.",
        "Variables must have one of the above operators between them.",
        "Each binary operator must have an operand on both sides.",
    ]
}
