use log::debug;
use once_cell::sync::Lazy;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::PrattParser;
use pest::Parser;
use snafu::ResultExt;

use crate::error::{MultiCharIdentifierSnafu, ParseError, SyntaxSnafu};
use crate::expr::Expr;
use crate::var::Var;

#[derive(Parser)]
#[grammar = "grammar/predicate.pest"] // relative to project `src`
pub struct PredicateParser;

static PRATT_PARSER: Lazy<PrattParser<Rule>> = Lazy::new(|| {
    use pest::pratt_parser::{Assoc::*, Op};
    use Rule::*;

    // Precedence is defined lowest to highest
    PrattParser::new()
        .op(Op::infix(or, Left))
        .op(Op::infix(and, Left))
        .op(Op::prefix(not))
});

fn rename_rule(rule: &Rule) -> String {
    match rule {
        Rule::and => "'&&' or '*'",
        Rule::or => "'||' or '+'",
        Rule::not => "'!'",
        Rule::variable => "variable",
        Rule::true_lit => "'1' or '⊤'",
        Rule::false_lit => "'0' or '⊥'",
        Rule::expr => "expression",
        Rule::EOI => "end of input",
        _ => return format!("{:?}", rule),
    }
    .to_string()
}

/// Parses a predicate into an [`Expr`].
///
/// Runs of letters are tokenized greedily and must be exactly one letter long, so `AB` is
/// rejected with [`ParseError::MultiCharIdentifier`] instead of being read as a product.
pub fn parse_expr(input: &str) -> Result<Expr, ParseError> {
    let mut pairs = PredicateParser::parse(Rule::main, input)
        .map_err(|e| e.renamed_rules(rename_rule))
        .context(SyntaxSnafu)
        .map_err(|e| {
            debug!("Failed to parse {:?}: {}", input, e);
            e
        })?;
    let expr = pairs.next().expect("`main` always starts with an `expr`");

    fn parse_expr(pairs: Pairs<Rule>) -> Result<Expr, ParseError> {
        PRATT_PARSER
            .map_primary(parse_atom)
            .map_prefix(|op, arg| {
                debug!("prefix = {:?}", op.as_str());
                match op.as_rule() {
                    Rule::not => Ok(Expr::not(arg?)),
                    rule => unreachable!("unexpected prefix operator {:?}", rule),
                }
            })
            .map_infix(|lhs, op, rhs| {
                debug!("infix = {:?}", op.as_str());
                let (lhs, rhs) = (lhs?, rhs?);
                match op.as_rule() {
                    Rule::and => Ok(Expr::and(lhs, rhs)),
                    Rule::or => Ok(Expr::or(lhs, rhs)),
                    rule => unreachable!("unexpected infix operator {:?}", rule),
                }
            })
            .parse(pairs)
    }

    fn parse_atom(atom: Pair<Rule>) -> Result<Expr, ParseError> {
        debug!("atom = {:?} = {}", atom.as_str(), atom);
        match atom.as_rule() {
            Rule::expr => {
                // Braced expression
                parse_expr(atom.into_inner())
            }
            Rule::variable => {
                let name = atom.as_str();
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Expr::Var(Var(c))),
                    _ => {
                        let (line, column) = atom.as_span().start_pos().line_col();
                        MultiCharIdentifierSnafu {
                            identifier: name,
                            line,
                            column,
                        }
                        .fail()
                    }
                }
            }
            Rule::true_lit => Ok(Expr::Const(true)),
            Rule::false_lit => Ok(Expr::Const(false)),
            rule => unreachable!("unexpected atom {:?}", rule),
        }
    }

    parse_expr(expr.into_inner())
}
