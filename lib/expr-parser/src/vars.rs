use itertools::Itertools;

use crate::var::Var;

/// Returns the distinct alphabetic characters of `input` in order of first appearance.
///
/// Everything else (operators, parentheses, digits, whitespace) is skipped, so this never fails.
/// Note that a letter inside a longer word is still a variable: `"true"` yields `[t, r, u, e]`.
pub fn extract_variables(input: &str) -> Vec<Var> {
    input.chars().filter(|c| c.is_alphabetic()).map(Var).unique().collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn names(vars: &[Var]) -> String {
        vars.iter().map(|v| v.name()).collect()
    }

    #[test]
    fn test_first_occurrence_order() {
        let vars = extract_variables("(C || A) && !B && A || C");
        assert_eq!(names(&vars), "CAB");
    }

    #[test]
    fn test_case_sensitive() {
        let vars = extract_variables("a && A");
        assert_eq!(vars, vec![Var('a'), Var('A')]);
    }

    #[test]
    fn test_ignores_operators_and_constants() {
        let vars = extract_variables("!(1 + 0) * ⊤ || ⊥");
        assert!(vars.is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(extract_variables("").is_empty());
        assert!(extract_variables("  && ||  ").is_empty());
    }

    #[test]
    fn test_letters_of_keywords_are_variables() {
        let vars = extract_variables("true");
        assert_eq!(names(&vars), "true");
        let vars = extract_variables("false && e");
        assert_eq!(names(&vars), "false");
    }
}
