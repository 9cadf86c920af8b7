use crate::assignment::Assignment;
use crate::table::TruthTable;

/// Every row of `table` that evaluates to true, in table order.
pub fn combinatorial_coverage(table: &TruthTable) -> Vec<Assignment> {
    table
        .rows()
        .iter()
        .filter(|row| row.result() == Some(true))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use expr_parser::Var;

    use super::*;

    #[test]
    fn test_filter_keeps_order() {
        let vars = [Var('A'), Var('B')];
        let mut table = TruthTable::new(vars.to_vec());
        for (i, result) in [true, false, true, true].into_iter().enumerate() {
            table.add_row(Assignment::from_index(&vars, i).with_result(result));
        }
        let cover = combinatorial_coverage(&table);
        let indices: Vec<usize> = cover.iter().map(|row| row.index()).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert!(cover.iter().all(|row| row.result() == Some(true)));
    }

    #[test]
    fn test_contradiction_is_empty() {
        let vars = [Var('A')];
        let mut table = TruthTable::new(vars.to_vec());
        for i in 0..2 {
            table.add_row(Assignment::from_index(&vars, i).with_result(false));
        }
        assert!(combinatorial_coverage(&table).is_empty());
    }
}
