/// Knobs of the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Largest number of distinct variables accepted; the table has `2^n` rows.
    pub max_variables: usize,
    /// Evaluate truth table rows on the rayon thread pool.
    pub parallel: bool,
}

/// Hard upper bound on `max_variables`, so that `2^n` always fits in a `usize`.
pub const MAX_SUPPORTED_VARIABLES: usize = (usize::BITS - 1) as usize;

pub const DEFAULT_OPTIONS: Options = Options {
    max_variables: 20,
    parallel: false,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}

impl Options {
    /// The variable ceiling actually enforced.
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(MAX_SUPPORTED_VARIABLES)
    }
}
