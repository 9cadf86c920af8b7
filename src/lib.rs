pub use coverage_core as core;
pub use expr_parser as parser;
