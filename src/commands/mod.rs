//! Command implementations

pub mod check;
pub mod evaluate;
pub mod simple;

pub use check::{CheckReport, RowParseError, check_candidate, parse_row};
pub use evaluate::{EvaluationReport, evaluate_guesses};
pub use simple::{SimpleCommand, run_simple};
