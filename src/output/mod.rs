//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_filter_summary, print_solve_result, print_transitions, print_word_list};
