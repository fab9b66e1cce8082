//! Command implementations

pub mod puzzle;
pub mod solve;
pub mod transitions;
pub mod words;

pub use puzzle::{Puzzle, PuzzleConfig};
pub use solve::{SolveResult, solve_puzzle};
pub use transitions::{TransitionReport, count_transitions};
pub use words::{WordListResult, list_words};
