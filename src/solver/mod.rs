//! Letterboxed solving pipeline
//!
//! Filtering, pair search and ranking, run in that order.

pub mod filter;
pub mod pairs;
pub mod ranking;
pub mod transitions;

pub use filter::{FilterOutcome, FilterReport, filter_words};
pub use pairs::{covers, find_solutions};
pub use ranking::{Rankings, ScoredSolution, rank, rank_solutions, score_solutions};
pub use transitions::TransitionCounts;
