//! Puzzle solving command
//!
//! Runs the full pipeline: filter the lexicon, pair the survivors, then score
//! and rank the solutions.

use log::info;

use super::puzzle::Puzzle;
use crate::core::Board;
use crate::solver::{FilterReport, Rankings, filter_words, find_solutions, rank_solutions};

/// Result of solving a puzzle
pub struct SolveResult {
    pub board: Board,
    pub report: FilterReport,
    /// Distinct words surviving every filter
    pub candidates: usize,
    pub rankings: Rankings,
}

impl SolveResult {
    /// Number of solutions found
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.rankings.len()
    }
}

/// Solve a loaded puzzle
///
/// Finding no solutions is not an error; the rankings are simply empty.
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle) -> SolveResult {
    let outcome = filter_words(&puzzle.board, &puzzle.lexicon, &puzzle.exclusions);
    puzzle.warn_unmatched_requests(&outcome);
    let candidates = outcome.candidates();

    let solutions = find_solutions(&puzzle.board, &candidates);
    let rankings = rank_solutions(&puzzle.board, solutions);

    info!(
        "board {}: {} candidates, {} solutions",
        puzzle.board,
        candidates.len(),
        rankings.len()
    );

    SolveResult {
        board: puzzle.board.clone(),
        report: outcome.report,
        candidates: candidates.len(),
        rankings,
    }
}
