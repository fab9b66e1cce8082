//! Letter-transition analysis command
//!
//! Solves the puzzle and counts how often each ordered letter pair is drawn
//! across all solution traces.

use super::puzzle::Puzzle;
use super::solve::solve_puzzle;
use crate::solver::TransitionCounts;

/// Result of a transition analysis
pub struct TransitionReport {
    pub solutions: usize,
    /// Distinct letter pairs drawn
    pub distinct: usize,
    /// Most frequent pairs, highest count first
    pub top: Vec<((char, char), usize)>,
}

/// Count letter transitions across every solution of the puzzle
#[must_use]
pub fn count_transitions(puzzle: &Puzzle, top: Option<usize>) -> TransitionReport {
    let result = solve_puzzle(puzzle);
    let counts = TransitionCounts::from_solutions(
        result.rankings.by_length.iter().map(|scored| &scored.solution),
    );

    TransitionReport {
        solutions: result.solution_count(),
        distinct: counts.len(),
        top: counts.most_common(top),
    }
}
