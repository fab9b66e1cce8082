//! Candidate word listing command
//!
//! Lists every word that survives the letter constraints for a board.

use super::puzzle::Puzzle;
use crate::core::Board;
use crate::solver::{FilterReport, filter_words};

/// Result of listing playable words
pub struct WordListResult {
    pub board: Board,
    pub report: FilterReport,
    /// Surviving words, alphabetically
    pub words: Vec<String>,
}

/// List the words playable on the puzzle's board
#[must_use]
pub fn list_words(puzzle: &Puzzle) -> WordListResult {
    let outcome = filter_words(&puzzle.board, &puzzle.lexicon, &puzzle.exclusions);
    puzzle.warn_unmatched_requests(&outcome);

    WordListResult {
        board: puzzle.board.clone(),
        report: outcome.report,
        words: outcome.words.into_iter().collect(),
    }
}
