//! Letter-constraint filtering
//!
//! Reduces a raw lexicon to the words that can be traced on a board. Checks run
//! in a fixed order and each rejected word is counted under the first check
//! that drops it:
//! 1. Alphabet: every character is a board letter
//! 2. Doubled letters: no two consecutive characters are identical
//! 3. Same side: no two consecutive characters share a side
//! 4. Exclusions: the word is not on the not-a-word list

use std::collections::BTreeSet;

use log::debug;
use rustc_hash::FxHashSet;

use crate::core::{
    Board, Candidate, has_doubled_letter, has_same_side_pair, uses_only_board_letters,
};

/// Diagnostic counts from a filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Lexicon entries made only of board letters, duplicates included
    pub matches: usize,
    /// Matches dropped for a doubled letter
    pub doubled: usize,
    /// Remaining matches dropped for a same-side letter pair
    pub same_side: usize,
    /// Distinct surviving words removed by the exclusion list
    pub excluded: usize,
}

impl FilterReport {
    /// Matches left after removing doubled letters
    #[must_use]
    pub const fn after_doubled(&self) -> usize {
        self.matches - self.doubled
    }

    /// Matches left after removing doubled letters and same-side pairs
    #[must_use]
    pub const fn after_same_side(&self) -> usize {
        self.matches - self.doubled - self.same_side
    }
}

/// Words surviving the filter, with the counts of what was dropped
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Distinct surviving words in sorted order
    pub words: BTreeSet<String>,
    pub report: FilterReport,
    /// Exclusions that matched no word passing the letter constraints
    pub unmatched_exclusions: BTreeSet<String>,
}

impl FilterOutcome {
    /// Surviving words as pairing candidates, in sorted order
    #[must_use]
    pub fn candidates(&self) -> Vec<Candidate> {
        self.words.iter().filter_map(Candidate::new).collect()
    }
}

/// Filter a lexicon down to the words playable on a board
///
/// Matching is case-sensitive; callers normalize the lexicon beforehand.
///
/// # Examples
/// ```
/// use letterboxed::core::Board;
/// use letterboxed::solver::filter_words;
/// use rustc_hash::FxHashSet;
///
/// let board = Board::new("abcdefghijkl").unwrap();
/// let outcome = filter_words(&board, ["bad", "dial", "lab"], &FxHashSet::default());
///
/// assert_eq!(outcome.words.len(), 1);
/// assert!(outcome.words.contains("dial"));
/// assert_eq!(outcome.report.same_side, 2);
/// ```
pub fn filter_words<I, S>(
    board: &Board,
    lexicon: I,
    exclusions: &FxHashSet<String>,
) -> FilterOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = FilterReport::default();
    let mut survivors: BTreeSet<String> = BTreeSet::new();

    for entry in lexicon {
        let word = entry.as_ref();
        if !uses_only_board_letters(board, word) {
            continue;
        }
        report.matches += 1;

        if has_doubled_letter(word) {
            report.doubled += 1;
            continue;
        }

        if has_same_side_pair(board, word) {
            report.same_side += 1;
            continue;
        }

        survivors.insert(word.to_string());
    }

    let unmatched_exclusions: BTreeSet<String> = exclusions
        .iter()
        .filter(|word| !survivors.contains(*word))
        .cloned()
        .collect();

    let before_exclusion = survivors.len();
    survivors.retain(|word| !exclusions.contains(word));
    report.excluded = before_exclusion - survivors.len();

    debug!(
        "filtered board {board}: {} matches, {} doubled, {} same-side, {} excluded, {} kept",
        report.matches,
        report.doubled,
        report.same_side,
        report.excluded,
        survivors.len()
    );
    debug!(
        "{} exclusions matched no playable word",
        unmatched_exclusions.len()
    );

    FilterOutcome {
        words: survivors,
        report,
        unmatched_exclusions,
    }
}
