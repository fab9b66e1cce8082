//! Two-word pair search
//!
//! Every unordered pair of candidates is checked once. A pair qualifies when the
//! two words together use every board letter, and is kept when it chains in at
//! least one order.

use log::debug;

use crate::core::{Board, Candidate, LetterSet, Solution};

/// Check whether two words together use every letter in `target`
#[inline]
#[must_use]
pub fn covers(a: &Candidate, b: &Candidate, target: LetterSet) -> bool {
    a.letters().union(b.letters()) == target
}

/// Find all chained pairs that cover the board
///
/// Each unordered pair contributes at most one solution. When both orders
/// chain, the word that comes first in `candidates` leads.
///
/// # Examples
/// ```
/// use letterboxed::core::{Board, Candidate};
/// use letterboxed::solver::find_solutions;
///
/// let board = Board::new("abcdefghijkl").unwrap();
/// let words: Vec<Candidate> = ["adgjbe", "ehkcfil", "dial"]
///     .into_iter()
///     .filter_map(Candidate::new)
///     .collect();
///
/// let solutions = find_solutions(&board, &words);
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].trace(), "adgjbehkcfil");
/// ```
#[must_use]
pub fn find_solutions(board: &Board, candidates: &[Candidate]) -> Vec<Solution> {
    let target = board.letter_set();
    let mut covering = 0usize;
    let mut solutions = Vec::new();

    for (i, first) in candidates.iter().enumerate() {
        for second in &candidates[i + 1..] {
            if !covers(first, second, target) {
                continue;
            }
            covering += 1;

            if let Some(solution) = Solution::chain(first, second) {
                solutions.push(solution);
            }
        }
    }

    debug!(
        "paired {} candidates: {covering} covering pairs, {} chained",
        candidates.len(),
        solutions.len()
    );

    solutions
}
