//! Solution scoring and ranking
//!
//! Each solution gets two metrics: its total letter count and its pencil-line
//! distance across the board. Two orderings are produced, both descending, and
//! both contain every scored solution.

use log::warn;

use crate::core::{Board, Solution};

/// A solution with its ranking metrics
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSolution {
    pub solution: Solution,
    /// Letters in both words, joint letter counted twice
    pub letters: usize,
    /// Pencil-line distance of the trace
    pub distance: f64,
}

impl ScoredSolution {
    /// Score a solution on a board
    ///
    /// Returns `None` if the solution uses a letter not on the board.
    #[must_use]
    pub fn new(solution: Solution, board: &Board) -> Option<Self> {
        let distance = solution.pencil_distance(board)?;
        Some(Self {
            letters: solution.letter_count(),
            solution,
            distance,
        })
    }
}

/// The two orderings of a solution set
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    /// Longest total letter count first
    pub by_length: Vec<ScoredSolution>,
    /// Longest pencil-line distance first
    pub by_distance: Vec<ScoredSolution>,
}

impl Rankings {
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

/// Score every solution against the board
#[must_use]
pub fn score_solutions(board: &Board, solutions: Vec<Solution>) -> Vec<ScoredSolution> {
    solutions
        .into_iter()
        .filter_map(|solution| {
            let scored = ScoredSolution::new(solution.clone(), board);
            if scored.is_none() {
                warn!("skipping {solution}: uses a letter not on board {board}");
            }
            scored
        })
        .collect()
}

/// Order scored solutions by letter count and by pencil distance
///
/// Ties in either ordering are broken by first word, then second word.
#[must_use]
pub fn rank(scored: Vec<ScoredSolution>) -> Rankings {
    let mut by_length = scored.clone();
    by_length.sort_by(|a, b| {
        b.letters
            .cmp(&a.letters)
            .then_with(|| a.solution.cmp(&b.solution))
    });

    let mut by_distance = scored;
    by_distance.sort_by(|a, b| {
        b.distance
            .total_cmp(&a.distance)
            .then_with(|| a.solution.cmp(&b.solution))
    });

    Rankings {
        by_length,
        by_distance,
    }
}

/// Score and rank solutions in one step
#[must_use]
pub fn rank_solutions(board: &Board, solutions: Vec<Solution>) -> Rankings {
    rank(score_solutions(board, solutions))
}
