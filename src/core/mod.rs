//! Core domain types for Letterboxed
//!
//! This module contains the board, candidate word and solution types.
//! All types here are pure and testable, with no I/O.

mod board;
mod solution;
mod word;

pub use board::{BOARD_SIZE, Board, BoardError, COORDINATES, LETTERS_PER_SIDE, Point, Side};
pub use solution::Solution;
pub use word::{
    Candidate, LetterSet, has_doubled_letter, has_same_side_pair, uses_only_board_letters,
};
