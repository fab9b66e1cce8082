//! Letterboxed Solver
//!
//! Finds pairs of words that together use all twelve letters of a Letterboxed
//! board, chain last letter to first, and never draw between two letters on the
//! same side.
//!
//! # Quick Start
//!
//! ```rust
//! use letterboxed::core::Board;
//! use letterboxed::solver::{filter_words, find_solutions, rank_solutions};
//! use rustc_hash::FxHashSet;
//!
//! let board = Board::new("abcdefghijkl").unwrap();
//! let lexicon = ["adgjbe", "ehkcfil", "bad"];
//!
//! let outcome = filter_words(&board, lexicon, &FxHashSet::default());
//! let solutions = find_solutions(&board, &outcome.candidates());
//! let rankings = rank_solutions(&board, solutions);
//!
//! assert_eq!(rankings.len(), 1);
//! println!("{:.2}", rankings.by_distance[0].distance);
//! ```

// Core domain types
pub mod core;

// Filtering, pairing and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
