//! Word lists for Letterboxed solving
//!
//! Lexicons are read once at startup from plain-text files.

pub mod loader;

pub use loader::{load_exclusions, load_from_file, words_from_slice, words_from_str};

/// Lexicon path used when none is given
pub const DEFAULT_WORDLIST: &str = "data/words.list";
