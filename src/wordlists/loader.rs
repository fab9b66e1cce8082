//! Word list loading utilities
//!
//! Lexicons and not-a-word lists are plain text, one word per line. Entries are
//! trimmed and lowercased; blank lines are skipped. Entries with non-letter
//! characters are kept as-is and simply never match a board.

use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;

/// Normalize a single word list entry
///
/// Returns `None` for blank lines.
#[must_use]
pub fn normalize_word(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Parse line-delimited word list text
///
/// # Examples
/// ```
/// use letterboxed::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Dial\n\n  lab \n");
/// assert_eq!(words, vec!["dial", "lab"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize_word).collect()
}

/// Convert a string slice list into normalized words
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<String> {
    slice
        .iter()
        .filter_map(|s| normalize_word(s.as_ref()))
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterboxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.list").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Load a not-a-word list from a file as a set
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_exclusions<P: AsRef<Path>>(path: P) -> io::Result<FxHashSet<String>> {
    Ok(load_from_file(path)?.into_iter().collect())
}
