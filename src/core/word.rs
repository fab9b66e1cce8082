//! Candidate word representation
//!
//! A Candidate stores a word that passed the letter constraints along with the
//! set of distinct letters it uses, for fast coverage checks when pairing.

use std::fmt;

use super::board::Board;

/// Set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Build a set from bytes, ignoring anything outside `a..=z`
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mask = bytes
            .iter()
            .filter(|b| b.is_ascii_lowercase())
            .fold(0u32, |acc, &b| acc | (1 << (b - b'a')));
        Self(mask)
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Check if any two consecutive characters of a word are identical
///
/// # Examples
/// ```
/// use letterboxed::core::has_doubled_letter;
///
/// assert!(has_doubled_letter("balloon"));
/// assert!(!has_doubled_letter("banana"));
/// ```
#[must_use]
pub fn has_doubled_letter(word: &str) -> bool {
    word.as_bytes().windows(2).any(|pair| pair[0] == pair[1])
}

/// Check if every character of a word is a board letter
///
/// Empty words never qualify.
#[must_use]
pub fn uses_only_board_letters(board: &Board, word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| board.contains(b))
}

/// Check if any two consecutive characters of a word sit on the same side
#[must_use]
pub fn has_same_side_pair(board: &Board, word: &str) -> bool {
    word.as_bytes()
        .windows(2)
        .any(|pair| board.same_side(pair[0], pair[1]))
}

/// A word that can be traced on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    letters: LetterSet,
}

impl Candidate {
    /// Create a candidate from a non-empty word
    ///
    /// Returns `None` for an empty string.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text: String = text.into();
        if text.is_empty() {
            return None;
        }
        let letters = LetterSet::from_bytes(text.as_bytes());
        Some(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters used by the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    /// Last letter of the word
    #[inline]
    #[must_use]
    pub fn last(&self) -> u8 {
        self.text.as_bytes()[self.text.len() - 1]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
