//! Letterboxed board representation
//!
//! A Board stores the twelve puzzle letters in clockwise order starting at the
//! top-left corner, three letters per side, along with a lookup from letter to
//! board position.

use rustc_hash::FxHashMap;
use std::fmt;

use super::word::LetterSet;

/// Number of letters on a board
pub const BOARD_SIZE: usize = 12;

/// Number of letters on each side of the square
pub const LETTERS_PER_SIDE: usize = 3;

/// Fixed pencil coordinates of each board position on the unit square.
///
/// Positions run clockwise from the top-left: the top edge left to right, the
/// right edge top to bottom, the bottom edge right to left, then the left edge
/// bottom to top.
pub const COORDINATES: [Point; BOARD_SIZE] = [
    Point::new(0.2, 1.0),
    Point::new(0.5, 1.0),
    Point::new(0.8, 1.0),
    Point::new(1.0, 0.8),
    Point::new(1.0, 0.5),
    Point::new(1.0, 0.2),
    Point::new(0.8, 0.0),
    Point::new(0.5, 0.0),
    Point::new(0.2, 0.0),
    Point::new(0.0, 0.2),
    Point::new(0.0, 0.5),
    Point::new(0.0, 0.8),
];

/// A point on the board's unit square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// One of the four sides of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in clockwise order from the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Side that owns a board position (0-11)
    ///
    /// # Panics
    /// Panics if position >= 12
    #[must_use]
    pub const fn of_position(position: usize) -> Self {
        Self::ALL[position / LETTERS_PER_SIDE]
    }

    /// Zero-based index in clockwise order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Error type for malformed board letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongLength(usize),
    NonLetter(char),
    DuplicateLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Board must have exactly {BOARD_SIZE} letters, got {len}")
            }
            Self::NonLetter(ch) => {
                write!(f, "Board letters must be ASCII letters, got '{ch}'")
            }
            Self::DuplicateLetter(ch) => {
                write!(f, "Board letters must be distinct, '{ch}' appears more than once")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A Letterboxed puzzle board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    letters: [u8; BOARD_SIZE],
    positions: FxHashMap<u8, usize>,
    letter_set: LetterSet,
}

impl Board {
    /// Create a board from twelve letters given clockwise from the top-left corner
    ///
    /// Letters are lowercased before validation.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The input does not contain exactly 12 characters
    /// - Any character is not an ASCII letter
    /// - Any letter appears more than once
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::{Board, Side};
    ///
    /// let board = Board::new("abcdefghijkl").unwrap();
    /// assert_eq!(board.side_of(b'e'), Some(Side::Right));
    ///
    /// assert!(Board::new("abc").is_err());
    /// assert!(Board::new("abcdefghijka").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self, BoardError> {
        let text = letters.trim().to_lowercase();

        let count = text.chars().count();
        if count != BOARD_SIZE {
            return Err(BoardError::WrongLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(BoardError::NonLetter(bad));
        }

        let mut board_letters = [0u8; BOARD_SIZE];
        let mut positions: FxHashMap<u8, usize> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            if positions.insert(ch, i).is_some() {
                return Err(BoardError::DuplicateLetter(char::from(ch)));
            }
            board_letters[i] = ch;
        }

        Ok(Self {
            letters: board_letters,
            positions,
            letter_set: LetterSet::from_bytes(&board_letters),
        })
    }

    /// The twelve letters in clockwise order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; BOARD_SIZE] {
        &self.letters
    }

    /// Set of all board letters
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }

    /// Check if a letter is on the board
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Board position (0-11) of a letter
    #[inline]
    #[must_use]
    pub fn position_of(&self, letter: u8) -> Option<usize> {
        self.positions.get(&letter).copied()
    }

    /// Side a letter sits on
    #[inline]
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<Side> {
        self.position_of(letter).map(Side::of_position)
    }

    /// Check whether two letters sit on the same side
    ///
    /// Letters not on the board are never on the same side as anything.
    #[inline]
    #[must_use]
    pub fn same_side(&self, a: u8, b: u8) -> bool {
        match (self.side_of(a), self.side_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// The three letters on a side, in clockwise order
    #[must_use]
    pub fn side_letters(&self, side: Side) -> &[u8] {
        let start = side.index() * LETTERS_PER_SIDE;
        &self.letters[start..start + LETTERS_PER_SIDE]
    }

    /// Pencil coordinate of a letter
    #[inline]
    #[must_use]
    pub fn coordinate_of(&self, letter: u8) -> Option<Point> {
        self.position_of(letter).map(|pos| COORDINATES[pos])
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in Side::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for &ch in self.side_letters(*side) {
                write!(f, "{}", char::from(ch))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_creation_valid() {
        let board = Board::new("abcdefghijkl").unwrap();
        assert_eq!(board.letters(), b"abcdefghijkl");
        assert_eq!(board.letter_set().len(), 12);
    }

    #[test]
    fn board_creation_uppercase_normalized() {
        let board = Board::new("ABCdefGHIjkl").unwrap();
        assert_eq!(board.letters(), b"abcdefghijkl");
    }

    #[test]
    fn board_creation_wrong_length() {
        assert_eq!(Board::new("abc"), Err(BoardError::WrongLength(3)));
        assert_eq!(Board::new(""), Err(BoardError::WrongLength(0)));
        assert_eq!(
            Board::new("abcdefghijklm"),
            Err(BoardError::WrongLength(13))
        );
    }

    #[test]
    fn board_creation_duplicate_letter() {
        assert_eq!(
            Board::new("abcdefghijka"),
            Err(BoardError::DuplicateLetter('a'))
        );
    }

    #[test]
    fn board_creation_non_letter() {
        assert_eq!(
            Board::new("abcdefghijk1"),
            Err(BoardError::NonLetter('1'))
        );
        assert_eq!(
            Board::new("abcdefghijk-"),
            Err(BoardError::NonLetter('-'))
        );
    }

    #[test]
    fn board_error_mentions_expected_count() {
        let msg = BoardError::WrongLength(5).to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn sides_are_positional() {
        let board = Board::new("abcdefghijkl").unwrap();
        assert_eq!(board.side_letters(Side::Top), b"abc");
        assert_eq!(board.side_letters(Side::Right), b"def");
        assert_eq!(board.side_letters(Side::Bottom), b"ghi");
        assert_eq!(board.side_letters(Side::Left), b"jkl");

        assert_eq!(board.side_of(b'a'), Some(Side::Top));
        assert_eq!(board.side_of(b'f'), Some(Side::Right));
        assert_eq!(board.side_of(b'g'), Some(Side::Bottom));
        assert_eq!(board.side_of(b'l'), Some(Side::Left));
        assert_eq!(board.side_of(b'z'), None);
    }

    #[test]
    fn same_side_lookup() {
        let board = Board::new("abcdefghijkl").unwrap();
        assert!(board.same_side(b'a', b'b'));
        assert!(board.same_side(b'c', b'a'));
        assert!(!board.same_side(b'c', b'd'));
        assert!(!board.same_side(b'z', b'z'));
    }

    #[test]
    fn coordinates_follow_positions() {
        let board = Board::new("lkjihgfedcba").unwrap();
        assert_eq!(board.coordinate_of(b'l'), Some(Point::new(0.2, 1.0)));
        assert_eq!(board.coordinate_of(b'a'), Some(Point::new(0.0, 0.8)));
        assert_eq!(board.coordinate_of(b'z'), None);
    }

    #[test]
    fn coordinates_lie_on_perimeter() {
        for point in COORDINATES {
            let on_edge = point.x == 0.0 || point.x == 1.0 || point.y == 0.0 || point.y == 1.0;
            assert!(on_edge, "{point:?} is not on the unit square");
        }
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn board_display() {
        let board = Board::new("abcdefghijkl").unwrap();
        assert_eq!(format!("{board}"), "abc def ghi jkl");
    }
}
