//! Two-word solutions and their pencil traces

use std::fmt;

use super::board::Board;
use super::word::Candidate;

/// An ordered pair of words where the first ends on the letter the second starts with
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    first: String,
    second: String,
}

impl Solution {
    /// Orient two words into a chained solution
    ///
    /// Tries `a` then `b` first; only when that fails is `b` then `a` tried.
    /// Returns `None` if the words chain in neither order.
    ///
    /// # Examples
    /// ```
    /// use letterboxed::core::{Candidate, Solution};
    ///
    /// let a = Candidate::new("dial").unwrap();
    /// let b = Candidate::new("lag").unwrap();
    /// let solution = Solution::chain(&b, &a).unwrap();
    /// assert_eq!(solution.first(), "dial");
    /// assert_eq!(solution.trace(), "dialag");
    /// ```
    #[must_use]
    pub fn chain(a: &Candidate, b: &Candidate) -> Option<Self> {
        if a.last() == b.first() {
            Some(Self::new(a.text(), b.text()))
        } else if b.last() == a.first() {
            Some(Self::new(b.text(), a.text()))
        } else {
            None
        }
    }

    fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Total letters of both words, the shared joint counted twice
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Number of letters in the trace
    #[inline]
    #[must_use]
    pub fn trace_len(&self) -> usize {
        self.letter_count().saturating_sub(1)
    }

    /// The pencil path: the first word followed by the second minus its first letter
    #[must_use]
    pub fn trace(&self) -> String {
        let mut trace = String::with_capacity(self.trace_len());
        trace.push_str(&self.first);
        trace.push_str(self.second.get(1..).unwrap_or_default());
        trace
    }

    /// Sum of straight-line distances between consecutive trace letters
    ///
    /// Returns `None` if the trace contains a letter not on the board.
    #[must_use]
    pub fn pencil_distance(&self, board: &Board) -> Option<f64> {
        let points = self
            .trace()
            .bytes()
            .map(|b| board.coordinate_of(b))
            .collect::<Option<Vec<_>>>()?;

        Some(
            points
                .windows(2)
                .map(|pair| pair[0].distance_to(pair[1]))
                .sum(),
        )
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.first, self.second)
    }
}
