//! Letter-transition counts across solution traces

use rustc_hash::FxHashMap;

use crate::core::Solution;

/// How often each ordered letter pair is drawn across a set of traces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    counts: FxHashMap<(u8, u8), usize>,
}

impl TransitionCounts {
    /// Count consecutive letter pairs in every solution's trace
    #[must_use]
    pub fn from_solutions<'a, I>(solutions: I) -> Self
    where
        I: IntoIterator<Item = &'a Solution>,
    {
        let mut counts: FxHashMap<(u8, u8), usize> = FxHashMap::default();
        for solution in solutions {
            let trace = solution.trace();
            for pair in trace.as_bytes().windows(2) {
                *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Times the pair `from` → `to` was drawn
    #[must_use]
    pub fn get(&self, from: u8, to: u8) -> usize {
        self.counts.get(&(from, to)).copied().unwrap_or(0)
    }

    /// Number of distinct pairs seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pairs ordered by count descending, then alphabetically
    ///
    /// Returns at most `limit` entries when given.
    #[must_use]
    pub fn most_common(&self, limit: Option<usize>) -> Vec<((char, char), usize)> {
        let mut entries: Vec<((char, char), usize)> = self
            .counts
            .iter()
            .map(|(&(a, b), &count)| ((char::from(a), char::from(b)), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }
}
