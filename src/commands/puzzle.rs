//! Puzzle configuration and input loading
//!
//! Collects everything a run needs (board letters, lexicon path, exclusions)
//! into one explicit configuration, then loads it into a ready-to-solve puzzle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::core::Board;
use crate::solver::FilterOutcome;
use crate::wordlists::{DEFAULT_WORDLIST, load_exclusions, load_from_file, loader::normalize_word};

/// Configuration for one puzzle run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Twelve board letters, clockwise from the top-left corner
    pub letters: String,
    /// Line-delimited lexicon file
    pub wordlist: PathBuf,
    /// Optional line-delimited not-a-word file
    pub not_words: Option<PathBuf>,
    /// Extra words to exclude, unioned with the not-a-word file
    pub exclude: Vec<String>,
    /// Cap on the number of entries listed per ranking
    pub limit: Option<usize>,
}

impl PuzzleConfig {
    #[must_use]
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            not_words: None,
            exclude: Vec::new(),
            limit: None,
        }
    }
}

/// A validated board with its lexicon and exclusion set
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub board: Board,
    pub lexicon: Vec<String>,
    /// Command-line exclusions unioned with the not-a-word file
    pub exclusions: FxHashSet<String>,
    /// Exclusions given directly rather than read from a file
    pub requested: FxHashSet<String>,
}

impl Puzzle {
    /// Build a puzzle from in-memory parts
    ///
    /// Exclusions are normalized the same way lexicon entries are.
    ///
    /// # Errors
    ///
    /// Returns an error if the board letters are malformed.
    pub fn from_parts<S: AsRef<str>>(
        letters: &str,
        lexicon: Vec<String>,
        exclusions: &[S],
    ) -> Result<Self> {
        let board = Board::new(letters).with_context(|| format!("Invalid board '{letters}'"))?;
        let requested: FxHashSet<String> = exclusions
            .iter()
            .filter_map(|w| normalize_word(w.as_ref()))
            .collect();

        Ok(Self {
            board,
            lexicon,
            exclusions: requested.clone(),
            requested,
        })
    }

    /// Requested exclusions that matched no playable word, alphabetically
    #[must_use]
    pub fn unmatched_requests(&self, outcome: &FilterOutcome) -> Vec<String> {
        outcome
            .unmatched_exclusions
            .iter()
            .filter(|word| self.requested.contains(*word))
            .cloned()
            .collect()
    }

    /// Log a warning for each requested exclusion that matched no playable word
    pub fn warn_unmatched_requests(&self, outcome: &FilterOutcome) {
        for word in self.unmatched_requests(outcome) {
            warn!("excluded word '{word}' is not a playable word on board {}", self.board);
        }
    }

    /// Validate the board and read the word lists named by the config
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board letters are malformed
    /// - The lexicon or not-a-word file cannot be read
    pub fn load(config: &PuzzleConfig) -> Result<Self> {
        // Validate before touching the filesystem
        let mut puzzle = Self::from_parts(&config.letters, Vec::new(), &config.exclude)?;

        puzzle.lexicon = load_from_file(&config.wordlist).with_context(|| {
            format!("Failed to read word list {}", config.wordlist.display())
        })?;
        debug!(
            "loaded {} words from {}",
            puzzle.lexicon.len(),
            config.wordlist.display()
        );

        if let Some(path) = &config.not_words {
            let not_words = load_exclusions(path)
                .with_context(|| format!("Failed to read not-a-word list {}", path.display()))?;
            debug!("loaded {} not-a-words from {}", not_words.len(), path.display());
            puzzle.exclusions.extend(not_words);
        }

        info!(
            "board {}: {} lexicon entries, {} exclusions",
            puzzle.board,
            puzzle.lexicon.len(),
            puzzle.exclusions.len()
        );

        Ok(puzzle)
    }
}
