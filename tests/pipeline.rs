//! End-to-end pipeline tests over generated boards and lexicons

use std::fs;

use letterboxed::commands::{Puzzle, PuzzleConfig, solve_puzzle};
use letterboxed::core::{BOARD_SIZE, Board, LetterSet};
use letterboxed::solver::{filter_words, find_solutions, rank_solutions};
use proptest::prelude::*;
use rustc_hash::FxHashSet;

fn board_letters() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = ('a'..='z').collect();
    prop::sample::subsequence(alphabet, BOARD_SIZE)
        .prop_shuffle()
        .prop_map(|letters| letters.into_iter().collect())
}

fn lexicon_for(letters: &str, picks: &[Vec<usize>]) -> Vec<String> {
    let bytes = letters.as_bytes();
    picks
        .iter()
        .map(|word| word.iter().map(|&i| char::from(bytes[i])).collect())
        .collect()
}

fn word_picks() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..BOARD_SIZE, 1..10), 0..80)
}

proptest! {
    #[test]
    fn filtered_words_are_traceable(letters in board_letters(), picks in word_picks()) {
        let board = Board::new(&letters).unwrap();
        let lexicon = lexicon_for(&letters, &picks);
        let outcome = filter_words(&board, &lexicon, &FxHashSet::default());

        prop_assert_eq!(outcome.report.matches, lexicon.len());
        for word in &outcome.words {
            let bytes = word.as_bytes();
            prop_assert!(bytes.iter().all(|&b| board.contains(b)));
            for pair in bytes.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
                prop_assert_ne!(board.side_of(pair[0]), board.side_of(pair[1]));
            }
        }
    }

    #[test]
    fn solutions_cover_and_chain(letters in board_letters(), picks in word_picks()) {
        let board = Board::new(&letters).unwrap();
        let lexicon = lexicon_for(&letters, &picks);
        let outcome = filter_words(&board, &lexicon, &FxHashSet::default());

        for solution in find_solutions(&board, &outcome.candidates()) {
            let joined = format!("{}{}", solution.first(), solution.second());
            prop_assert_eq!(LetterSet::from_bytes(joined.as_bytes()).len(), BOARD_SIZE);
            prop_assert_eq!(
                solution.first().as_bytes().last(),
                solution.second().as_bytes().first()
            );
        }
    }

    #[test]
    fn rankings_are_ordered(letters in board_letters(), picks in word_picks()) {
        let board = Board::new(&letters).unwrap();
        let lexicon = lexicon_for(&letters, &picks);
        let outcome = filter_words(&board, &lexicon, &FxHashSet::default());
        let rankings = rank_solutions(&board, find_solutions(&board, &outcome.candidates()));

        prop_assert_eq!(rankings.by_length.len(), rankings.by_distance.len());
        for pair in rankings.by_length.windows(2) {
            prop_assert!(pair[0].letters >= pair[1].letters);
        }
        for pair in rankings.by_distance.windows(2) {
            prop_assert!(pair[0].distance >= pair[1].distance);
        }
    }

    #[test]
    fn pipeline_is_idempotent(letters in board_letters(), picks in word_picks()) {
        let lexicon = lexicon_for(&letters, &picks);
        let puzzle = Puzzle::from_parts::<&str>(&letters, lexicon, &[]).unwrap();

        let first = solve_puzzle(&puzzle);
        let second = solve_puzzle(&puzzle);
        prop_assert_eq!(first.report, second.report);
        prop_assert_eq!(first.rankings.by_length, second.rankings.by_length);
        prop_assert_eq!(first.rankings.by_distance, second.rankings.by_distance);
    }
}

#[test]
fn excluded_word_never_in_solutions() {
    let lexicon = ["adgjbe", "ehkcfil", "al", "lifchkebjgda"].map(String::from).to_vec();

    let open = Puzzle::from_parts::<&str>("abcdefghijkl", lexicon.clone(), &[]).unwrap();
    let uses_word = |result: &letterboxed::commands::SolveResult, word: &str| {
        result
            .rankings
            .by_length
            .iter()
            .any(|s| s.solution.first() == word || s.solution.second() == word)
    };
    assert!(uses_word(&solve_puzzle(&open), "lifchkebjgda"));

    let closed = Puzzle::from_parts("abcdefghijkl", lexicon, &["lifchkebjgda"]).unwrap();
    let result = solve_puzzle(&closed);
    assert!(!uses_word(&result, "lifchkebjgda"));
    assert_eq!(result.solution_count(), 1);
}

#[test]
fn solve_from_files() {
    let dir = std::env::temp_dir();
    let wordlist = dir.join(format!("letterboxed-it-{}-words.list", std::process::id()));
    let not_words = dir.join(format!("letterboxed-it-{}-not.list", std::process::id()));
    fs::write(&wordlist, "ADGJBE\nehkcfil\nbad\n\nlab\naabb\nal\nlifchkebjgda\n").unwrap();
    fs::write(&not_words, "al\n").unwrap();

    let mut config = PuzzleConfig::new("abcdefghijkl");
    config.wordlist = wordlist.clone();
    config.not_words = Some(not_words.clone());
    config.exclude = vec!["ehkcfil".to_string()];

    let puzzle = Puzzle::load(&config);
    fs::remove_file(&wordlist).unwrap();
    fs::remove_file(&not_words).unwrap();

    let result = solve_puzzle(&puzzle.unwrap());
    assert_eq!(result.report.matches, 7);
    assert_eq!(result.report.doubled, 1);
    assert_eq!(result.report.same_side, 2);
    assert_eq!(result.report.excluded, 2);
    assert_eq!(result.candidates, 2);

    let only = &result.rankings.by_length;
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].solution.first(), "lifchkebjgda");
    assert_eq!(only[0].solution.second(), "adgjbe");
}

#[test]
fn malformed_board_is_fatal() {
    for letters in ["abc", "abcdefghijkla", "abcdefghijka", "abcdefghijk9"] {
        assert!(Puzzle::from_parts::<&str>(letters, Vec::new(), &[]).is_err());
    }
}
