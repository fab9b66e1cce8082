//! Display functions for command results

use super::formatters::{create_progress_bar, format_pair};
use crate::commands::{SolveResult, TransitionReport, WordListResult};
use crate::solver::{FilterReport, ScoredSolution};
use colored::Colorize;

const PAIR_WIDTH: usize = 30;

fn print_header(title: &str, board: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        board.unwrap_or_default().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

fn limited(entries: &[ScoredSolution], limit: Option<usize>) -> &[ScoredSolution] {
    &entries[..limit.unwrap_or(entries.len()).min(entries.len())]
}

/// Print both solution rankings and the filter summary
pub fn print_solve_result(result: &SolveResult, limit: Option<usize>) {
    print_header("LETTERBOXED:", Some(&result.board.to_string()));

    if result.rankings.is_empty() {
        println!("\n{}", "No two-word solutions found.".red().bold());
    } else {
        println!("\n{}", "Solutions sorted by letter length".bright_cyan().bold());
        for scored in limited(&result.rankings.by_length, limit) {
            println!(
                "{} {:2}",
                format_pair(&scored.solution, PAIR_WIDTH),
                scored.solution.trace_len()
            );
        }

        println!(
            "\n{}",
            "Solutions sorted by pencil-line distance".bright_cyan().bold()
        );
        for scored in limited(&result.rankings.by_distance, limit) {
            println!(
                "{} {:5.2}",
                format_pair(&scored.solution, PAIR_WIDTH),
                scored.distance
            );
        }
    }

    println!();
    println!(
        "{} {} from {} candidate words.",
        "Found".green(),
        format!("{} solutions", result.solution_count()).bright_yellow().bold(),
        result.candidates
    );
    print_filter_summary(&result.report);
}

/// Print the cascading filter counts
pub fn print_filter_summary(report: &FilterReport) {
    println!(
        "There are {} possible words from these letters.",
        report.matches
    );
    println!(
        "That drops to {} when doubled letters are removed.",
        report.after_doubled()
    );
    println!(
        "That drops to {} when disallowed pairings are removed.",
        report.after_same_side()
    );
    if report.excluded > 0 {
        println!("{} not-a-words were excluded.", report.excluded);
    }
}

/// Print the playable words for a board
pub fn print_word_list(result: &WordListResult) {
    print_header("PLAYABLE WORDS:", Some(&result.board.to_string()));

    println!();
    for word in &result.words {
        println!("{word}");
    }

    println!();
    println!(
        "{}",
        format!("{} playable words", result.words.len())
            .green()
            .bold()
    );
    print_filter_summary(&result.report);
}

/// Print the most frequent letter transitions
pub fn print_transitions(report: &TransitionReport) {
    print_header("LETTER TRANSITIONS", None);

    println!(
        "\n📊 {} distinct pairs across {} solutions",
        report.distinct, report.solutions
    );

    let max = report.top.first().map_or(0, |entry| entry.1);
    for ((from, to), count) in &report.top {
        let bar = create_progress_bar(*count as f64, max as f64, 30);
        println!("   {from}{to}: {} {count:4}", bar.green());
    }
}
