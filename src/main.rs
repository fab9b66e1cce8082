//! Letterboxed Solver - CLI
//!
//! Finds two-word solutions to the Letterboxed puzzle and ranks them by length
//! and by pencil-line distance.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use letterboxed::{
    commands::{Puzzle, PuzzleConfig, count_transitions, list_words, solve_puzzle},
    output::{print_solve_result, print_transitions, print_word_list},
    wordlists::DEFAULT_WORDLIST,
};

#[derive(Parser)]
#[command(
    name = "letterboxed",
    about = "Find two-word Letterboxed solutions ranked by length and pencil-line distance",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lexicon file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Not-a-word file, one word per line; unioned with command-line exclusions
    #[arg(short = 'n', long, global = true)]
    not_words: Option<PathBuf>,

    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and list solutions by length and pencil-line distance
    Solve {
        /// The 12 board letters, clockwise from the top-left corner
        letters: String,

        /// Words the game rejects, to leave out of solutions
        exclude: Vec<String>,

        /// Only list the first N solutions of each ranking
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List every word playable on the board
    Words {
        /// The 12 board letters, clockwise from the top-left corner
        letters: String,

        /// Words the game rejects, to leave out of the listing
        exclude: Vec<String>,
    },

    /// Count letter transitions across all solution traces
    Transitions {
        /// The 12 board letters, clockwise from the top-left corner
        letters: String,

        /// Words the game rejects, to leave out of solutions
        exclude: Vec<String>,

        /// Number of transitions to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}

impl Cli {
    fn config(&self, letters: &str, exclude: &[String], limit: Option<usize>) -> PuzzleConfig {
        PuzzleConfig {
            letters: letters.to_string(),
            wordlist: self.wordlist.clone(),
            not_words: self.not_words.clone(),
            exclude: exclude.to_vec(),
            limit,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Solve {
            letters,
            exclude,
            limit,
        } => run_solve_command(&cli.config(letters, exclude, *limit)),
        Commands::Words { letters, exclude } => {
            run_words_command(&cli.config(letters, exclude, None))
        }
        Commands::Transitions {
            letters,
            exclude,
            top,
        } => run_transitions_command(&cli.config(letters, exclude, None), *top),
    }
}

fn run_solve_command(config: &PuzzleConfig) -> Result<()> {
    let puzzle = Puzzle::load(config)?;
    let result = solve_puzzle(&puzzle);
    print_solve_result(&result, config.limit);
    Ok(())
}

fn run_words_command(config: &PuzzleConfig) -> Result<()> {
    let puzzle = Puzzle::load(config)?;
    let result = list_words(&puzzle);
    print_word_list(&result);
    Ok(())
}

fn run_transitions_command(config: &PuzzleConfig, top: usize) -> Result<()> {
    let puzzle = Puzzle::load(config)?;
    let report = count_transitions(&puzzle, Some(top));
    print_transitions(&report);
    Ok(())
}
