//! Word Placement - CLI
//!
//! Places words on a Scrabble-like board in a given order, or searches
//! every order of a word set for the highest score.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use word_placement::{
    commands::{place_words, solve_words},
    output::{print_board, print_place_report, print_solve_report},
    puzzle::Puzzle,
    solver::{DEFAULT_MAX_WORDS, SearchType, SolveConfig},
};

#[derive(Parser)]
#[command(
    name = "word-placement",
    about = "Score-maximising word placement on Scrabble-like boards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Board layout file (rows of . * 1-9 D T)
    #[arg(short, long, global = true, default_value = "board.txt")]
    board: PathBuf,

    /// Dictionary file, one lowercase word per line
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Letter values file, one <letter>TAB<points> pair per line
    #[arg(short = 'l', long, global = true, default_value = "letter_values.txt")]
    values: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Place words in the order given
    Place {
        /// Words to place, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Find the highest-scoring order of a word set
    Solve {
        /// Words to order
        #[arg(required = true)]
        words: Vec<String>,

        /// Search: parallel (default) or sequential
        #[arg(short, long, default_value = "parallel")]
        search: String,

        /// Refuse word sets larger than this
        #[arg(short, long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
    },

    /// Print the loaded board before any placement
    Render,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Place { ref words } => {
            let mut puzzle = load_puzzle(&cli, SolveConfig::default())?;
            let report = place_words(&mut puzzle, words).context("placement failed")?;
            print_place_report(&report);
        }
        Commands::Solve {
            ref words,
            ref search,
            max_words,
        } => {
            let config = SolveConfig::new(SearchType::from_name(search), max_words);
            let mut puzzle = load_puzzle(&cli, config)?;
            let report = solve_words(&mut puzzle, words, !cli.quiet).context("solve failed")?;
            print_solve_report(&report);
        }
        Commands::Render => {
            let mut puzzle = Puzzle::new();
            load_board(&mut puzzle, &cli.board)?;
            print_board(&puzzle.render()?);
        }
    }

    Ok(())
}

fn load_board(puzzle: &mut Puzzle, path: &Path) -> Result<()> {
    puzzle
        .load_board_file(path)
        .with_context(|| format!("could not load board from {}", path.display()))
}

/// Load all three inputs from the paths given on the command line
fn load_puzzle(cli: &Cli, config: SolveConfig) -> Result<Puzzle> {
    let mut puzzle = Puzzle::with_config(config);

    load_board(&mut puzzle, &cli.board)?;
    puzzle
        .load_dictionary_file(&cli.dictionary)
        .with_context(|| format!("could not load dictionary from {}", cli.dictionary.display()))?;
    puzzle
        .load_letter_values_file(&cli.values)
        .with_context(|| format!("could not load letter values from {}", cli.values.display()))?;

    info!(
        board = %cli.board.display(),
        dictionary = %cli.dictionary.display(),
        values = %cli.values.display(),
        "puzzle loaded"
    );
    Ok(puzzle)
}
