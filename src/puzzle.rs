//! Stateful puzzle facade
//!
//! Holds the loaded board layout, dictionary and letter values, and the
//! board and records left by the latest `place` or `solve` call.
//!
//! # Examples
//! ```
//! use word_placement::engine::Outcome;
//! use word_placement::puzzle::Puzzle;
//!
//! let mut puzzle = Puzzle::new();
//! puzzle.load_board(".....\n.....\n..*..\n.....\n.....").unwrap();
//! puzzle.load_dictionary("cat\nat").unwrap();
//! puzzle.load_letter_values("c\t3\na\t1\nt\t1").unwrap();
//!
//! assert_eq!(puzzle.place(&["cat"]).unwrap(), Outcome::Placed(10));
//! assert_eq!(puzzle.render().unwrap().lines().nth(2), Some("cat.."));
//! ```

use crate::core::{Board, Layout, PlacedWord};
use crate::engine::{Outcome, PlacementEngine};
use crate::input::loader::{self, LoadError};
use crate::input::{InputError, parse_board, parse_dictionary, parse_letter_values};
use crate::lexicon::{Dictionary, LetterValues};
use crate::solver::{OptimalSolver, SolveConfig, SolverError};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// A request the puzzle cannot start on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("no board has been loaded")]
    BoardNotLoaded,

    #[error("no dictionary has been loaded")]
    DictionaryNotLoaded,

    #[error("no letter values have been loaded")]
    LetterValuesNotLoaded,

    #[error("'{word}' is longer than both sides of the {rows}x{columns} board")]
    WordCannotFit {
        word: String,
        rows: usize,
        columns: usize,
    },

    #[error("{count} distinct words exceed the limit of {max}")]
    TooManyWords { count: usize, max: usize },
}

impl From<SolverError> for PuzzleError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::TooManyWords { count, max } => Self::TooManyWords { count, max },
        }
    }
}

/// Loaded inputs plus the latest run's results
#[derive(Debug, Clone, Default)]
pub struct Puzzle {
    layout: Option<Arc<Layout>>,
    dictionary: Option<Dictionary>,
    values: Option<LetterValues>,
    board: Option<Board>,
    placed: Vec<PlacedWord>,
    order: Vec<String>,
    config: SolveConfig,
}

impl Puzzle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A puzzle whose `solve` runs with `config`
    #[must_use]
    pub fn with_config(config: SolveConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// Validate and install a board, replacing any earlier one
    ///
    /// # Errors
    /// Returns the validation error; the previous board stays loaded.
    pub fn load_board(&mut self, text: &str) -> Result<(), InputError> {
        let layout = parse_board(text)?;
        self.install_layout(layout);
        Ok(())
    }

    /// Validate and install a dictionary
    ///
    /// # Errors
    /// Returns the validation error; the previous dictionary stays loaded.
    pub fn load_dictionary(&mut self, text: &str) -> Result<(), InputError> {
        self.dictionary = Some(parse_dictionary(text)?);
        Ok(())
    }

    /// Validate and install letter values
    ///
    /// # Errors
    /// Returns the validation error; the previous values stay loaded.
    pub fn load_letter_values(&mut self, text: &str) -> Result<(), InputError> {
        self.values = Some(parse_letter_values(text)?);
        Ok(())
    }

    /// [`load_board`](Self::load_board) from a file
    ///
    /// # Errors
    /// Returns a [`LoadError`] if the file is unreadable or invalid.
    pub fn load_board_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let layout = loader::load_board(path)?;
        self.install_layout(layout);
        Ok(())
    }

    /// [`load_dictionary`](Self::load_dictionary) from a file
    ///
    /// # Errors
    /// Returns a [`LoadError`] if the file is unreadable or invalid.
    pub fn load_dictionary_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.dictionary = Some(loader::load_dictionary(path)?);
        Ok(())
    }

    /// [`load_letter_values`](Self::load_letter_values) from a file
    ///
    /// # Errors
    /// Returns a [`LoadError`] if the file is unreadable or invalid.
    pub fn load_letter_values_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.values = Some(loader::load_letter_values(path)?);
        Ok(())
    }

    fn install_layout(&mut self, layout: Layout) {
        let layout = Arc::new(layout);
        self.board = Some(Board::new(Arc::clone(&layout)));
        self.layout = Some(layout);
        self.placed.clear();
        self.order.clear();
    }

    /// All three inputs, checked in board, dictionary, values order
    fn inputs(&self) -> Result<(&Arc<Layout>, &Dictionary, &LetterValues), PuzzleError> {
        let layout = self.layout.as_ref().ok_or(PuzzleError::BoardNotLoaded)?;
        let dictionary = self
            .dictionary
            .as_ref()
            .ok_or(PuzzleError::DictionaryNotLoaded)?;
        let values = self
            .values
            .as_ref()
            .ok_or(PuzzleError::LetterValuesNotLoaded)?;
        Ok((layout, dictionary, values))
    }

    /// Place `words` in the given order on a fresh board
    ///
    /// On success the final board and records stay available; an unsolvable
    /// run leaves the pristine board.
    ///
    /// # Errors
    /// Returns a missing-input error, or [`PuzzleError::WordCannotFit`] if
    /// the first word is longer than both board dimensions.
    pub fn place<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Outcome, PuzzleError> {
        let (layout, dictionary, values) = self.inputs()?;

        if let Some(first) = words.first().map(|w| w.as_ref())
            && first.len() > layout.longest_line()
        {
            return Err(PuzzleError::WordCannotFit {
                word: first.to_owned(),
                rows: layout.rows(),
                columns: layout.columns(),
            });
        }

        let layout = Arc::clone(layout);
        let mut engine = PlacementEngine::new(Board::new(Arc::clone(&layout)), dictionary, values);
        let outcome = engine.place_words(words);
        let (board, placed) = engine.into_parts();

        self.order.clear();
        if outcome.is_placed() {
            self.board = Some(board);
            self.placed = placed;
        } else {
            self.reset(layout);
        }
        Ok(outcome)
    }

    /// Try every order of `words` and keep the highest-scoring one
    ///
    /// Repeated words are dropped. The winning order, board and records are
    /// kept; if no order places every word the order is cleared and the
    /// board reset.
    ///
    /// # Errors
    /// Returns a missing-input error, or [`PuzzleError::TooManyWords`] if
    /// there are more distinct words than the configured maximum.
    pub fn solve<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Outcome, PuzzleError> {
        let (layout, dictionary, values) = self.inputs()?;
        let layout = Arc::clone(layout);

        let solver = OptimalSolver::new(
            self.config.search,
            &layout,
            dictionary,
            values,
            self.config.max_words,
        );
        let Some(best) = solver.solve(words)? else {
            self.reset(layout);
            return Ok(Outcome::Unsolvable);
        };

        self.board = Some(best.board);
        self.placed = best.placed;
        self.order = best.order;
        Ok(Outcome::Placed(best.score))
    }

    fn reset(&mut self, layout: Arc<Layout>) {
        self.board = Some(Board::new(layout));
        self.placed.clear();
        self.order.clear();
    }

    /// Winning order of the last successful `solve`, empty otherwise
    #[must_use]
    pub fn word_order(&self) -> &[String] {
        &self.order
    }

    /// Records committed by the last successful run
    #[must_use]
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed
    }

    #[must_use]
    pub const fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Current board as text, one newline-terminated line per row
    ///
    /// # Errors
    /// Returns [`PuzzleError::BoardNotLoaded`] before a board is loaded.
    pub fn render(&self) -> Result<String, PuzzleError> {
        self.board
            .as_ref()
            .map(Board::render)
            .ok_or(PuzzleError::BoardNotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Anchor;
    use crate::solver::SearchType;

    const OPEN_7X7: &str = ".......\n.......\n.......\n...*...\n.......\n.......\n.......";
    const VALUES: &str = "a\t1\nc\t3\nt\t1\ne\t1\nl\t1\ns\t1\no\t1";

    fn loaded(board: &str, dictionary: &str) -> Puzzle {
        let mut puzzle = Puzzle::new();
        puzzle.load_board(board).unwrap();
        puzzle.load_dictionary(dictionary).unwrap();
        puzzle.load_letter_values(VALUES).unwrap();
        puzzle
    }

    #[test]
    fn prerequisites_checked_in_order() {
        let mut puzzle = Puzzle::new();
        assert_eq!(puzzle.place(&["cat"]), Err(PuzzleError::BoardNotLoaded));
        assert_eq!(puzzle.render(), Err(PuzzleError::BoardNotLoaded));

        puzzle.load_board(OPEN_7X7).unwrap();
        assert_eq!(puzzle.place(&["cat"]), Err(PuzzleError::DictionaryNotLoaded));
        assert!(puzzle.render().is_ok());

        puzzle.load_dictionary("cat").unwrap();
        assert_eq!(puzzle.solve(&["cat"]), Err(PuzzleError::LetterValuesNotLoaded));

        puzzle.load_letter_values(VALUES).unwrap();
        assert_eq!(puzzle.place(&["cat"]), Ok(Outcome::Placed(10)));
    }

    #[test]
    fn failed_load_keeps_previous_input() {
        let mut puzzle = loaded(OPEN_7X7, "cat");

        assert!(puzzle.load_board("..\n.").is_err());
        assert!(puzzle.load_dictionary("Cat").is_err());
        assert!(puzzle.load_letter_values("a 1").is_err());

        assert_eq!(puzzle.place(&["cat"]), Ok(Outcome::Placed(10)));
    }

    #[test]
    fn first_word_longer_than_board() {
        let mut puzzle = loaded("...\n.*.\n...", "cats");
        assert_eq!(
            puzzle.place(&["cats"]),
            Err(PuzzleError::WordCannotFit {
                word: "cats".into(),
                rows: 3,
                columns: 3,
            })
        );
    }

    #[test]
    fn shared_letters_place_by_intersection() {
        let mut puzzle = loaded(OPEN_7X7, "cat\ntea\nlet");

        assert!(puzzle.place(&["cat", "tea", "let"]).unwrap().is_placed());
        let anchors: Vec<Anchor> = puzzle.placed_words().iter().map(|p| p.anchor).collect();
        assert_eq!(
            anchors,
            vec![Anchor::Start, Anchor::Intersection, Anchor::Intersection]
        );
    }

    #[test]
    fn unknown_word_leaves_pristine_board() {
        let mut puzzle = loaded(OPEN_7X7, "cat");
        let pristine = puzzle.render().unwrap();

        assert_eq!(puzzle.place(&["cat"]), Ok(Outcome::Placed(10)));
        assert_ne!(puzzle.render().unwrap(), pristine);

        assert_eq!(puzzle.place(&["dog"]), Ok(Outcome::Unsolvable));
        assert_eq!(puzzle.render().unwrap(), pristine);
        assert!(puzzle.placed_words().is_empty());
    }

    #[test]
    fn repeated_place_is_deterministic() {
        let mut puzzle = loaded(OPEN_7X7, "cat\ntea\nlet");

        let first = puzzle.place(&["cat", "tea", "let"]).unwrap();
        let first_board = puzzle.render().unwrap();
        let second = puzzle.place(&["cat", "tea", "let"]).unwrap();

        assert_eq!(first, second);
        assert_eq!(puzzle.render().unwrap(), first_board);
    }

    #[test]
    fn solve_at_least_natural_order() {
        let mut puzzle = loaded(OPEN_7X7, "cat\ntea\nlet");

        let natural = puzzle.place(&["cat", "tea", "let"]).unwrap();
        let best = puzzle.solve(&["cat", "tea", "let"]).unwrap();

        assert!(best.score() >= natural.score());
        assert_eq!(puzzle.word_order().len(), 3);

        let order = puzzle.word_order().to_vec();
        let board = puzzle.render().unwrap();
        assert_eq!(puzzle.place(&order).unwrap(), best);
        assert_eq!(puzzle.render().unwrap(), board);
    }

    #[test]
    fn solve_finds_the_only_working_order() {
        let mut puzzle = loaded(OPEN_7X7, "cat\ncats\nso");

        assert_eq!(puzzle.place(&["so", "cat"]), Ok(Outcome::Unsolvable));
        assert_eq!(puzzle.solve(&["so", "cat"]), Ok(Outcome::Placed(18)));
        assert_eq!(puzzle.word_order(), ["cat", "so"]);
        assert_eq!(puzzle.placed_words()[1].anchor, Anchor::Cross);
    }

    #[test]
    fn unsolvable_solve_clears_order() {
        let mut puzzle = loaded(OPEN_7X7, "cat\ncats\nso");
        let pristine = puzzle.render().unwrap();

        puzzle.solve(&["cat", "so"]).unwrap();
        assert!(!puzzle.word_order().is_empty());

        assert_eq!(puzzle.solve(&["cat", "dog"]), Ok(Outcome::Unsolvable));
        assert!(puzzle.word_order().is_empty());
        assert_eq!(puzzle.render().unwrap(), pristine);

        let none: [&str; 0] = [];
        assert_eq!(puzzle.solve(&none), Ok(Outcome::Unsolvable));
        assert_eq!(puzzle.place(&none), Ok(Outcome::Unsolvable));
    }

    #[test]
    fn word_limit_comes_from_config() {
        let config = SolveConfig::new(SearchType::from_name("sequential"), 2);
        let mut puzzle = Puzzle::with_config(config);
        puzzle.load_board(OPEN_7X7).unwrap();
        puzzle.load_dictionary("cat\ntea\nlet").unwrap();
        puzzle.load_letter_values(VALUES).unwrap();

        assert_eq!(
            puzzle.solve(&["cat", "tea", "let"]),
            Err(PuzzleError::TooManyWords { count: 3, max: 2 })
        );
    }

    #[test]
    fn file_loaders_install_inputs() {
        let dir = std::env::temp_dir().join(format!("puzzle-files-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let board = dir.join("board.txt");
        let dictionary = dir.join("words.txt");
        let values = dir.join("values.txt");
        std::fs::write(&board, OPEN_7X7).unwrap();
        std::fs::write(&dictionary, "cat\n").unwrap();
        std::fs::write(&values, VALUES).unwrap();

        let mut puzzle = Puzzle::new();
        puzzle.load_board_file(&board).unwrap();
        puzzle.load_dictionary_file(&dictionary).unwrap();
        puzzle.load_letter_values_file(&values).unwrap();
        assert!(puzzle.load_board_file(dir.join("missing.txt")).is_err());

        assert_eq!(puzzle.place(&["cat"]), Ok(Outcome::Placed(10)));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
