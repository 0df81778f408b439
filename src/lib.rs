//! Word Placement
//!
//! Places words on a Scrabble-like board for the highest score, either in a
//! given order or by searching every order of a word set.
//!
//! # Quick Start
//!
//! ```rust
//! use word_placement::engine::Outcome;
//! use word_placement::puzzle::Puzzle;
//!
//! let mut puzzle = Puzzle::new();
//! puzzle.load_board(".......\n.......\n.......\n...*...\n.......\n.......\n.......").unwrap();
//! puzzle.load_dictionary("cat\ncats\nso").unwrap();
//! puzzle.load_letter_values("a\t1\nc\t3\nt\t1\ns\t1\no\t1").unwrap();
//!
//! // "so" first leaves nothing for "cat" to attach to
//! assert_eq!(puzzle.place(&["so", "cat"]).unwrap(), Outcome::Unsolvable);
//!
//! // the solver finds the order that works
//! assert_eq!(puzzle.solve(&["so", "cat"]).unwrap(), Outcome::Placed(18));
//! assert_eq!(puzzle.word_order(), ["cat", "so"]);
//! ```

// Core domain types
pub mod core;

// Dictionary and letter values
pub mod lexicon;

// Input validation and file loading
pub mod input;

// Scoring, legality and placement
pub mod engine;

// Optimal-order search
pub mod solver;

// Stateful facade
pub mod puzzle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
