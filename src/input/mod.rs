//! Input validation and loading
//!
//! Turns raw board, dictionary and letter-value text into the typed values
//! the placement engine trusts without re-checking.

pub mod loader;
mod validate;

pub use loader::LoadError;
pub use validate::{InputError, parse_board, parse_dictionary, parse_letter_values};
