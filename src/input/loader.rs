//! File loading utilities
//!
//! Thin wrappers that read a file and hand its text to the validators.

use super::validate::{InputError, parse_board, parse_dictionary, parse_letter_values};
use crate::core::Layout;
use crate::lexicon::{Dictionary, LetterValues};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid contents in {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: InputError,
    },
}

fn load_with<T, P: AsRef<Path>>(
    path: P,
    parse: fn(&str) -> Result<T, InputError>,
) -> Result<T, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content).map_err(|source| LoadError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a board layout from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Input` if its contents are not a valid board.
///
/// # Examples
/// ```no_run
/// use word_placement::input::loader::load_board;
///
/// let layout = load_board("boards/standard.txt").unwrap();
/// println!("{}x{} board", layout.rows(), layout.columns());
/// ```
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Layout, LoadError> {
    load_with(path, parse_board)
}

/// Load a dictionary from a one-word-per-line file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or is not a valid dictionary.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    load_with(path, parse_dictionary)
}

/// Load letter values from a tab-separated file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or is not a valid value table.
pub fn load_letter_values<P: AsRef<Path>>(path: P) -> Result<LetterValues, LoadError> {
    load_with(path, parse_letter_values)
}

/// Read a file's raw text, for callers that feed the puzzle facade directly
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_placement_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_each_input_kind() {
        let board = temp_file("board.txt", "...\n.*.\n...\n");
        let dict = temp_file("dict.txt", "cat\ntea\n");
        let values = temp_file("values.txt", "a\t1\nc\t3\n");

        assert_eq!(load_board(&board).unwrap().rows(), 3);
        assert_eq!(load_dictionary(&dict).unwrap().len(), 2);
        assert_eq!(load_letter_values(&values).unwrap().value(b'c'), 3);
        assert_eq!(read_text(&dict).unwrap(), "cat\ntea\n");

        for path in [board, dict, values] {
            fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_board("/definitely/not/here.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn bad_contents_is_input_error() {
        let path = temp_file("bad_board.txt", "..\n...\n");
        let result = load_board(&path);
        assert!(matches!(
            result,
            Err(LoadError::Input {
                source: InputError::RaggedRow { .. },
                ..
            })
        ));
        fs::remove_file(path).unwrap();
    }
}
