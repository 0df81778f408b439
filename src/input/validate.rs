//! Text validation for the three puzzle inputs
//!
//! Every parser trims each line and ignores trailing blank lines. Anything
//! else that doesn't match the expected shape is rejected with the 1-based
//! line (and column, for boards) where it was found.

use crate::core::{Coord, Layout, Square};
use crate::lexicon::{Dictionary, LetterValues};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("line {line} is blank")]
    BlankLine { line: usize },

    #[error("row on line {line} has {found} squares, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid square '{symbol}' at line {line}, column {column}")]
    InvalidSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    #[error("board must have exactly one start square '*', found {found}")]
    StartCount { found: usize },

    #[error("invalid dictionary word '{word}' on line {line}")]
    InvalidWord { line: usize, word: String },

    #[error("line {line} is not a <letter>TAB<points> pair")]
    MalformedLetterValue { line: usize },

    #[error("invalid letter '{letter}' on line {line}")]
    InvalidLetter { line: usize, letter: String },

    #[error("invalid points on line {line}: {source}")]
    InvalidPoints {
        line: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Trimmed lines with trailing blanks dropped; interior blanks are an error
fn significant_lines(text: &str) -> Result<Vec<&str>, InputError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some(blank) = lines.iter().position(|l| l.is_empty()) {
        return Err(InputError::BlankLine { line: blank + 1 });
    }

    Ok(lines)
}

/// Parse puzzle text into a board layout
///
/// # Errors
/// Returns `InputError` if the text is empty, has blank or ragged rows,
/// contains a symbol outside `1-9 D T . *`, or doesn't have exactly one `*`.
///
/// # Examples
/// ```
/// use word_placement::input::parse_board;
///
/// let layout = parse_board("..D..\n.2*3.\n..T..").unwrap();
/// assert_eq!((layout.rows(), layout.columns()), (3, 5));
/// ```
pub fn parse_board(text: &str) -> Result<Layout, InputError> {
    let lines = significant_lines(text)?;
    let columns = lines[0].chars().count();

    let mut squares = Vec::with_capacity(lines.len() * columns);
    let mut start = None;
    let mut starts = 0;

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != columns {
            return Err(InputError::RaggedRow {
                line: row + 1,
                expected: columns,
                found,
            });
        }

        for (column, symbol) in line.chars().enumerate() {
            let square = Square::from_symbol(symbol).ok_or(InputError::InvalidSymbol {
                line: row + 1,
                column: column + 1,
                symbol,
            })?;
            if square == Square::Start {
                starts += 1;
                start.get_or_insert(Coord::new(row, column));
            }
            squares.push(square);
        }
    }

    match start {
        Some(start) if starts == 1 => Ok(Layout::new(lines.len(), columns, squares, start)),
        _ => Err(InputError::StartCount { found: starts }),
    }
}

/// Parse one-word-per-line text into a dictionary
///
/// # Errors
/// Returns `InputError` if the text is empty, has a blank line, or a line
/// that isn't a single word of ASCII lowercase letters.
pub fn parse_dictionary(text: &str) -> Result<Dictionary, InputError> {
    let lines = significant_lines(text)?;

    for (i, word) in lines.iter().enumerate() {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(InputError::InvalidWord {
                line: i + 1,
                word: (*word).to_string(),
            });
        }
    }

    Ok(Dictionary::from_words(lines))
}

/// Parse `<letter>\t<points>` lines into a letter-value table
///
/// # Errors
/// Returns `InputError` if the text is empty, has a blank line, a line
/// without exactly one tab, a key that isn't one lowercase letter, or
/// points that aren't a non-negative integer.
pub fn parse_letter_values(text: &str) -> Result<LetterValues, InputError> {
    let lines = significant_lines(text)?;
    let mut pairs = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;
        let mut parts = line.split('\t');
        let (Some(letter), Some(points), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InputError::MalformedLetterValue { line: line_no });
        };

        let &[key] = letter.as_bytes() else {
            return Err(InputError::InvalidLetter {
                line: line_no,
                letter: letter.to_string(),
            });
        };
        if !key.is_ascii_lowercase() {
            return Err(InputError::InvalidLetter {
                line: line_no,
                letter: letter.to_string(),
            });
        }

        let points = points
            .trim()
            .parse::<u32>()
            .map_err(|source| InputError::InvalidPoints {
                line: line_no,
                source,
            })?;

        pairs.push((key, points));
    }

    Ok(LetterValues::from_pairs(pairs))
}
