//! Static board symbols and the cells that hold them

/// The static symbol of a board square, as read from the puzzle text
///
/// - `.` plain
/// - `*` designated start
/// - `1`-`9` letter multiplier
/// - `D` / `T` double / triple word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    Plain,
    Start,
    LetterBonus(u8),
    DoubleWord,
    TripleWord,
}

impl Square {
    /// Parse a single puzzle symbol
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Plain),
            '*' => Some(Self::Start),
            'D' => Some(Self::DoubleWord),
            'T' => Some(Self::TripleWord),
            '1'..='9' => symbol.to_digit(10).map(|d| Self::LetterBonus(d as u8)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plain => '.',
            Self::Start => '*',
            Self::DoubleWord => 'D',
            Self::TripleWord => 'T',
            Self::LetterBonus(d) => (b'0' + d) as char,
        }
    }

    /// Factor applied to a single letter placed on this square
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Self::LetterBonus(d) => d as u32,
            _ => 1,
        }
    }

    /// Word multiplier carried by this square
    ///
    /// The start square counts as a double here; span scoring only uses
    /// [`Square::span_factor`], which leaves the start square out.
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Self::DoubleWord | Self::Start => 2,
            Self::TripleWord => 3,
            _ => 1,
        }
    }

    /// Factor a word picks up for passing over this square
    #[must_use]
    pub const fn span_factor(self) -> u32 {
        match self {
            Self::DoubleWord => 2,
            Self::TripleWord => 3,
            _ => 1,
        }
    }
}

/// A board cell: either still showing its square or holding a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Square(Square),
    Letter(u8),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(l) => Some(l),
            Self::Square(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        matches!(self, Self::Letter(_))
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Letter(l) => l as char,
            Self::Square(s) => s.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_follow_symbols() {
        let cases = [
            ('.', 1, 1),
            ('*', 1, 2),
            ('D', 1, 2),
            ('T', 1, 3),
            ('3', 3, 1),
            ('9', 9, 1),
        ];
        for (symbol, letter, word) in cases {
            let square = Square::from_symbol(symbol).unwrap();
            assert_eq!(square.letter_multiplier(), letter, "letter mult of {symbol}");
            assert_eq!(square.word_multiplier(), word, "word mult of {symbol}");
            assert_eq!(square.symbol(), symbol);
        }
    }

    #[test]
    fn start_square_has_no_span_factor() {
        assert_eq!(Square::Start.span_factor(), 1);
        assert_eq!(Square::DoubleWord.span_factor(), 2);
        assert_eq!(Square::TripleWord.span_factor(), 3);
    }

    #[test]
    fn unknown_symbols_rejected() {
        assert!(Square::from_symbol('0').is_none());
        assert!(Square::from_symbol('x').is_none());
        assert!(Square::from_symbol(' ').is_none());
    }

    #[test]
    fn cell_symbols() {
        assert_eq!(Cell::Letter(b'q').symbol(), 'q');
        assert_eq!(Cell::Square(Square::Start).symbol(), '*');
        assert!(Cell::Letter(b'a').is_letter());
        assert_eq!(Cell::Square(Square::Plain).letter(), None);
    }
}
