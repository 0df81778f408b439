//! Span scoring
//!
//! score = (Σ letter value × letter multiplier) × Π span factors
//!
//! Multipliers always come from the static layout, so a square keeps its
//! bonus even after a letter covers it.

use crate::core::{Layout, Span};
use crate::lexicon::LetterValues;

/// Score `word` laid into `span`
///
/// The start square contributes no span factor; the first word's doubling
/// is applied by the caller. Arithmetic saturates at `u32::MAX`.
#[must_use]
pub fn span_score(layout: &Layout, span: &Span, word: &[u8], values: &LetterValues) -> u32 {
    debug_assert_eq!(span.len, word.len());

    let mut letters: u32 = 0;
    let mut factor: u32 = 1;
    for (coord, &letter) in span.cells().zip(word) {
        let value = values.value(letter).saturating_mul(layout.letter_multiplier(coord));
        letters = letters.saturating_add(value);
        factor = factor.saturating_mul(layout.square(coord).span_factor());
    }

    letters.saturating_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Orientation};
    use crate::input::{parse_board, parse_letter_values};

    fn values() -> LetterValues {
        parse_letter_values("a\t1\nc\t3\nt\t1").unwrap()
    }

    #[test]
    fn plain_squares_sum_letters() {
        let layout = parse_board(".....\n..*..").unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 3);
        assert_eq!(span_score(&layout, &span, b"cat", &values()), 5);
    }

    #[test]
    fn letter_multiplier_scales_single_letter() {
        let layout = parse_board("2*3").unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 3);
        // c×2 + a×1 + t×3
        assert_eq!(span_score(&layout, &span, b"cat", &values()), 10);
    }

    #[test]
    fn word_multipliers_compound() {
        let layout = parse_board("D.T\n.*.").unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 3);
        assert_eq!(span_score(&layout, &span, b"cat", &values()), 5 * 2 * 3);
    }

    #[test]
    fn start_square_adds_no_factor() {
        let layout = parse_board(".*.").unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 3);
        assert_eq!(span_score(&layout, &span, b"cat", &values()), 5);
    }

    #[test]
    fn vertical_span_reads_columns() {
        let layout = parse_board("2.\n*.\nT.").unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Vertical, 3);
        assert_eq!(span_score(&layout, &span, b"cat", &values()), (6 + 1 + 1) * 3);
    }

    #[test]
    fn huge_letter_values_saturate() {
        let layout = parse_board("*.").unwrap();
        let values = parse_letter_values("a\t3000000000").unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 2);
        assert_eq!(span_score(&layout, &span, b"aa", &values), u32::MAX);
    }

    #[test]
    fn long_run_of_triples_saturates() {
        // 3^21 does not fit in a u32
        let layout = parse_board(&format!("*{}", "T".repeat(21))).unwrap();
        let span = Span::new(Coord::new(0, 0), Orientation::Horizontal, 22);
        let word = vec![b'a'; 22];
        assert_eq!(span_score(&layout, &span, &word, &values()), u32::MAX);
    }
}
