//! Bonus scoring for incidental words
//!
//! Dictionary runs recorded by legality checks that aren't themselves placed
//! words score once each, at plain letter value.

use crate::core::PlacedWord;
use crate::lexicon::LetterValues;
use rustc_hash::FxHashSet;

#[must_use]
pub fn bonus_score(
    augmented: &FxHashSet<String>,
    placed: &[PlacedWord],
    values: &LetterValues,
) -> u32 {
    augmented
        .iter()
        .filter(|word| word.len() >= 2 && !placed.iter().any(|p| &p.word == *word))
        .map(|word| values.word_value(word.as_bytes()))
        .fold(0_u32, u32::saturating_add)
}
