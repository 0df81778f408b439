//! Point value of each letter

use rustc_hash::FxHashMap;

/// Immutable mapping from letter to point value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValues {
    points: FxHashMap<u8, u32>,
}

impl LetterValues {
    /// Build from (letter, points) pairs; later pairs override earlier ones
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        Self {
            points: pairs.into_iter().collect(),
        }
    }

    /// Points for `letter`; letters without a configured value score 0
    #[inline]
    #[must_use]
    pub fn value(&self, letter: u8) -> u32 {
        self.points.get(&letter).copied().unwrap_or(0)
    }

    /// Plain sum of letter values, no multipliers, saturating at `u32::MAX`
    #[must_use]
    pub fn word_value(&self, word: &[u8]) -> u32 {
        word.iter().fold(0, |sum: u32, &l| sum.saturating_add(self.value(l)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
