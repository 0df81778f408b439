//! Result of a placement run

use std::fmt;

/// Outcome of placing a word sequence or solving a word set
///
/// `Unsolvable` is a distinct outcome, never a magic score: a run that
/// placed every word for zero points is `Placed(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every word was committed; total score including bonus words
    Placed(u32),
    /// Some word had no legal placement
    Unsolvable,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn score(self) -> Option<u32> {
        match self {
            Self::Placed(score) => Some(score),
            Self::Unsolvable => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_placed(self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed(score) => write!(f, "{score}"),
            Self::Unsolvable => write!(f, "unsolvable"),
        }
    }
}
