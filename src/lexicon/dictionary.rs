//! Set of words allowed on the board

use rustc_hash::FxHashSet;

/// Immutable set of lowercase dictionary words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Lookup for a word held as raw letters
    #[must_use]
    pub fn contains_letters(&self, letters: &[u8]) -> bool {
        std::str::from_utf8(letters).is_ok_and(|w| self.words.contains(w))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_str_and_letters() {
        let dict = Dictionary::from_words(["cat", "cats"]);

        assert!(dict.contains("cat"));
        assert!(dict.contains_letters(b"cats"));
        assert!(!dict.contains("ca"));
        assert!(!dict.contains_letters(b"dog"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let dict = Dictionary::from_words(["tea", "tea", "let"]);
        assert_eq!(dict.len(), 2);
    }
}
