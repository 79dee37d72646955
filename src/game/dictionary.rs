//! Accepted-word dictionary
//!
//! One list serves both roles: it filters submitted guesses and it is the
//! pool the target is drawn from.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Set of accepted words, with a stable order for sampling
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
    skipped: usize,
}

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No valid five-letter words were supplied
    Empty { skipped: usize },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { skipped } => write!(
                f,
                "Dictionary contains no valid five-letter words ({skipped} entries skipped)"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries may be any case. Blank lines are ignored, invalid entries are
    /// skipped and counted, and duplicates are kept once in first-seen order.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::Word;
    /// use wordle_tiles::game::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "SLATE", "nope", "crane"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.skipped(), 1);
    /// assert!(dictionary.contains(&Word::new("slate").unwrap()));
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();
        let mut skipped = 0;

        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            match Word::new(trimmed) {
                Ok(word) => {
                    if lookup.insert(word.clone()) {
                        words.push(word);
                    }
                }
                Err(e) => {
                    log::warn!("Skipping word list entry '{trimmed}': {e}");
                    skipped += 1;
                }
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty { skipped });
        }

        Ok(Self {
            words,
            lookup,
            skipped,
        })
    }

    /// Check whether a word is accepted
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Word at a sampling index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of raw entries rejected during construction
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_mixed_case_entries() {
        let dictionary = Dictionary::new(["crane", "Slate", "ALLOW"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
        assert!(!dictionary.contains(&Word::new("lolly").unwrap()));
    }

    #[test]
    fn skips_invalid_and_blank_entries() {
        let dictionary = Dictionary::new(["crane", "", "  ", "toolong", "cr4ne", " slate "]).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.skipped(), 2);
    }

    #[test]
    fn keeps_first_seen_order_without_duplicates() {
        let dictionary = Dictionary::new(["slate", "crane", "SLATE", "allow"]).unwrap();
        let texts: Vec<String> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["SLATE", "CRANE", "ALLOW"]);
        assert_eq!(dictionary.get(1).map(Word::text).as_deref(), Some("CRANE"));
        assert!(dictionary.get(3).is_none());
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        assert_eq!(
            Dictionary::new(Vec::<String>::new()).unwrap_err(),
            DictionaryError::Empty { skipped: 0 }
        );
        assert_eq!(
            Dictionary::new(["abc", "toolong"]).unwrap_err(),
            DictionaryError::Empty { skipped: 2 }
        );
    }
}
