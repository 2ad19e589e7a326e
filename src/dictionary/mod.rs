//! Game dictionary
//!
//! An immutable set of lowercase words used both to pick solutions (filtered by
//! length) and to validate guesses (case-insensitive membership). Loaded once by
//! the caller and passed into every game operation that needs it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable word set
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw strings
    ///
    /// Entries are lowercased; blank, non-alphabetic and duplicate entries are
    /// skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "SLATE", "sl8te", "crane"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("Slate"));
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();

        for entry in entries {
            let Ok(word) = Word::new(entry.as_ref().trim()) else {
                continue;
            };
            if index.insert(word.text().to_string()) {
                words.push(word);
            }
        }

        Self { words, index }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(WORDS)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|c| c.is_ascii_uppercase()) {
            self.index.contains(&word.to_ascii_lowercase())
        } else {
            self.index.contains(word)
        }
    }

    /// All words with exactly `length` letters
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == length)
    }

    /// Pick a word of the given length uniformly at random
    ///
    /// Returns `None` if the dictionary has no word of that length.
    pub fn choose<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        let candidates: Vec<&Word> = self.words_of_length(length).collect();
        candidates.choose(rng).copied()
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
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_common_lengths() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        for length in [4, 5, 6] {
            assert!(dictionary.words_of_length(length).next().is_some());
        }
        assert!(dictionary.contains("crane"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dictionary = Dictionary::new(["crane"]);
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("CRANE"));
        assert!(dictionary.contains("CrAnE"));
        assert!(!dictionary.contains("slate"));
    }

    #[test]
    fn new_skips_invalid_and_duplicates() {
        let dictionary = Dictionary::new(["crane", "", "  ", "cr4ne", "Crane", " slate "]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("slate"));
    }

    #[test]
    fn words_of_length_filters() {
        let dictionary = Dictionary::new(["able", "crane", "slate", "abroad"]);
        let five: Vec<&str> = dictionary.words_of_length(5).map(Word::text).collect();
        assert_eq!(five, vec!["crane", "slate"]);
        assert_eq!(dictionary.words_of_length(7).count(), 0);
    }

    #[test]
    fn choose_respects_length() {
        let dictionary = Dictionary::new(["able", "crane", "slate", "abroad"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let word = dictionary.choose(5, &mut rng).unwrap();
            assert_eq!(word.len(), 5);
        }
        assert_eq!(dictionary.choose(4, &mut rng).unwrap().text(), "able");
        assert!(dictionary.choose(9, &mut rng).is_none());
    }

    #[test]
    fn choose_reaches_every_candidate() {
        let dictionary = Dictionary::new(["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(dictionary.choose(5, &mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
