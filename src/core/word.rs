//! Word representation and the rules a line of text must meet to become one
//!
//! A Word is a fixed-size run of lowercase letters drawn from an [`Alphabet`].
//! [`WordRules`] carries the configured size and alphabet and is the single
//! source of the default filters applied to every candidate.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

use crate::error::ConfigError;

/// Default word size for the game
pub const DEFAULT_WORD_SIZE: usize = 5;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word contains `{character}` which is not in the alphabet")]
    InvalidCharacter { character: char },
}

/// The set of letters a word may be built from
///
/// Stored sorted and deduplicated so iteration order is stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Vec<u8>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters
    ///
    /// Duplicates are collapsed.
    ///
    /// # Errors
    /// Returns `ConfigError` if the string is empty or holds anything other
    /// than ASCII lowercase letters.
    pub fn new(letters: &str) -> Result<Self, ConfigError> {
        if letters.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        if let Some(bad) = letters.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidAlphabetCharacter(bad));
        }

        let mut letters = letters.as_bytes().to_vec();
        letters.sort_unstable();
        letters.dedup();

        Ok(Self { letters })
    }

    /// Letters in ascending order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: (b'a'..=b'z').collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Word size and alphabet every candidate must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRules {
    word_size: usize,
    alphabet: Alphabet,
}

impl WordRules {
    /// # Errors
    /// Returns `ConfigError::ZeroWordSize` for a zero word size.
    pub fn new(word_size: usize, alphabet: Alphabet) -> Result<Self, ConfigError> {
        if word_size == 0 {
            return Err(ConfigError::ZeroWordSize);
        }
        Ok(Self {
            word_size,
            alphabet,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.word_size
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Check an already lower-cased string against the rules
    ///
    /// # Errors
    /// Returns the first rule the text breaks.
    pub fn check(&self, text: &str) -> Result<(), WordError> {
        let actual = text.chars().count();
        if actual != self.word_size {
            return Err(WordError::InvalidLength {
                expected: self.word_size,
                actual,
            });
        }

        match text
            .chars()
            .find(|&c| !c.is_ascii() || !self.alphabet.contains(c as u8))
        {
            Some(character) => Err(WordError::InvalidCharacter { character }),
            None => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub fn admits(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }

    /// The all-exact feedback string that ends a session
    #[must_use]
    pub fn solved_feedback(&self) -> String {
        crate::core::Symbol::Exact.as_char().to_string().repeat(self.word_size)
    }
}

impl Default for WordRules {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            alphabet: Alphabet::default(),
        }
    }
}

/// A validated candidate word
///
/// Ordering is lexicographic, which the ranker uses to break score ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Box<str>,
}

impl Word {
    /// Create a new Word, lower-casing the input first
    ///
    /// # Errors
    /// Returns `WordError` if the text has the wrong length or contains a
    /// character outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Word, WordRules};
    ///
    /// let rules = WordRules::default();
    /// let word = Word::new("CRANE", &rules).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long", &rules).is_err());
    /// assert!(Word::new("sh0rt", &rules).is_err());
    /// ```
    pub fn new(text: impl Into<String>, rules: &WordRules) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();
        rules.check(&text)?;
        Ok(Self {
            text: text.into_boxed_str(),
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as bytes; every word is ASCII once validated
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at `position`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.bytes().get(position).copied()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.bytes().contains(&letter)
    }

    /// Distinct letters of the word, in first-seen order
    #[must_use]
    pub fn unique_letters(&self) -> Vec<u8> {
        let mut seen = Vec::with_capacity(self.len());
        for &letter in self.bytes() {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen
    }

    /// Count of each letter in the word
    ///
    /// Used for feedback scoring with duplicate letters.
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.bytes() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, &WordRules::default()).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let w = word("crane");
        assert_eq!(w.text(), "crane");
        assert_eq!(w.bytes(), b"crane");
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(word("CRANE").text(), "crane");
        assert_eq!(word("CrAnE"), word("crane"));
    }

    #[test]
    fn word_creation_invalid_length() {
        let rules = WordRules::default();
        assert_eq!(
            Word::new("toolong", &rules),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 7
            })
        );
        assert!(matches!(
            Word::new("", &rules),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        let rules = WordRules::default();
        assert_eq!(
            Word::new("cran3", &rules),
            Err(WordError::InvalidCharacter { character: '3' })
        );
        assert!(Word::new("cran ", &rules).is_err());
        assert!(Word::new("crané", &rules).is_err());
    }

    #[test]
    fn word_respects_custom_rules() {
        let rules = WordRules::new(4, Alphabet::new("abcd").unwrap()).unwrap();
        assert!(Word::new("abba", &rules).is_ok());
        assert!(Word::new("abbe", &rules).is_err());
        assert!(Word::new("abcda", &rules).is_err());
    }

    #[test]
    fn word_char_at_and_has_letter() {
        let w = word("crane");
        assert_eq!(w.char_at(0), Some(b'c'));
        assert_eq!(w.char_at(4), Some(b'e'));
        assert_eq!(w.char_at(5), None);
        assert!(w.has_letter(b'r'));
        assert!(!w.has_letter(b'z'));
    }

    #[test]
    fn word_unique_letters() {
        assert_eq!(word("speed").unique_letters(), b"sped".to_vec());
        assert_eq!(word("aaaaa").unique_letters(), b"a".to_vec());
    }

    #[test]
    fn word_char_counts() {
        let counts = word("speed").char_counts();
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        assert!(word("apple") < word("aptly"));
        assert!(word("angle") < word("ankle"));
    }

    #[test]
    fn alphabet_default_is_ascii_lowercase() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.contains(b'a'));
        assert!(alphabet.contains(b'z'));
        assert!(!alphabet.contains(b'A'));
        assert_eq!(alphabet.to_string(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn alphabet_rejects_bad_input() {
        assert_eq!(Alphabet::new(""), Err(ConfigError::EmptyAlphabet));
        assert_eq!(
            Alphabet::new("abC"),
            Err(ConfigError::InvalidAlphabetCharacter('C'))
        );
        assert_eq!(Alphabet::new("cabba").unwrap().letters(), b"abc");
    }

    #[test]
    fn rules_reject_zero_size() {
        assert_eq!(
            WordRules::new(0, Alphabet::default()),
            Err(ConfigError::ZeroWordSize)
        );
    }

    #[test]
    fn rules_solved_feedback() {
        assert_eq!(WordRules::default().solved_feedback(), ".....");
    }
}
