//! Per-round feedback symbols and parsing
//!
//! One symbol per letter position:
//! - `.` = letter correct and in correct position
//! - `?` = letter in word but wrong position
//! - `x` = letter not in word
//!
//! [`Feedback::score`] generates truthful feedback for a guess against a known
//! target, which the automated drivers and tests rely on.

use std::fmt;
use thiserror::Error;

use super::Word;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Letter correct and in correct position
    Exact,
    /// Letter in word but wrong position
    Misplaced,
    /// Letter not in word
    Absent,
}

impl Symbol {
    pub const ALL: [Self; 3] = [Self::Exact, Self::Misplaced, Self::Absent];

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Exact => '.',
            Self::Misplaced => '?',
            Self::Absent => 'x',
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Exact),
            '?' => Some(Self::Misplaced),
            'x' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Human-readable meaning, used in prompts
    #[must_use]
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Exact => "if the letter is in the correct position",
            Self::Misplaced => "if the letter is in the incorrect position",
            Self::Absent => "if the letter is not in the word",
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback `{feedback}` exceeds word size: {word_size}")]
    TooLong { feedback: String, word_size: usize },
    #[error("feedback `{feedback}` is shorter than word size: {word_size}")]
    TooShort { feedback: String, word_size: usize },
    #[error("unknown symbol `{symbol}` at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}

/// A parsed feedback line, exactly one symbol per letter position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Symbol>);

impl Feedback {
    /// Parse a feedback string for words of `word_size` letters
    ///
    /// Length is checked first, then every symbol, so nothing is accepted
    /// from a malformed line.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the line is longer or shorter than
    /// `word_size` or contains a symbol other than `.`, `?` or `x`.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Feedback, Symbol};
    ///
    /// let feedback = Feedback::parse(".?x..", 5).unwrap();
    /// assert_eq!(feedback.symbols()[1], Symbol::Misplaced);
    /// assert!(Feedback::parse(".?x...", 5).is_err());
    /// ```
    pub fn parse(input: &str, word_size: usize) -> Result<Self, FeedbackError> {
        let len = input.chars().count();
        if len > word_size {
            return Err(FeedbackError::TooLong {
                feedback: input.to_string(),
                word_size,
            });
        }

        let symbols = input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Symbol::from_char(symbol)
                    .ok_or(FeedbackError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if len < word_size {
            return Err(FeedbackError::TooShort {
                feedback: input.to_string(),
                word_size,
            });
        }

        Ok(Self(symbols))
    }

    /// All-exact feedback for `word_size` letters
    #[must_use]
    pub fn solved(word_size: usize) -> Self {
        Self(vec![Symbol::Exact; word_size])
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == Symbol::Exact)
    }

    /// Truthful feedback when `guess` is played against `target`
    ///
    /// Standard marking with duplicate letters: exact matches consume the
    /// target's letters first, then misplaced marks are handed out left to
    /// right while copies remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Feedback, Word, WordRules};
    ///
    /// let rules = WordRules::default();
    /// let guess = Word::new("apple", &rules).unwrap();
    /// let target = Word::new("angle", &rules).unwrap();
    /// assert_eq!(Feedback::score(&guess, &target).to_string(), ".xx..");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = vec![Symbol::Absent; guess.len()];
        let mut available = target.char_counts();

        // First pass: exact position matches
        for (i, (g, t)) in guess.bytes().iter().zip(target.bytes()).enumerate() {
            if g == t {
                result[i] = Symbol::Exact;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position while copies remain
        for (i, letter) in guess.bytes().iter().enumerate() {
            if result[i] == Symbol::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                result[i] = Symbol::Misplaced;
                *count -= 1;
            }
        }

        Self(result)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRules;

    fn word(text: &str) -> Word {
        Word::new(text, &WordRules::default()).unwrap()
    }

    fn score(guess: &str, target: &str) -> String {
        Feedback::score(&word(guess), &word(target)).to_string()
    }

    #[test]
    fn symbol_round_trips_through_char() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
        }
        assert_eq!(Symbol::from_char('g'), None);
    }

    #[test]
    fn parse_valid_feedback() {
        let feedback = Feedback::parse("..?x.", 5).unwrap();
        assert_eq!(
            feedback.symbols(),
            &[
                Symbol::Exact,
                Symbol::Exact,
                Symbol::Misplaced,
                Symbol::Absent,
                Symbol::Exact
            ]
        );
        assert!(!feedback.is_solved());
        assert!(Feedback::parse(".....", 5).unwrap().is_solved());
    }

    #[test]
    fn parse_rejects_too_long() {
        assert_eq!(
            Feedback::parse("......", 5),
            Err(FeedbackError::TooLong {
                feedback: "......".to_string(),
                word_size: 5
            })
        );
    }

    #[test]
    fn parse_rejects_too_short() {
        assert!(matches!(
            Feedback::parse("..x", 5),
            Err(FeedbackError::TooShort { word_size: 5, .. })
        ));
        assert!(matches!(
            Feedback::parse("", 5),
            Err(FeedbackError::TooShort { .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_symbol() {
        assert_eq!(
            Feedback::parse("..g..", 5),
            Err(FeedbackError::UnknownSymbol {
                symbol: 'g',
                position: 2
            })
        );
        // Uppercase X is not accepted
        assert!(matches!(
            Feedback::parse("X....", 5),
            Err(FeedbackError::UnknownSymbol { position: 0, .. })
        ));
    }

    #[test]
    fn parse_reports_symbol_before_short_length() {
        assert!(matches!(
            Feedback::parse(".g", 5),
            Err(FeedbackError::UnknownSymbol { symbol: 'g', .. })
        ));
    }

    #[test]
    fn score_all_absent_and_all_exact() {
        assert_eq!(score("abcde", "fghij"), "xxxxx");
        assert_eq!(score("crane", "crane"), ".....");
    }

    #[test]
    fn score_apple_against_angle() {
        // a exact, both p absent, l exact, e exact
        assert_eq!(score("apple", "angle"), ".xx..");
    }

    #[test]
    fn score_duplicate_letters_exact_takes_priority() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        assert_eq!(score("robot", "floor"), "??x.x");
        // GEESE vs THOSE: only the final E is in the answer
        assert_eq!(score("geese", "those"), "xxx..");
    }

    #[test]
    fn score_duplicate_letters_misplaced_once() {
        // SPEED vs ERASE: both E in the answer
        assert_eq!(score("speed", "erase"), "?x??x");
        // LOLLY vs HELLO: both L in the answer are matched exactly
        assert_eq!(score("lolly", "hello"), "x?..x");
    }

    #[test]
    fn display_matches_input() {
        assert_eq!(Feedback::parse("x?.x?", 5).unwrap().to_string(), "x?.x?");
        assert_eq!(Feedback::solved(5).to_string(), ".....");
    }
}
