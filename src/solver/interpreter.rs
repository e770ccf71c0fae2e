//! Feedback interpreter
//!
//! Turns one round's guess and feedback line into position constraints.
//! The line is fully validated before anything is emitted or recorded, so a
//! malformed round leaves the known-letter set untouched.

use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

use crate::core::{Constraint, Feedback, FeedbackError, Symbol, Word};

/// Letters confirmed at an exact position in any accepted round
///
/// Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLetters(BTreeSet<u8>);

impl KnownLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter, returning whether it was new
    pub fn insert(&mut self, letter: u8) -> bool {
        self.0.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Whether every letter of `self` is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl fmt::Display for KnownLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Interpret a raw feedback line for `word`
///
/// An `x` for a letter that the same line marks `.` or `?` elsewhere becomes
/// a misplaced constraint, not an absent one, whatever its position.
///
/// # Errors
/// Returns `FeedbackError` if the line does not hold exactly one recognised
/// symbol per letter of `word`. `known_letters` is not modified in that case.
///
/// # Examples
/// ```
/// use wordle_filter::core::{Constraint, Word, WordRules};
/// use wordle_filter::solver::{KnownLetters, interpret};
///
/// let word = Word::new("apple", &WordRules::default()).unwrap();
/// let mut known = KnownLetters::new();
/// let constraints = interpret(&word, ".xx..", &mut known).unwrap();
///
/// assert_eq!(constraints[0], Constraint::Exact { letter: b'a', position: 0 });
/// assert_eq!(constraints[1], Constraint::Absent { letter: b'p', position: 1 });
/// assert!(known.contains(b'l'));
/// ```
pub fn interpret(
    word: &Word,
    feedback: &str,
    known_letters: &mut KnownLetters,
) -> Result<Vec<Constraint>, FeedbackError> {
    let feedback = Feedback::parse(feedback, word.len())?;
    Ok(constraints_for(word, &feedback, known_letters))
}

/// Constraints for an already parsed feedback line
///
/// Positions are processed left to right. Exact letters join
/// `known_letters` as they are met. An absent mark degrades to a misplaced
/// constraint when the letter is already known, or when the same guess marks
/// that letter exact or misplaced at another position.
pub fn constraints_for(
    word: &Word,
    feedback: &Feedback,
    known_letters: &mut KnownLetters,
) -> Vec<Constraint> {
    let present_in_guess: FxHashSet<u8> = word
        .bytes()
        .iter()
        .zip(feedback.symbols())
        .filter(|(_, symbol)| **symbol != Symbol::Absent)
        .map(|(&letter, _)| letter)
        .collect();

    let constraints: Vec<Constraint> = word
        .bytes()
        .iter()
        .zip(feedback.symbols())
        .enumerate()
        .map(|(position, (&letter, symbol))| match symbol {
            Symbol::Exact => {
                known_letters.insert(letter);
                Constraint::Exact { letter, position }
            }
            Symbol::Misplaced => Constraint::Misplaced { letter, position },
            Symbol::Absent
                if known_letters.contains(letter) || present_in_guess.contains(&letter) =>
            {
                Constraint::Misplaced { letter, position }
            }
            Symbol::Absent => Constraint::Absent { letter, position },
        })
        .collect();

    debug!(
        word = %word,
        feedback = %feedback,
        constraints = constraints.len(),
        known = %known_letters,
        "interpreted feedback"
    );

    constraints
}
