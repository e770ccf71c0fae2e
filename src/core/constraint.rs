//! Position constraints derived from feedback
//!
//! Each constraint is a plain tagged value carrying the letter and the
//! position it came from, so filters can be compared, logged and replayed.

use std::fmt;

use super::Word;

/// A predicate over a word built from one (letter, position, symbol) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// Letter must occupy this position
    Exact { letter: u8, position: usize },
    /// Letter must occur somewhere, but not at this position
    Misplaced { letter: u8, position: usize },
    /// Letter must not occur anywhere; `position` records where it was guessed
    Absent { letter: u8, position: usize },
}

impl Constraint {
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        match self {
            Self::Exact { letter, .. }
            | Self::Misplaced { letter, .. }
            | Self::Absent { letter, .. } => letter,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Exact { position, .. }
            | Self::Misplaced { position, .. }
            | Self::Absent { position, .. } => position,
        }
    }

    /// Whether `word` satisfies this constraint
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::core::{Constraint, Word, WordRules};
    ///
    /// let word = Word::new("angle", &WordRules::default()).unwrap();
    /// assert!(Constraint::Exact { letter: b'a', position: 0 }.admits(&word));
    /// assert!(!Constraint::Misplaced { letter: b'a', position: 0 }.admits(&word));
    /// assert!(Constraint::Absent { letter: b'p', position: 1 }.admits(&word));
    /// ```
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        match *self {
            Self::Exact { letter, position } => word.char_at(position) == Some(letter),
            Self::Misplaced { letter, position } => {
                word.has_letter(letter) && word.char_at(position) != Some(letter)
            }
            Self::Absent { letter, .. } => !word.has_letter(letter),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter() as char;
        match self {
            Self::Exact { .. } => write!(f, "{letter}@{}", self.position()),
            Self::Misplaced { .. } => write!(f, "{letter}!{}", self.position()),
            Self::Absent { .. } => write!(f, "-{letter}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRules;

    fn word(text: &str) -> Word {
        Word::new(text, &WordRules::default()).unwrap()
    }

    #[test]
    fn exact_requires_letter_at_position() {
        let c = Constraint::Exact {
            letter: b'l',
            position: 3,
        };
        assert!(c.admits(&word("angle")));
        assert!(c.admits(&word("apple")));
        assert!(c.admits(&word("aptly")));
        assert!(!c.admits(&word("lousy")));
        assert!(!c.admits(&word("aloft")));
    }

    #[test]
    fn misplaced_requires_letter_elsewhere() {
        let c = Constraint::Misplaced {
            letter: b'e',
            position: 0,
        };
        assert!(c.admits(&word("angle")));
        assert!(!c.admits(&word("eerie"))); // e at position 0
        assert!(!c.admits(&word("audio"))); // no e at all
    }

    #[test]
    fn absent_rejects_letter_anywhere() {
        let c = Constraint::Absent {
            letter: b'p',
            position: 1,
        };
        assert!(c.admits(&word("angle")));
        assert!(!c.admits(&word("apple")));
        assert!(!c.admits(&word("crepe")));
    }

    #[test]
    fn accessors() {
        let c = Constraint::Misplaced {
            letter: b'q',
            position: 2,
        };
        assert_eq!(c.letter(), b'q');
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn display_tokens() {
        assert_eq!(
            Constraint::Exact {
                letter: b'a',
                position: 0
            }
            .to_string(),
            "a@0"
        );
        assert_eq!(
            Constraint::Misplaced {
                letter: b'b',
                position: 1
            }
            .to_string(),
            "b!1"
        );
        assert_eq!(
            Constraint::Absent {
                letter: b'c',
                position: 4
            }
            .to_string(),
            "-c"
        );
    }
}
