//! Per-session state threaded through the interpreter and the solve loop

use super::interpreter::{KnownLetters, interpret};
use crate::core::{Constraint, FeedbackError, Word};

/// Known letters and the accumulated filter list for one game
///
/// Both only grow while the session lasts. A rejected round changes nothing.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    known_letters: KnownLetters,
    filters: Vec<Constraint>,
    rounds: usize,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret feedback for `word` and append the resulting constraints
    ///
    /// Returns the constraints added by this round.
    ///
    /// # Errors
    /// Returns `FeedbackError` for a malformed line; the session is unchanged.
    pub fn accept_round(
        &mut self,
        word: &Word,
        feedback: &str,
    ) -> Result<Vec<Constraint>, FeedbackError> {
        let constraints = interpret(word, feedback, &mut self.known_letters)?;
        self.filters.extend_from_slice(&constraints);
        self.rounds += 1;
        Ok(constraints)
    }

    #[inline]
    #[must_use]
    pub const fn known_letters(&self) -> &KnownLetters {
        &self.known_letters
    }

    /// Every constraint from every accepted round, oldest first
    #[inline]
    #[must_use]
    pub fn filters(&self) -> &[Constraint] {
        &self.filters
    }

    /// Number of accepted rounds
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }
}
