//! Error types shared across the solver

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::{FeedbackError, WordError};

/// Invalid solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word size must be at least 1")]
    ZeroWordSize,
    #[error("alphabet must not be empty")]
    EmptyAlphabet,
    #[error("alphabet may only contain ASCII lowercase letters, found `{0}`")]
    InvalidAlphabetCharacter(char),
}

/// Errors surfaced by the solve loop and its collaborators
///
/// Feedback errors are local to a round: the round is rejected and the
/// session is left exactly as it was before.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("cannot read word list {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error("no candidates remain after {rounds} round(s); the feedback is contradictory")]
    NoCandidatesRemaining { rounds: usize },

    #[error("no guess is waiting for feedback")]
    NoPendingGuess,

    #[error("session is already solved")]
    AlreadySolved,

    #[error("target `{0}` is not in the word list")]
    UnknownTarget(String),

    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
