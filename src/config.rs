//! Solver configuration
//!
//! Collected from the command line (with environment overrides) and turned
//! into [`WordRules`], a raw word list and a heuristic.

use std::path::PathBuf;
use tracing::warn;

use crate::core::{Alphabet, DEFAULT_WORD_SIZE, WordRules};
use crate::error::{ConfigError, SolverError};
use crate::solver::{HeuristicType, Solver};
use crate::wordlists::{EMBEDDED_WORDS, RawWordList, load_from_file, words_from_slice};

/// Default alphabet, ASCII lowercase
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default round limit for the automated drivers
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Everything needed to set up a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub word_size: usize,
    pub alphabet: String,
    /// Word-list file; the embedded list when `None`
    pub wordlist: Option<PathBuf>,
    pub heuristic: String,
    /// Round limit for `solve` and `benchmark`; 0 means unlimited
    pub max_rounds: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            alphabet: DEFAULT_ALPHABET.to_string(),
            wordlist: None,
            heuristic: HeuristicType::default().name().to_string(),
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl SolverConfig {
    /// Validate size and alphabet and build the word rules
    ///
    /// # Errors
    /// Returns `ConfigError` for a zero word size or a bad alphabet.
    pub fn rules(&self) -> Result<WordRules, ConfigError> {
        let alphabet = Alphabet::new(&self.alphabet)?;
        WordRules::new(self.word_size, alphabet)
    }

    /// Check the configuration without building anything else
    ///
    /// # Errors
    /// Same as [`SolverConfig::rules`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules().map(|_| ())
    }

    /// Load the configured word list
    ///
    /// # Errors
    /// Returns `SolverError::SourceUnreadable` if the file cannot be read.
    pub fn load_words(&self) -> Result<RawWordList, SolverError> {
        match &self.wordlist {
            Some(path) => load_from_file(path),
            None => Ok(words_from_slice(EMBEDDED_WORDS)),
        }
    }

    /// Build a solver from the configured rules, word list and heuristic
    ///
    /// # Errors
    /// - `SolverError::Config` for a zero word size or a bad alphabet
    /// - `SolverError::SourceUnreadable` if the word list cannot be read
    pub fn solver(&self) -> Result<Solver<HeuristicType>, SolverError> {
        let rules = self.rules()?;
        let raw = self.load_words()?;
        Ok(Solver::new(&raw, rules, self.heuristic()))
    }

    /// Heuristic by name, falling back to the default for unknown names
    #[must_use]
    pub fn heuristic(&self) -> HeuristicType {
        HeuristicType::parse(&self.heuristic).unwrap_or_else(|| {
            warn!(
                name = %self.heuristic,
                "unknown heuristic, using {}",
                HeuristicType::default().name()
            );
            HeuristicType::default()
        })
    }

    /// Round limit, `None` when unlimited
    #[must_use]
    pub const fn round_limit(&self) -> Option<usize> {
        match self.max_rounds {
            0 => None,
            n => Some(n),
        }
    }
}
