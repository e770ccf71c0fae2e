//! Candidate scoring heuristics
//!
//! Defines the Heuristic trait and concrete implementations.

use super::ranker::FrequencyTable;
use crate::core::Word;

/// A scoring function used to rank candidates for the next guess
///
/// Higher scores are better. Any `Fn(&Word, &FrequencyTable) -> S` with an
/// orderable `S` is a heuristic too.
pub trait Heuristic {
    type Score: Ord + Copy;

    fn score(&self, word: &Word, table: &FrequencyTable) -> Self::Score;
}

impl<F, S> Heuristic for F
where
    F: Fn(&Word, &FrequencyTable) -> S,
    S: Ord + Copy,
{
    type Score = S;

    fn score(&self, word: &Word, table: &FrequencyTable) -> S {
        self(word, table)
    }
}

/// Sum of letter frequencies over the distinct letters of a word
///
/// Rewards words that cover many frequent letters over words that repeat one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueLetterFrequency;

impl Heuristic for UniqueLetterFrequency {
    type Score = usize;

    fn score(&self, word: &Word, table: &FrequencyTable) -> usize {
        word.unique_letters()
            .into_iter()
            .map(|letter| table.count(letter))
            .sum()
    }
}

/// Sum of how often each letter appears at that exact position
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalFrequency;

impl Heuristic for PositionalFrequency {
    type Score = usize;

    fn score(&self, word: &Word, table: &FrequencyTable) -> usize {
        word.bytes()
            .iter()
            .enumerate()
            .map(|(position, &letter)| table.positional_count(letter, position))
            .sum()
    }
}

/// Enum wrapper for the built-in heuristics
///
/// Allows runtime selection while keeping static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum HeuristicType {
    /// Unique-letter frequency (default)
    Unique(UniqueLetterFrequency),
    /// Positional letter frequency
    Positional(PositionalFrequency),
}

impl Heuristic for HeuristicType {
    type Score = usize;

    fn score(&self, word: &Word, table: &FrequencyTable) -> usize {
        match self {
            Self::Unique(h) => h.score(word, table),
            Self::Positional(h) => h.score(word, table),
        }
    }
}

impl HeuristicType {
    /// Names accepted by [`HeuristicType::parse`]
    pub const NAMES: [&'static str; 2] = ["unique", "positional"];

    /// Look up a heuristic by name
    ///
    /// Supported names: "unique", "frequency", "positional", "position"
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "unique" | "frequency" => Some(Self::Unique(UniqueLetterFrequency)),
            "positional" | "position" => Some(Self::Positional(PositionalFrequency)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unique(_) => "unique",
            Self::Positional(_) => "positional",
        }
    }
}

impl Default for HeuristicType {
    fn default() -> Self {
        Self::Unique(UniqueLetterFrequency)
    }
}
