//! Frequency ranker
//!
//! Letter statistics over the current candidates and best-word selection.
//! The table is rebuilt from scratch each round since the candidate set
//! changes with every filter.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use tracing::debug;

use super::heuristic::Heuristic;
use crate::core::{Alphabet, Word};

/// Letter occurrence counts across a set of candidates
///
/// Every alphabet letter has an entry, zero when it never occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FxHashMap<u8, usize>,
    positional: Vec<FxHashMap<u8, usize>>,
    words: usize,
}

impl FrequencyTable {
    /// Count letters over every candidate, repeated letters counted each time
    pub fn compute<'a, I>(candidates: I, alphabet: &Alphabet) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut counts: FxHashMap<u8, usize> =
            alphabet.letters().iter().map(|&letter| (letter, 0)).collect();
        let mut positional: Vec<FxHashMap<u8, usize>> = Vec::new();
        let mut words = 0;

        for word in candidates {
            words += 1;
            if positional.len() < word.len() {
                positional.resize_with(word.len(), FxHashMap::default);
            }
            for (position, &letter) in word.bytes().iter().enumerate() {
                *counts.entry(letter).or_insert(0) += 1;
                *positional[position].entry(letter).or_insert(0) += 1;
            }
        }

        Self {
            counts,
            positional,
            words,
        }
    }

    /// Occurrences of `letter` across all candidates
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Occurrences of `letter` at `position` across all candidates
    #[inline]
    #[must_use]
    pub fn positional_count(&self, letter: u8, position: usize) -> usize {
        self.positional
            .get(position)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// Number of candidates the table was built from
    #[inline]
    #[must_use]
    pub const fn words(&self) -> usize {
        self.words
    }

    /// Letters sorted by descending count, ties alphabetical
    #[must_use]
    pub fn most_common(&self) -> Vec<(u8, usize)> {
        let mut entries: Vec<(u8, usize)> =
            self.counts.iter().map(|(&l, &c)| (l, c)).collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Letter frequencies over `candidates`
pub fn letter_frequencies<'a, I>(candidates: I, alphabet: &Alphabet) -> FrequencyTable
where
    I: IntoIterator<Item = &'a Word>,
{
    FrequencyTable::compute(candidates, alphabet)
}

/// Higher score first, then lexicographically smaller word
fn by_rank<S: Ord>(a: &(&Word, S), b: &(&Word, S)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Candidate with the highest score
///
/// Ties go to the lexicographically smallest word, so the result does not
/// depend on iteration order. Returns `None` for an empty candidate set.
///
/// # Examples
/// ```
/// use wordle_filter::core::{Alphabet, Word, WordRules};
/// use wordle_filter::solver::{UniqueLetterFrequency, best_word, letter_frequencies};
///
/// let rules = WordRules::default();
/// let words: Vec<Word> = ["apple", "angle", "ankle", "aptly"]
///     .iter()
///     .map(|w| Word::new(*w, &rules).unwrap())
///     .collect();
///
/// let table = letter_frequencies(&words, rules.alphabet());
/// let best = best_word(&words, &table, &UniqueLetterFrequency).unwrap();
/// assert_eq!(best.text(), "angle");
/// ```
pub fn best_word<'a, I, H>(
    candidates: I,
    table: &FrequencyTable,
    heuristic: &H,
) -> Option<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
    H: Heuristic + ?Sized,
{
    let best = candidates
        .into_iter()
        .map(|word| (word, heuristic.score(word, table)))
        .min_by(by_rank)
        .map(|(word, _)| word);

    if let Some(word) = best {
        debug!(word = %word, "selected best word");
    }
    best
}

/// Every candidate with its score, best first
pub fn rank<'a, I, H>(
    candidates: I,
    table: &FrequencyTable,
    heuristic: &H,
) -> Vec<(&'a Word, H::Score)>
where
    I: IntoIterator<Item = &'a Word>,
    H: Heuristic + ?Sized,
{
    let mut scored: Vec<(&Word, H::Score)> = candidates
        .into_iter()
        .map(|word| (word, heuristic.score(word, table)))
        .collect();
    scored.sort_by(by_rank);
    scored
}
