//! Candidate store
//!
//! Holds the default-filtered word list loaded at startup and the working set
//! derived from it. Every round the working set is recomputed from the
//! original set rather than narrowed in place.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{Alphabet, Constraint, Word, WordRules};
use crate::wordlists::RawWordList;

/// A set of unique candidate words
pub type CandidateSet = FxHashSet<Word>;

/// Filters every word must pass regardless of feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultFilter {
    /// Exact configured word length
    WordSize(usize),
    /// Every character drawn from the alphabet
    Alphabet(Alphabet),
}

impl DefaultFilter {
    /// Default filters for the given rules
    #[must_use]
    pub fn for_rules(rules: &WordRules) -> Vec<Self> {
        vec![
            Self::WordSize(rules.word_size()),
            Self::Alphabet(rules.alphabet().clone()),
        ]
    }

    #[must_use]
    pub fn admits(&self, text: &str) -> bool {
        match self {
            Self::WordSize(size) => text.chars().count() == *size,
            Self::Alphabet(alphabet) => text
                .chars()
                .all(|c| c.is_ascii() && alphabet.contains(c as u8)),
        }
    }
}

/// Subset of `base` satisfying every default filter and every constraint
///
/// `base` is left untouched.
#[must_use]
pub fn apply_filters(
    base: &CandidateSet,
    filters: &[Constraint],
    defaults: &[DefaultFilter],
) -> CandidateSet {
    base.iter()
        .filter(|word| defaults.iter().all(|check| check.admits(word.text())))
        .filter(|word| filters.iter().all(|check| check.admits(word)))
        .cloned()
        .collect()
}

/// Owner of the original and working candidate sets
#[derive(Debug, Clone)]
pub struct CandidateStore {
    original: CandidateSet,
    current: CandidateSet,
    defaults: Vec<DefaultFilter>,
}

impl CandidateStore {
    /// Build the store from raw lines, keeping only words the rules admit
    #[must_use]
    pub fn from_raw(raw: &RawWordList, rules: &WordRules) -> Self {
        let defaults = DefaultFilter::for_rules(rules);
        let original: CandidateSet = raw
            .iter()
            .filter(|text| defaults.iter().all(|check| check.admits(text)))
            .filter_map(|text| Word::new(text.as_str(), rules).ok())
            .collect();

        debug!(
            raw = raw.len(),
            valid = original.len(),
            "default-filtered word list"
        );

        Self {
            current: original.clone(),
            original,
            defaults,
        }
    }

    /// Recompute the working set from the original set and `filters`
    ///
    /// Returns the number of remaining candidates.
    pub fn refilter(&mut self, filters: &[Constraint]) -> usize {
        let before = self.current.len();
        self.current = apply_filters(&self.original, filters, &self.defaults);
        debug!(
            filters = filters.len(),
            before,
            after = self.current.len(),
            "refiltered candidates"
        );
        self.current.len()
    }

    /// Restore the working set to the full original set
    pub fn reset(&mut self) {
        self.current.clone_from(&self.original);
    }

    /// Current candidates, in no particular order
    pub fn candidates(&self) -> impl Iterator<Item = &Word> {
        self.current.iter()
    }

    /// Current candidates sorted lexicographically
    #[must_use]
    pub fn sorted_candidates(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.current.iter().collect();
        words.sort_unstable();
        words
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> &CandidateSet {
        &self.current
    }

    #[inline]
    #[must_use]
    pub const fn original(&self) -> &CandidateSet {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn defaults(&self) -> &[DefaultFilter] {
        &self.defaults
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.current.contains(word)
    }
}
