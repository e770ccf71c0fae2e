//! Word lists for the solver
//!
//! A bundled list compiled into the binary, plus loaders for word-list files.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use loader::{RawWordList, load_from_file, read_lines, words_from_slice};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRules;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(EMBEDDED_WORDS.len(), EMBEDDED_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        let rules = WordRules::default();
        for &word in EMBEDDED_WORDS {
            assert!(rules.admits(word), "Word '{word}' is not a valid candidate");
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        assert_eq!(words_from_slice(EMBEDDED_WORDS).len(), EMBEDDED_WORDS_COUNT);
    }
}
