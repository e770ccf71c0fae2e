//! Word list loading utilities
//!
//! Lines are trimmed, lower-cased and deduplicated. Lines that are not valid
//! UTF-8 are skipped. Nothing else is validated here:
//! wrong-length or non-alphabetic lines are kept and dropped later by the
//! default filters.

use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::SolverError;

/// Deduplicated, lower-cased lines of a word list
pub type RawWordList = FxHashSet<String>;

/// Read every line of `reader` into a raw word list
///
/// # Errors
///
/// Returns an I/O error if reading fails part way through.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<RawWordList> {
    let mut words = RawWordList::default();
    for (number, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let Ok(text) = std::str::from_utf8(&line) else {
            debug!(line = number + 1, "skipping line that is not valid UTF-8");
            continue;
        };
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            words.insert(trimmed.to_lowercase());
        }
    }
    Ok(words)
}

/// Load a raw word list from a file
///
/// The file is closed as soon as every line has been read.
///
/// # Errors
///
/// Returns `SolverError::SourceUnreadable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} distinct lines", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RawWordList, SolverError> {
    let path = path.as_ref();
    let unreadable = |source| SolverError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let words = read_lines(BufReader::new(file)).map_err(unreadable)?;

    debug!(path = %path.display(), lines = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to a raw word list
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::{EMBEDDED_WORDS, words_from_slice};
///
/// let words = words_from_slice(EMBEDDED_WORDS);
/// assert_eq!(words.len(), EMBEDDED_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> RawWordList {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_lines_lowercases_and_dedups() {
        let input = Cursor::new("Crane\ncrane\nSLATE  \n\n  irate\n");
        let words = read_lines(input).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("crane"));
        assert!(words.contains("slate"));
        assert!(words.contains("irate"));
    }

    #[test]
    fn read_lines_keeps_malformed_lines() {
        let input = Cursor::new("toolong\nab1de\ncrane\n");
        let words = read_lines(input).unwrap();

        assert_eq!(words.len(), 3);
        assert!(words.contains("toolong"));
        assert!(words.contains("ab1de"));
    }

    #[test]
    fn read_lines_skips_invalid_utf8() {
        let input = Cursor::new(b"crane\n\xff\xfeabc\r\nslate\r\n".to_vec());
        let words = read_lines(input).unwrap();

        assert_eq!(words.len(), 2);
        assert!(words.contains("crane"));
        assert!(words.contains("slate"));
    }

    #[test]
    fn words_from_slice_converts() {
        let words = words_from_slice(&["crane", "SLATE", "slate", ""]);
        assert_eq!(words.len(), 2);
        assert!(words.contains("slate"));
    }

    #[test]
    fn load_from_missing_file_is_unreadable() {
        let result = load_from_file("/definitely/not/here/wordlist.txt");
        assert!(matches!(
            result,
            Err(SolverError::SourceUnreadable { .. })
        ));
    }
}
