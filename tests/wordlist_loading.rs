//! Word lists read from real files

use std::io::Write;

use tempfile::NamedTempFile;
use wordle_filter::config::SolverConfig;
use wordle_filter::core::WordRules;
use wordle_filter::error::SolverError;
use wordle_filter::solver::{Solver, UniqueLetterFrequency};
use wordle_filter::wordlists::load_from_file;

fn wordlist(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_and_normalizes_lines() {
    let file = wordlist("Crane\n  slate \ncrane\n\nSLATE\n");
    let words = load_from_file(file.path()).unwrap();

    assert_eq!(words.len(), 2);
    assert!(words.contains("crane"));
    assert!(words.contains("slate"));
}

#[test]
fn malformed_lines_are_dropped_by_the_store() {
    let file = wordlist("crane\ncranes\ncr4ne\ncaf\u{e9}s\nslate\nok\n");
    let raw = load_from_file(file.path()).unwrap();
    assert_eq!(raw.len(), 6);

    let solver = Solver::new(&raw, WordRules::default(), UniqueLetterFrequency);
    let kept: Vec<&str> = solver
        .store()
        .sorted_candidates()
        .into_iter()
        .map(|w| w.text())
        .collect();
    assert_eq!(kept, vec!["crane", "slate"]);
}

#[test]
fn undecodable_line_is_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"ghost\ncaf\xe9s\nbread\n").unwrap();
    file.flush().unwrap();

    let words = load_from_file(file.path()).unwrap();
    assert_eq!(words.len(), 2);
    assert!(words.contains("ghost"));
    assert!(words.contains("bread"));
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = load_from_file(&path).unwrap_err();
    match err {
        SolverError::SourceUnreadable { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_reads_configured_file() {
    let file = wordlist("ghost\nbread\n");
    let config = SolverConfig {
        wordlist: Some(file.path().to_path_buf()),
        ..SolverConfig::default()
    };

    let words = config.load_words().unwrap();
    assert_eq!(words.len(), 2);
}

#[test]
fn custom_word_size_from_file() {
    let file = wordlist("cat\ndog\nbird\n");
    let config = SolverConfig {
        word_size: 3,
        wordlist: Some(file.path().to_path_buf()),
        ..SolverConfig::default()
    };

    let rules = config.rules().unwrap();
    let mut solver = Solver::new(&config.load_words().unwrap(), rules, UniqueLetterFrequency);
    assert_eq!(solver.store().len(), 2);

    let proposal = solver.propose().unwrap();
    assert_eq!(proposal.word.text(), "cat");
    assert!(solver.submit("...").is_ok());
}
