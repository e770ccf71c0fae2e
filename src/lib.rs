//! Wordle Filter
//!
//! A word-guessing assistant that narrows a word list with the feedback from
//! each round and proposes the candidate covering the most frequent letters.
//!
//! Feedback is one symbol per letter: `.` right letter in the right place,
//! `?` right letter in the wrong place, `x` letter not in the word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::core::WordRules;
//! use wordle_filter::solver::{RoundOutcome, Solver, UniqueLetterFrequency};
//! use wordle_filter::wordlists::words_from_slice;
//!
//! let words = words_from_slice(&["apple", "angle", "ankle", "aptly"]);
//! let mut solver = Solver::new(&words, WordRules::default(), UniqueLetterFrequency);
//!
//! let first = solver.propose().unwrap();
//! assert_eq!(first.word.text(), "angle");
//!
//! // The answer is "apple"
//! solver.submit(".xx..").unwrap();
//! let second = solver.propose().unwrap();
//! assert_eq!(second.word.text(), "apple");
//!
//! let outcome = solver.submit(".....").unwrap();
//! assert!(matches!(outcome, RoundOutcome::Solved { rounds: 2, .. }));
//! ```

// Core domain types
pub mod core;

// Filtering, ranking and the solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
pub mod logging;
