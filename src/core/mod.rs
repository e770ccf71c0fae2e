//! Core domain types for the word game
//!
//! Words, feedback symbols and the constraints derived from them. Everything
//! here is pure and independent of how words are loaded or ranked.

mod constraint;
mod feedback;
mod word;

pub use constraint::Constraint;
pub use feedback::{Feedback, FeedbackError, Symbol};
pub use word::{Alphabet, DEFAULT_WORD_SIZE, Word, WordError, WordRules};
