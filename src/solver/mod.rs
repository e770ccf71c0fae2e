//! Constraint-filtering solver
//!
//! Candidate store, feedback interpreter, frequency ranker and the solve loop
//! that ties them together.

mod channel;
mod engine;
pub mod heuristic;
mod interpreter;
pub mod ranker;
mod session;
pub mod store;

pub use channel::{FeedbackChannel, LineChannel, Step, TruthfulOracle};
pub use engine::{Phase, Proposal, RoundOutcome, SessionOutcome, Solver};
pub use heuristic::{Heuristic, HeuristicType, PositionalFrequency, UniqueLetterFrequency};
pub use interpreter::{KnownLetters, constraints_for, interpret};
pub use ranker::{FrequencyTable, best_word, letter_frequencies, rank};
pub use session::SessionState;
pub use store::{CandidateSet, CandidateStore, DefaultFilter, apply_filters};
