//! Command implementations

pub mod benchmark;
pub mod plain;
pub mod play;
pub mod rank;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use plain::run_plain;
pub use play::{PlayStats, run_play};
pub use rank::{RankResult, rank_candidates};
pub use solve::{SolveResult, solve_word};
