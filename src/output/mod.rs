//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_play_stats, print_rank_result, print_solve_result,
};
