//! Candidate ranking command
//!
//! Scores the whole word list and reports the top entries alongside the
//! letter-frequency table they were scored against.

use crate::solver::{Heuristic, Solver, rank};

/// Result of ranking the word list
pub struct RankResult {
    pub heuristic: String,
    pub total_candidates: usize,
    pub entries: Vec<(String, usize)>,
    pub frequencies: Vec<(char, usize)>,
}

/// Rank every candidate of a fresh session and keep the best `count`
#[must_use]
pub fn rank_candidates<H>(solver: &Solver<H>, heuristic_name: &str, count: usize) -> RankResult
where
    H: Heuristic<Score = usize>,
{
    let table = solver.frequencies();
    let entries = rank(solver.store().candidates(), table, solver.heuristic())
        .into_iter()
        .take(count)
        .map(|(word, score)| (word.text().to_string(), score))
        .collect();

    let frequencies = table
        .most_common()
        .into_iter()
        .map(|(letter, count)| (letter as char, count))
        .collect();

    RankResult {
        heuristic: heuristic_name.to_string(),
        total_candidates: table.words(),
        entries,
        frequencies,
    }
}
