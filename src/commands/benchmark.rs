//! Benchmark command
//!
//! Solves many targets, each in its own session, and aggregates the rounds
//! needed. Sessions are independent so they run in parallel.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::core::Word;
use crate::solver::{CandidateStore, Heuristic, SessionOutcome, Solver, TruthfulOracle};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds needed -> number of targets solved in that many
    pub distribution: BTreeMap<usize, usize>,
    /// Targets that needed the most rounds, hardest first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets from the store
///
/// `None` takes every word. A seed makes the sample reproducible.
#[must_use]
pub fn select_targets(
    store: &CandidateStore,
    count: Option<usize>,
    seed: Option<u64>,
) -> Vec<Word> {
    let pool = store.sorted_candidates();
    let Some(count) = count else {
        return pool.into_iter().cloned().collect();
    };

    match seed {
        Some(seed) => sample(&pool, count, &mut StdRng::seed_from_u64(seed)),
        None => sample(&pool, count, &mut rand::rng()),
    }
}

fn sample<R: Rng + ?Sized>(pool: &[&Word], count: usize, rng: &mut R) -> Vec<Word> {
    pool.choose_multiple(rng, count)
        .map(|&word| word.clone())
        .collect()
}

/// Run the solver against every target
///
/// `solver` is cloned per target; its own session is left untouched.
#[must_use]
pub fn run_benchmark<H>(
    solver: &Solver<H>,
    targets: &[Word],
    max_rounds: Option<usize>,
    show_progress: bool,
) -> BenchmarkResult
where
    H: Heuristic + Clone + Send + Sync,
{
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results: Vec<(&Word, Option<usize>)> = targets
        .par_iter()
        .map(|target| {
            let mut session = solver.clone();
            session.reset();
            let mut oracle = TruthfulOracle::new(target.clone());
            let rounds = match session.run_bounded(&mut oracle, max_rounds) {
                Ok(SessionOutcome::Solved { rounds, .. }) => Some(rounds),
                Ok(SessionOutcome::OutOfRounds { .. }) => None,
                Err(e) => {
                    warn!(target = %target, error = %e, "benchmark session failed");
                    None
                }
            };
            pb.inc(1);
            (target, rounds)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let solved_rounds: Vec<usize> = results.iter().filter_map(|(_, r)| *r).collect();
    let solved = solved_rounds.len();
    let total_words = results.len();

    let mut distribution = BTreeMap::new();
    for &rounds in &solved_rounds {
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let average_rounds = if solved > 0 {
        solved_rounds.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest: Vec<(String, usize)> = results
        .iter()
        .filter_map(|(word, rounds)| rounds.map(|r| (word.text().to_string(), r)))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(5);

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        average_rounds,
        min_rounds: solved_rounds.iter().copied().min().unwrap_or(0),
        max_rounds: solved_rounds.iter().copied().max().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
