//! Word solving command
//!
//! Plays a full session against a known target and returns the transcript.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Heuristic, SessionOutcome, Solver, Step, TruthfulOracle, apply_filters};

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub steps: Vec<Step>,
    /// Candidates left once the session ended
    pub remaining: usize,
}

impl SolveResult {
    /// Candidates left after each step
    #[must_use]
    pub fn candidates_after(&self) -> Vec<usize> {
        let mut after: Vec<usize> = self
            .steps
            .iter()
            .skip(1)
            .map(|step| step.proposal.candidates)
            .collect();
        if !self.steps.is_empty() {
            after.push(self.remaining);
        }
        after
    }
}

/// Solve `target` from a fresh session using truthful feedback
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word under the solver's rules
/// - The target is not in the loaded word list
/// - The candidate set empties before the target is found
pub fn solve_word<H: Heuristic>(
    solver: &mut Solver<H>,
    target: &str,
    max_rounds: Option<usize>,
) -> Result<SolveResult, SolverError> {
    let target_word = Word::new(target, solver.rules())?;
    if !solver.store().original().contains(&target_word) {
        return Err(SolverError::UnknownTarget(target_word.text().to_string()));
    }

    solver.reset();
    let mut oracle = TruthfulOracle::new(target_word);
    let outcome = solver.run_bounded(&mut oracle, max_rounds)?;

    let success = matches!(outcome, SessionOutcome::Solved { .. });
    let remaining = if success {
        1
    } else {
        let store = solver.store();
        apply_filters(store.original(), solver.session().filters(), store.defaults()).len()
    };

    Ok(SolveResult {
        target: oracle.target().text().to_string(),
        success,
        steps: oracle.into_transcript(),
        remaining,
    })
}
