//! Plain line protocol
//!
//! No banners or commands: print the word, read one line of feedback. Meant
//! for scripts and pipes.

use std::io::{BufRead, Write};

use crate::core::Symbol;
use crate::error::SolverError;
use crate::solver::{Heuristic, LineChannel, SessionOutcome, Solver};

/// Drive one session over `input`/`output`
///
/// The symbol legend and any malformed-feedback messages go to `errors` so
/// `output` carries nothing but words and prompts. After a malformed line
/// the same word is asked for again.
///
/// # Errors
///
/// Returns an error when input closes before the word is found, on I/O
/// failure, or when no candidate fits the feedback.
pub fn run_plain<H, R, W, E>(
    solver: &mut Solver<H>,
    input: R,
    output: W,
    errors: &mut E,
) -> Result<SessionOutcome, SolverError>
where
    H: Heuristic,
    R: BufRead,
    W: Write,
    E: Write,
{
    let legend: Vec<String> = Symbol::ALL
        .iter()
        .map(|symbol| format!("{} {}", symbol.as_char(), symbol.meaning()))
        .collect();
    writeln!(errors, "feedback symbols: {}", legend.join(", "))?;

    let mut channel = LineChannel::new(input, output);
    loop {
        match solver.run(&mut channel) {
            Err(SolverError::Feedback(e)) => writeln!(errors, "invalid feedback: {e}")?,
            result => return result,
        }
    }
}
