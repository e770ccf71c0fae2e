//! Interactive play mode
//!
//! Text-based loop: suggest a word, read the feedback typed by the player,
//! narrow, repeat.

use colored::Colorize;
use std::io::{BufRead, Write};

use crate::core::{Constraint, Symbol};
use crate::error::SolverError;
use crate::solver::{Heuristic, RoundOutcome, Solver};

/// Totals for one play session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayStats {
    pub games_started: usize,
    /// Rounds needed for each solved game, in order
    pub solved: Vec<usize>,
}

/// Run the interactive loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure. Malformed feedback and contradictory
/// feedback are reported to the player and never end the loop.
pub fn run_play<H, R, W>(
    solver: &mut Solver<H>,
    input: &mut R,
    out: &mut W,
) -> Result<PlayStats, SolverError>
where
    H: Heuristic,
    R: BufRead,
    W: Write,
{
    print_banner(solver, out)?;

    let mut stats = PlayStats {
        games_started: 1,
        ..PlayStats::default()
    };
    solver.reset();

    loop {
        let proposal = match solver.propose() {
            Ok(proposal) => proposal,
            Err(SolverError::NoCandidatesRemaining { rounds }) => {
                writeln!(
                    out,
                    "\n{} No word fits the feedback from {rounds} round(s). Some feedback may be wrong.",
                    "✗".red().bold()
                )?;
                writeln!(out, "Type 'new' to start over or 'quit' to exit.\n")?;
                match prompt(input, out, "Command")?.as_deref().map(str::to_lowercase) {
                    Some(cmd) if matches!(cmd.as_str(), "new" | "n") => {
                        new_game(solver, &mut stats, out)?;
                    }
                    Some(cmd) if !matches!(cmd.as_str(), "quit" | "q" | "exit") => {}
                    _ => return goodbye(out, stats),
                }
                continue;
            }
            Err(e) => return Err(e),
        };

        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Round {}: {} candidates remaining",
            proposal.round, proposal.candidates
        )?;
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "\nSuggested guess: {}\n",
            proposal.word.text().to_uppercase().bright_yellow().bold()
        )?;

        loop {
            let Some(line) = prompt(input, out, "Feedback")? else {
                return goodbye(out, stats);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return goodbye(out, stats),
                "new" | "n" => {
                    new_game(solver, &mut stats, out)?;
                    break;
                }
                _ => {}
            }

            match solver.submit(&line) {
                Ok(RoundOutcome::Solved { word, rounds }) => {
                    stats.solved.push(rounds);
                    print_solved(out, word.text(), rounds)?;
                    match prompt(input, out, "Play again? (yes/no)")?
                        .as_deref()
                        .map(str::to_lowercase)
                    {
                        Some(answer) if matches!(answer.as_str(), "yes" | "y") => {
                            new_game(solver, &mut stats, out)?;
                            break;
                        }
                        _ => return goodbye(out, stats),
                    }
                }
                Ok(RoundOutcome::Narrowed { constraints }) => {
                    writeln!(out, "  {}\n", format_constraints(&constraints).dimmed())?;
                    break;
                }
                Err(SolverError::Feedback(e)) => {
                    writeln!(out, "{} {e}\n", "✗ Invalid feedback:".red())?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn print_banner<H: Heuristic, W: Write>(
    solver: &Solver<H>,
    out: &mut W,
) -> Result<(), SolverError> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "  {}", "Wordle Filter - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "{} words loaded. After each guess, type one symbol per letter:",
        solver.store().original().len()
    )?;
    for symbol in Symbol::ALL {
        writeln!(out, "  {}  {}", symbol.as_char(), symbol.meaning())?;
    }
    writeln!(out, "\nCommands: 'new' for a new game, 'quit' to exit\n")?;
    Ok(())
}

fn print_solved<W: Write>(out: &mut W, word: &str, rounds: usize) -> Result<(), SolverError> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  Solved: {} in {} {}",
        word.to_uppercase().bright_green().bold(),
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    )?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    Ok(())
}

fn new_game<H: Heuristic, W: Write>(
    solver: &mut Solver<H>,
    stats: &mut PlayStats,
    out: &mut W,
) -> Result<(), SolverError> {
    solver.reset();
    stats.games_started += 1;
    writeln!(out, "\nNew game started!\n")?;
    Ok(())
}

fn goodbye<W: Write>(out: &mut W, stats: PlayStats) -> Result<PlayStats, SolverError> {
    writeln!(out, "\nThanks for playing!")?;
    Ok(stats)
}

/// Constraints as space-separated tokens
fn format_constraints(constraints: &[Constraint]) -> String {
    constraints
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write `label: `, then read one trimmed line; `None` once input is closed
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, SolverError> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRules;
    use crate::solver::UniqueLetterFrequency;
    use crate::wordlists::words_from_slice;
    use std::io::Cursor;

    fn solver() -> Solver {
        Solver::new(
            &words_from_slice(&["apple", "angle", "ankle", "aptly"]),
            WordRules::default(),
            UniqueLetterFrequency,
        )
    }

    fn play(script: &str) -> (PlayStats, String) {
        let mut solver = solver();
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        let stats = run_play(&mut solver, &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn solves_in_two_rounds() {
        let (stats, out) = play(".xx..\n.....\nno\n");

        assert_eq!(stats.solved, vec![2]);
        assert_eq!(stats.games_started, 1);
        assert!(out.contains("ANGLE"));
        assert!(out.contains("APPLE"));
        assert!(out.contains("1 candidates remaining"));
    }

    #[test]
    fn malformed_feedback_is_reprompted() {
        let (stats, out) = play("xx\nxx-xx\n.....\nno\n");

        assert_eq!(stats.solved, vec![1]);
        assert!(out.contains("Invalid feedback"));
        assert_eq!(out.matches("Suggested guess").count(), 1);
    }

    #[test]
    fn contradiction_offers_new_game() {
        let (stats, out) = play("xxxxx\nnew\n.....\nno\n");

        assert!(out.contains("No word fits"));
        assert_eq!(stats.games_started, 2);
        assert_eq!(stats.solved, vec![1]);
    }

    #[test]
    fn quit_and_eof_end_the_loop() {
        let (stats, _) = play("quit\n");
        assert!(stats.solved.is_empty());

        let (stats, out) = play("");
        assert!(stats.solved.is_empty());
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn new_command_restarts() {
        let (stats, out) = play(".xx..\nnew\n.....\nyes\nquit\n");

        assert_eq!(stats.games_started, 3);
        assert_eq!(stats.solved, vec![1]);
        assert_eq!(out.matches("New game started").count(), 2);
    }

    #[test]
    fn legend_lists_every_symbol() {
        let (_, out) = play("q\n");
        for symbol in Symbol::ALL {
            assert!(out.contains(symbol.meaning()));
        }
    }
}
