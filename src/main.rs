//! Wordle Filter - CLI
//!
//! Interactive word-guessing assistant with automated solve, rank and
//! benchmark modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use wordle_filter::{
    commands::{
        rank_candidates, run_benchmark, run_plain, run_play, select_targets, solve_word,
    },
    config::{DEFAULT_ALPHABET, DEFAULT_MAX_ROUNDS, SolverConfig},
    core::DEFAULT_WORD_SIZE,
    logging,
    output::{print_benchmark_result, print_play_stats, print_rank_result, print_solve_result},
    solver::{HeuristicType, SessionOutcome, Solver},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Wordle assistant using constraint filtering and letter-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(long, global = true, env = "WORDLE_WORD_SIZE", default_value_t = DEFAULT_WORD_SIZE)]
    word_size: usize,

    /// Allowed letters
    #[arg(long, global = true, env = "WORDLE_ALPHABET", default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Heuristic: unique (default), positional
    #[arg(short = 's', long, global = true, env = "WORDLE_HEURISTIC", default_value = "unique")]
    heuristic: String,

    /// Round limit for solve and benchmark, 0 for unlimited
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Debug logging on stderr (WORDLE_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Bare line protocol: print a word, read one line of feedback
    Plain,

    /// Solve a specific target word with truthful feedback
    Solve {
        /// The target word to solve
        target: String,
    },

    /// Show the best-ranked words of the full list
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every word in the list
        #[arg(long, conflicts_with = "count")]
        all: bool,

        /// Seed for reproducible target selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            word_size: self.word_size,
            alphabet: self.alphabet.clone(),
            wordlist: self.wordlist.clone(),
            heuristic: self.heuristic.clone(),
            max_rounds: self.max_rounds,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    let solver = build_solver(&config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(solver),
        Commands::Plain => run_plain_command(solver),
        Commands::Solve { target } => run_solve_command(solver, &target, &config, cli.verbose),
        Commands::Rank { count } => {
            run_rank_command(&solver, count);
            Ok(())
        }
        Commands::Benchmark { count, all, seed } => {
            let count = (!all).then_some(count);
            run_benchmark_command(&solver, &config, count, seed);
            Ok(())
        }
    }
}

fn build_solver(config: &SolverConfig) -> Result<Solver<HeuristicType>> {
    config.validate().context("invalid configuration")?;
    let solver = config.solver()?;

    info!(
        words = solver.store().original().len(),
        heuristic = solver.heuristic().name(),
        "word list loaded"
    );
    anyhow::ensure!(
        !solver.store().is_empty(),
        "no word in the list has {} letters from `{}`",
        config.word_size,
        config.alphabet
    );
    Ok(solver)
}

fn run_play_command(mut solver: Solver<HeuristicType>) -> Result<()> {
    let stdin = io::stdin();
    let stats = run_play(&mut solver, &mut stdin.lock(), &mut io::stdout())?;
    print_play_stats(&stats);
    Ok(())
}

fn run_plain_command(mut solver: Solver<HeuristicType>) -> Result<()> {
    let outcome = run_plain(
        &mut solver,
        io::stdin().lock(),
        io::stdout(),
        &mut io::stderr(),
    )?;
    if let SessionOutcome::Solved { word, rounds } = outcome {
        eprintln!("solved: {word} in {rounds} round(s)");
    }
    Ok(())
}

fn run_solve_command(
    mut solver: Solver<HeuristicType>,
    target: &str,
    config: &SolverConfig,
    verbose: bool,
) -> Result<()> {
    let result = solve_word(&mut solver, target, config.round_limit())?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_rank_command(solver: &Solver<HeuristicType>, count: usize) {
    let result = rank_candidates(solver, solver.heuristic().name(), count);
    print_rank_result(&result);
}

fn run_benchmark_command(
    solver: &Solver<HeuristicType>,
    config: &SolverConfig,
    count: Option<usize>,
    seed: Option<u64>,
) {
    let targets = select_targets(solver.store(), count, seed);
    println!(
        "Running benchmark on {} words with the {} heuristic...",
        targets.len(),
        solver.heuristic().name()
    );

    let result = run_benchmark(solver, &targets, config.round_limit(), true);
    print_benchmark_result(&result);
}
