//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, percentage};
use crate::commands::{BenchmarkResult, PlayStats, RankResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (step, after) in result.steps.iter().zip(result.candidates_after()) {
        println!(
            "\nRound {}: {} {}  {}",
            step.proposal.round,
            step.proposal.word.text().to_uppercase(),
            feedback_to_emoji(&step.feedback),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!("  Candidates: {} → {}", step.proposal.candidates, after);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved in {} rounds, {} candidates left",
                result.steps.len(),
                result.remaining
            )
            .red()
            .bold()
        );
    }
}

/// Print the top-ranked candidates and the letter frequencies
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CANDIDATE RANKING:".bright_cyan().bold(),
        result.heuristic.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Top {} of {} candidates:",
        result.entries.len(),
        result.total_candidates
    );
    for (i, (word, score)) in result.entries.iter().enumerate() {
        println!(
            "   {:>3}. {}  {}",
            (i + 1).to_string().bright_black(),
            word.to_uppercase().bright_white().bold(),
            score.to_string().bright_yellow()
        );
    }

    let max = result.frequencies.first().map_or(0, |&(_, count)| count);
    println!("\n🔤 {}", "Letter frequencies:".bright_cyan().bold());
    for &(letter, count) in result.frequencies.iter().filter(|(_, c)| *c > 0) {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {letter}: {} {count:5}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved.to_string().green(),
        percentage(result.solved, result.total_words)
    );
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = percentage(count, result.total_words);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {rounds:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Hardest words:".bright_cyan().bold());
        for (word, rounds) in &result.hardest {
            println!("   {} ({rounds} rounds)", word.to_uppercase());
        }
    }
}

/// Print totals after an interactive session
pub fn print_play_stats(stats: &PlayStats) {
    if stats.solved.is_empty() {
        return;
    }
    let average = stats.solved.iter().sum::<usize>() as f64 / stats.solved.len() as f64;
    println!(
        "Games solved: {}/{}, average {:.2} rounds",
        stats.solved.len(),
        stats.games_started,
        average
    );
}
