//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::Outcome;
use colored::Colorize;

/// Print the result of solving a word
///
/// With `verbose`, each turn also shows how many candidates it left.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with the {} solver",
        result.target.as_str().to_uppercase().bright_yellow().bold(),
        result.solver.bright_white()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "Turn {:>3}: {} {}",
            i + 1,
            colored_guess(&step.word, &step.clue),
            step.clue.to_emoji()
        );
        if verbose {
            println!(
                "           Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved { turns } => println!(
            "{}",
            format!("✅ Solved in {turns} guesses!").green().bold()
        ),
        Outcome::TimedOut { turns } => println!(
            "{}",
            format!("⏱ Guessing timed out after {turns} guesses").red().bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.solver.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    if result.timed_out > 0 {
        println!(
            "   Timed out:        {}",
            result.timed_out.to_string().yellow()
        );
    }
    if !result.failed.is_empty() {
        println!(
            "   Failed:           {}",
            result.failed.len().to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_turns.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_turns.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = result.distribution.values().copied().max().unwrap_or(0);
    for (turns, &count) in &result.distribution {
        let pct = if result.total_words == 0 {
            0.0
        } else {
            (count as f64 / result.total_words as f64) * 100.0
        };
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {turns:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.failed.is_empty() {
        let words: Vec<&str> = result.failed.iter().map(|w| w.as_str()).collect();
        println!("\n❌ {} {}", "Ran out of candidates:".red(), words.join(", "));
    }
}
