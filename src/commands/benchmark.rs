//! Benchmark command
//!
//! Autoplays a solver against many solutions and summarizes the turn counts.
//! Every game gets its own solver and session, so games run in parallel.

use crate::core::{Corpus, Word};
use crate::game::{DEFAULT_MAX_TURNS, GameSession, Outcome};
use crate::solver::SolverType;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub solver: String,
    /// Only play the first `limit` corpus words as solutions
    pub limit: Option<usize>,
    pub max_turns: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(solver: String) -> Self {
        Self {
            solver,
            limit: None,
            max_turns: DEFAULT_MAX_TURNS,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub solver: String,
    pub total_words: usize,
    pub solved: usize,
    pub timed_out: usize,
    /// Games where the solver ran out of candidates
    pub failed: Vec<Word>,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the named solver against the corpus words
///
/// # Errors
///
/// Returns an error if the solver name is unknown.
pub fn run_benchmark(config: &BenchmarkConfig, corpus: &Corpus) -> Result<BenchmarkResult, String> {
    if SolverType::from_name(&config.solver, corpus.clone()).is_none() {
        return Err(format!("Unknown solver: {}", config.solver));
    }

    let targets: Vec<Word> = corpus
        .iter()
        .take(config.limit.unwrap_or(corpus.len()))
        .copied()
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(config.solver.clone());

    let start = Instant::now();
    let outcomes: Vec<(Word, Option<Outcome>)> = targets
        .par_iter()
        .map(|&target| {
            let outcome =
                SolverType::from_name(&config.solver, corpus.clone()).and_then(|mut solver| {
                    GameSession::with_max_turns(corpus.clone(), target, config.max_turns)
                        .autoplay(&mut solver)
                        .ok()
                });
            pb.inc(1);
            (target, outcome)
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut solved = 0;
    let mut timed_out = 0;
    let mut failed = Vec::new();
    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for (target, outcome) in outcomes {
        let Some(outcome) = outcome else {
            failed.push(target);
            continue;
        };
        match outcome {
            Outcome::Solved { turns } => {
                solved += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_turns = max_turns.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            Outcome::TimedOut { .. } => timed_out += 1,
        }
    }

    let total_words = targets.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        solver: config.solver.clone(),
        total_words,
        solved,
        timed_out,
        failed,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns,
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_strs(&[
            "apple", "apply", "angle", "crane", "slate", "irate", "crate", "grate", "trace",
            "react", "speed", "erase", "robot", "floor", "world",
        ])
    }

    fn quiet(solver: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            show_progress: false,
            ..BenchmarkConfig::new(solver.to_string())
        }
    }

    #[test]
    fn benchmark_runs() {
        let corpus = corpus();
        let result = run_benchmark(&quiet("likelihood"), &corpus).unwrap();

        assert_eq!(result.total_words, corpus.len());
        assert_eq!(result.solved, corpus.len());
        assert_eq!(result.timed_out, 0);
        assert!(result.failed.is_empty());
        assert!(result.min_turns >= 1);
        assert!(result.max_turns <= corpus.len());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&quiet("entropy"), &corpus()).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let turn_sum: usize = result.distribution.iter().map(|(turns, n)| turns * n).sum();
        assert_eq!(turn_sum, result.total_turns);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let result = run_benchmark(&quiet("random"), &corpus()).unwrap();

        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
    }

    #[test]
    fn benchmark_with_limit() {
        let mut config = quiet("likelihood");
        config.limit = Some(4);

        let result = run_benchmark(&config, &corpus()).unwrap();
        assert_eq!(result.total_words, 4);
        assert_eq!(result.solved, 4);
    }

    #[test]
    fn benchmark_with_tight_cap_times_out() {
        let mut config = quiet("likelihood");
        config.max_turns = 0;

        // Only the solver's first pick can be solved within one turn
        let result = run_benchmark(&config, &corpus()).unwrap();
        assert_eq!(result.solved, 1);
        assert_eq!(result.timed_out, corpus().len() - 1);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let empty = Corpus::from_strs::<&str>(&[]);
        let result = run_benchmark(&quiet("likelihood"), &empty).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
    }

    #[test]
    fn benchmark_unknown_solver() {
        assert!(run_benchmark(&quiet("oracle"), &corpus()).is_err());
    }
}
