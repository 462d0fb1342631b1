//! Wordle Simulator - CLI
//!
//! Autoplay, benchmark, play and assistant modes over a word list file.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_sim::{
    commands::{
        BenchmarkConfig, SolveConfig, random_session, run_assist, run_benchmark, run_play,
        solve_word,
    },
    core::Corpus,
    output::{print_benchmark_result, print_solve_result},
    solver::SolverType,
    wordlists::{DEFAULT_CORPUS_PATH, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle simulator for evaluating letter-frequency solvers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Solver: likelihood (default), entropy, random
    #[arg(short, long, global = true, default_value = "likelihood")]
    solver: String,

    /// Word list file, one five-letter word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_CORPUS_PATH)]
    words: String,

    /// Give up autoplay after this many guesses
    #[arg(long, global = true, default_value_t = wordle_sim::game::DEFAULT_MAX_TURNS)]
    max_turns: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Autoplay a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Autoplay every word in the list and summarize
    Benchmark {
        /// Only test the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Guess a random word yourself
    Play,

    /// Get suggestions for a game played elsewhere
    Assist,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_from_file(&cli.words)
        .with_context(|| format!("failed to read word list {}", cli.words))?;
    if corpus.is_empty() {
        bail!("word list {} contains no five-letter words", cli.words);
    }

    match cli.command {
        Commands::Solve { word, verbose } => {
            run_solve_command(&cli.solver, &word, verbose, cli.max_turns, &corpus)
        }
        Commands::Benchmark { limit } => {
            run_benchmark_command(&cli.solver, limit, cli.max_turns, &corpus)
        }
        Commands::Play => run_play_command(&corpus),
        Commands::Assist => run_assist_command(&cli.solver, &corpus),
    }
}

fn run_solve_command(
    solver: &str,
    word: &str,
    verbose: bool,
    max_turns: usize,
    corpus: &Corpus,
) -> Result<()> {
    let mut config = SolveConfig::new(word.to_string(), solver.to_string());
    config.max_turns = max_turns;
    let result = solve_word(config, corpus).map_err(|e| anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    solver: &str,
    limit: Option<usize>,
    max_turns: usize,
    corpus: &Corpus,
) -> Result<()> {
    let tested = limit.map_or(corpus.len(), |n| n.min(corpus.len()));
    println!("Running {solver} solver against {tested} words...");

    let config = BenchmarkConfig {
        limit,
        max_turns,
        ..BenchmarkConfig::new(solver.to_string())
    };
    let result = run_benchmark(&config, corpus).map_err(|e| anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(corpus: &Corpus) -> Result<()> {
    let mut session = random_session(corpus).context("word list is empty")?;
    let stdin = io::stdin();
    run_play(&mut session, &mut stdin.lock(), &mut io::stdout()).map_err(|e| anyhow!(e))?;
    Ok(())
}

fn run_assist_command(solver: &str, corpus: &Corpus) -> Result<()> {
    let prototype = SolverType::from_name(solver, corpus.clone()).ok_or_else(|| {
        anyhow!(
            "unknown solver '{solver}', expected one of: {}",
            SolverType::NAMES.join(", ")
        )
    })?;

    let stdin = io::stdin();
    run_assist(|| prototype.clone(), &mut stdin.lock(), &mut io::stdout())
        .map_err(|e| anyhow!(e))?;
    Ok(())
}
