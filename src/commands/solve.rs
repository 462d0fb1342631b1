//! Word solving command
//!
//! Autoplays one puzzle with a chosen solver and returns the solution path.

use crate::core::{Clue, Corpus, Word};
use crate::game::{DEFAULT_MAX_TURNS, GameSession, Outcome};
use crate::solver::{CandidateFilter, SolverType};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub solver: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, solver: String) -> Self {
        Self {
            target,
            solver,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub solver: String,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the named solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or not in the corpus
/// - The solver name is unknown
/// - The solver runs out of candidates
pub fn solve_word(config: SolveConfig, corpus: &Corpus) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    if !corpus.contains(&target) {
        return Err(format!("Target word \"{target}\" is not in the word list"));
    }

    let mut solver = SolverType::from_name(&config.solver, corpus.clone())
        .ok_or_else(|| format!("Unknown solver: {}", config.solver))?;
    let mut session = GameSession::with_max_turns(corpus.clone(), target, config.max_turns);

    let outcome = session.autoplay(&mut solver).map_err(|e| e.to_string())?;

    // Replay the history to report how each guess narrowed the field
    let mut replay = CandidateFilter::new(corpus.clone());
    let guesses = session
        .history()
        .map(|(&word, &clue)| {
            let candidates_before = replay.len();
            let candidates_after = replay.narrow(&clue, &word);
            GuessStep {
                word,
                clue,
                candidates_before,
                candidates_after,
            }
        })
        .collect();

    Ok(SolveResult {
        target,
        solver: config.solver,
        outcome,
        guesses,
    })
}
