//! Errors reported by game sessions and solvers

use std::fmt;

/// Error type for rejected guesses and failed guess selection
///
/// None of these end a game by themselves: a rejected guess leaves the session
/// untouched and the caller may simply try another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// The guess does not have exactly 5 characters
    InvalidGuessLength(usize),
    /// The guess has the right shape but is not a corpus word
    GuessNotInCorpus(String),
    /// A solver was asked for a guess after its candidates ran out
    EmptyCandidateSet,
    /// The session has already been solved or timed out
    GameOver,
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength(len) => {
                write!(f, "Guess must be exactly 5 letters, got {len}")
            }
            Self::GuessNotInCorpus(guess) => write!(f, "Guess \"{guess}\" is not an allowed word"),
            Self::EmptyCandidateSet => {
                write!(f, "No candidate words remain; the feedback is inconsistent")
            }
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for WordleError {}
