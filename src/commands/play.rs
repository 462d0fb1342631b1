//! Interactive play
//!
//! A human types guesses against a hidden word; each accepted guess is
//! answered with its clue.

use crate::core::Corpus;
use crate::game::{GameSession, GameState};
use crate::output::formatters::colored_guess;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// Start a session against a random corpus word
///
/// Returns `None` if the corpus is empty.
#[must_use]
pub fn random_session(corpus: &Corpus) -> Option<GameSession> {
    corpus
        .words()
        .choose(&mut rand::rng())
        .map(|&solution| GameSession::new(corpus.clone(), solution))
}

/// Run the guessing loop until the word is found, input ends, or the player quits
///
/// Rejected guesses are explained and do not use up a turn.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
) -> Result<GameState, String> {
    writeln!(output, "Guess the five-letter word. Type 'quit' to give up.\n")
        .map_err(|e| e.to_string())?;

    let mut line = String::new();
    while session.state() == GameState::InProgress {
        write!(output, "Guess {}: ", session.turn() + 1).map_err(|e| e.to_string())?;
        output.flush().map_err(|e| e.to_string())?;

        line.clear();
        if input.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break;
        }
        let guess = line.trim();

        if matches!(guess, "quit" | "q" | "exit") {
            writeln!(output, "\nThe word was {}.", session.solution()).map_err(|e| e.to_string())?;
            break;
        }

        match session.submit_guess(guess) {
            Ok(clue) => {
                if let Some(word) = session.guesses().last() {
                    writeln!(output, "  {}  {clue}", colored_guess(word, &clue))
                        .map_err(|e| e.to_string())?;
                }
            }
            Err(e) => writeln!(output, "  {e}").map_err(|e| e.to_string())?,
        }
    }

    if session.is_solved() {
        writeln!(output, "\nSolved in {} guesses!", session.turn()).map_err(|e| e.to_string())?;
    }
    Ok(session.state())
}
