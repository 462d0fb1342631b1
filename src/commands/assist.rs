//! Assistant mode
//!
//! The solver suggests guesses for a game played elsewhere and the user
//! types back the clue each guess received.

use crate::WordleError;
use crate::core::{Clue, Word};
use crate::solver::Solver;
use std::io::{BufRead, Write};

/// Run the suggestion loop
///
/// `make_solver` builds a fresh solver; it is called again on `undo` so the
/// remaining history can be replayed. Returns the number of turns when the
/// word was found, or `None` if the user quit or input ended.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<S, F, R, W>(
    make_solver: F,
    input: &mut R,
    output: &mut W,
) -> Result<Option<usize>, String>
where
    S: Solver,
    F: Fn() -> S,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "After each suggestion, enter the clue you got:\n  \
         G for a hit, Y for present, - for absent (e.g. \"GY--G\"),\n  \
         'win' if the guess was right, 'undo' to take back the last clue, 'quit' to stop.\n"
    )
    .map_err(|e| e.to_string())?;

    let mut solver = make_solver();
    let mut history: Vec<(Word, Clue)> = Vec::new();
    let mut line = String::new();

    loop {
        let guess = match solver.choose_guess() {
            Ok(guess) => Some(guess),
            Err(WordleError::EmptyCandidateSet) => {
                writeln!(
                    output,
                    "No candidates remain! A clue may be wrong; type 'undo' or 'quit'."
                )
                .map_err(|e| e.to_string())?;
                None
            }
            Err(e) => return Err(e.to_string()),
        };

        if let Some(guess) = guess {
            writeln!(
                output,
                "Turn {}: {} candidates, try {}",
                history.len() + 1,
                solver.candidates().len(),
                guess.as_str().to_uppercase()
            )
            .map_err(|e| e.to_string())?;
        }

        let clue = loop {
            write!(output, "Clue: ").map_err(|e| e.to_string())?;
            output.flush().map_err(|e| e.to_string())?;

            line.clear();
            if input.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
                return Ok(None);
            }

            match line.trim() {
                "quit" | "q" | "exit" => return Ok(None),
                "undo" | "u" => {
                    if history.pop().is_some() {
                        solver = make_solver();
                        for (word, clue) in &history {
                            solver.observe_feedback(clue, word);
                        }
                        break None;
                    }
                    writeln!(output, "Nothing to undo!").map_err(|e| e.to_string())?;
                }
                "win" | "solved" => break Some(Clue::SOLVED),
                text => match text.parse::<Clue>() {
                    Ok(clue) if guess.is_some() => break Some(clue),
                    Ok(_) => {
                        writeln!(output, "There is no guess to score; type 'undo' or 'quit'.")
                            .map_err(|e| e.to_string())?;
                    }
                    Err(e) => writeln!(output, "{e}").map_err(|e| e.to_string())?,
                },
            }
        };

        let (Some(clue), Some(guess)) = (clue, guess) else {
            continue;
        };

        history.push((guess, clue));
        if clue.is_solved() {
            writeln!(output, "Solved in {} guesses!", history.len()).map_err(|e| e.to_string())?;
            return Ok(Some(history.len()));
        }
        solver.observe_feedback(&clue, &guess);
    }
}
