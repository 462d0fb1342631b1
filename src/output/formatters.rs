//! Formatting utilities for terminal output

use crate::core::{Clue, Mark, Word};
use colored::Colorize;

/// Render a guess with each letter styled by its mark
#[must_use]
pub fn colored_guess(word: &Word, clue: &Clue) -> String {
    word.as_str()
        .to_uppercase()
        .chars()
        .zip(clue.marks())
        .map(|(letter, mark)| {
            let cell = format!(" {letter} ");
            match mark {
                Mark::Hit => cell.black().on_green().to_string(),
                Mark::Present => cell.black().on_yellow().to_string(),
                Mark::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        let guess = Word::new("apply").unwrap();
        let clue = Clue::compute(&guess, &Word::new("apple").unwrap());
        let text = colored_guess(&guess, &clue);

        let positions: Vec<usize> = ['A', 'P', 'L', 'Y']
            .iter()
            .map(|&c| text.find(c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
