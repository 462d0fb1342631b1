//! Wordle feedback computation and representation
//!
//! A clue holds one mark per letter of the guess that produced it:
//! - Hit (letter in the correct position)
//! - Present (letter in the word, wrong position)
//! - Absent (letter not in the word, once earlier marks have claimed their share)

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Hit,
    Present,
    Absent,
}

impl Mark {
    /// Parse one feedback character
    ///
    /// Accepts `G`/`g`/🟩 for hit, `Y`/`y`/🟨 for present and
    /// `-`/`_`/`.`/⬜ for absent.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    #[must_use]
    pub const fn to_letter(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess, aligned with the guess letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clue([Mark; WORD_LEN]);

/// Error returned when a clue string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClueError(String);

impl fmt::Display for ParseClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid clue string: {}", self.0)
    }
}

impl std::error::Error for ParseClueError {}

impl Clue {
    /// All hits (perfect match)
    pub const SOLVED: Self = Self([Mark::Hit; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Calculate the clue when `guess` is played against `solution`
    ///
    /// Exact matches claim their letters first, so a repeated guess letter can
    /// only be marked present as many times as the solution has it left over.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Clue, Mark, Word};
    ///
    /// let guess = Word::new("apply").unwrap();
    /// let solution = Word::new("apple").unwrap();
    /// let clue = Clue::compute(&guess, &solution);
    ///
    /// assert_eq!(
    ///     clue.marks(),
    ///     &[Mark::Hit, Mark::Hit, Mark::Hit, Mark::Hit, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, solution: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut remaining = solution.letter_counts();

        // First pass: exact positions
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == solution.letter_at(i) {
                *mark = Mark::Hit;
                remaining[usize::from(letter - b'a')] -= 1;
            }
        }

        // Second pass: misplaced letters from whatever is left
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Hit {
                continue;
            }
            let count = &mut remaining[usize::from(guess.letter_at(i) - b'a')];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Hit)
    }

    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&mark| mark == Mark::Hit).count()
    }

    #[must_use]
    pub fn count_presents(&self) -> usize {
        self.0.iter().filter(|&&mark| mark == Mark::Present).count()
    }

    /// Render as an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.to_emoji()).collect()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Clue {
    type Err = ParseClueError;

    /// Parse a clue from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut chars = s.chars();
        for slot in &mut marks {
            *slot = chars
                .next()
                .and_then(Mark::from_char)
                .ok_or_else(|| ParseClueError(s.to_string()))?;
        }
        if chars.next().is_some() {
            return Err(ParseClueError(s.to_string()));
        }
        Ok(Self(marks))
    }
}
