//! Candidate narrowing
//!
//! A [`CandidateFilter`] keeps the corpus indices of every word still
//! consistent with the feedback seen so far, together with letter frequency
//! statistics over those words.

use crate::core::{Clue, Corpus, Mark, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Letter frequencies over a set of words
///
/// Counts are per letter occurrence, so a word with a repeated letter
/// contributes once per repetition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStats {
    global: FxHashMap<u8, usize>,
    positional: [FxHashMap<u8, usize>; WORD_LEN],
    word_count: usize,
}

impl LetterStats {
    /// Tally the letters of the given words
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut stats = Self::default();
        for word in words {
            stats.word_count += 1;
            for (i, &letter) in word.letters().iter().enumerate() {
                *stats.global.entry(letter).or_insert(0) += 1;
                *stats.positional[i].entry(letter).or_insert(0) += 1;
            }
        }
        stats
    }

    /// Occurrences of `letter` across all words and positions
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.global.get(&letter).copied().unwrap_or(0)
    }

    /// Occurrences of `letter` at `position` across all words
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn count_at(&self, position: usize, letter: u8) -> usize {
        self.positional[position].get(&letter).copied().unwrap_or(0)
    }

    /// Number of words the statistics were computed over
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Share of all letter slots taken by `letter`: count / (5 × words)
    ///
    /// Returns 0.0 when there are no words.
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.count(letter) as f64 / (WORD_LEN * self.word_count) as f64
    }
}

/// Shrinking set of candidate words drawn from a shared corpus
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    corpus: Corpus,
    surviving: Vec<usize>,
    stats: LetterStats,
}

impl CandidateFilter {
    /// Start with every corpus word as a candidate
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        let surviving: Vec<usize> = (0..corpus.len()).collect();
        let stats = LetterStats::from_words(corpus.words());
        Self {
            corpus,
            surviving,
            stats,
        }
    }

    /// Remove every candidate inconsistent with `clue` for `guess`
    ///
    /// Hit and present marks are applied first. Absent marks are applied
    /// afterwards: when the same letter is also hit or present elsewhere in
    /// the guess, the absent mark only caps how many copies the word holds,
    /// so just that position is ruled out. Otherwise the letter is ruled out
    /// everywhere.
    ///
    /// Statistics are refreshed before returning the number of survivors.
    pub fn narrow(&mut self, clue: &Clue, guess: &Word) -> usize {
        let words = self.corpus.words();
        let mut confirmed = [false; 26];

        for (i, mark) in clue.marks().iter().enumerate() {
            let letter = guess.letter_at(i);
            match mark {
                Mark::Hit => {
                    self.surviving.retain(|&idx| words[idx].letter_at(i) == letter);
                }
                Mark::Present => {
                    self.surviving.retain(|&idx| {
                        let word = &words[idx];
                        word.letter_at(i) != letter && word.contains(letter)
                    });
                }
                Mark::Absent => continue,
            }
            confirmed[usize::from(letter - b'a')] = true;
        }

        for (i, mark) in clue.marks().iter().enumerate() {
            if *mark != Mark::Absent {
                continue;
            }
            let letter = guess.letter_at(i);
            if confirmed[usize::from(letter - b'a')] {
                self.surviving.retain(|&idx| words[idx].letter_at(i) != letter);
            } else {
                self.surviving.retain(|&idx| !words[idx].contains(letter));
            }
        }

        self.recompute_statistics();
        self.surviving.len()
    }

    /// Rebuild the letter statistics from the current survivors
    pub fn recompute_statistics(&mut self) {
        self.stats = LetterStats::from_words(self.surviving());
    }

    /// Current candidates, in corpus order
    pub fn surviving(&self) -> impl Iterator<Item = &Word> {
        let words = self.corpus.words();
        self.surviving.iter().map(move |&idx| &words[idx])
    }

    /// Corpus indices of the current candidates, ascending
    #[must_use]
    pub fn surviving_indices(&self) -> &[usize] {
        &self.surviving
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.surviving().any(|candidate| candidate == word)
    }

    #[must_use]
    pub const fn statistics(&self) -> &LetterStats {
        &self.stats
    }

    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surviving.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surviving.is_empty()
    }
}
