//! Letter-frequency word scores
//!
//! Both scores treat letters as independent draws with probability
//! p = count / (5 × candidates), ignoring position.

use super::filter::LetterStats;
use crate::core::Word;

/// Naive probability of a word: Π p(letter) over its five letters
///
/// The numerator is accumulated as an exact integer, so words with the same
/// letters always score identically.
///
/// # Examples
/// ```
/// use wordle_sim::core::Word;
/// use wordle_sim::solver::LetterStats;
/// use wordle_sim::solver::scoring::likelihood_score;
///
/// let words = [Word::new("apple").unwrap(), Word::new("angle").unwrap()];
/// let stats = LetterStats::from_words(&words);
///
/// // a=2, p=2, p=2, l=2, e=2 out of 10 letter slots
/// let score = likelihood_score(&stats, &words[0]);
/// assert!((score - 0.2_f64.powi(5)).abs() < 1e-15);
/// ```
#[must_use]
pub fn likelihood_score(stats: &LetterStats, word: &Word) -> f64 {
    let slots = (5 * stats.word_count()) as u128;
    if slots == 0 {
        return 0.0;
    }
    let numerator: u128 = word
        .letters()
        .iter()
        .map(|&letter| stats.count(letter) as u128)
        .product();
    numerator as f64 / slots.pow(5) as f64
}

/// Letter entropy of a word: Σ −p·log₂(p) over its five letters
///
/// This is not the expected information of playing the word (which would
/// group candidates by the clue each one produces). It ranks words much like
/// [`likelihood_score`] does.
#[must_use]
pub fn entropy_score(stats: &LetterStats, word: &Word) -> f64 {
    // Summed in letter order so anagrams score identically
    let mut letters = *word.letters();
    letters.sort_unstable();

    letters
        .iter()
        .map(|&letter| stats.frequency(letter))
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}

/// Pick the highest scoring word; on ties the earliest word wins
#[must_use]
pub fn first_max_by_score<'a, I, F>(words: I, mut score: F) -> Option<(&'a Word, f64)>
where
    I: IntoIterator<Item = &'a Word>,
    F: FnMut(&Word) -> f64,
{
    let mut best: Option<(&'a Word, f64)> = None;
    for word in words {
        let value = score(word);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((word, value)),
        }
    }
    best
}
