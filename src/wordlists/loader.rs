//! Word list loading utilities
//!
//! Reads a newline separated word file into a [`Corpus`].

use crate::core::{Corpus, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Default corpus file, looked up relative to the working directory
pub const DEFAULT_CORPUS_PATH: &str = "five_letter.txt";

/// Load a corpus from a file
///
/// Trailing whitespace is stripped from every line. Blank lines and lines
/// that are not five lowercase letters are skipped, as are repeats.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sim::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("five_letter.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Corpus> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline separated words into a corpus
///
/// # Examples
/// ```
/// use wordle_sim::wordlists::loader::parse_word_list;
///
/// let corpus = parse_word_list("apple\napply  \n\nangle\n");
/// assert_eq!(corpus.len(), 3);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Corpus {
    Corpus::new(content.lines().filter_map(|line| {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}
