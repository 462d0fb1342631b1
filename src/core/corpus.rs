//! The shared word corpus
//!
//! Built once, then cloned by handle into every filter and session. Clones
//! share the same word storage.

use super::word::Word;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Immutable ordered set of valid Wordle words
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Arc<[Word]>,
    lookup: Arc<FxHashSet<Word>>,
}

impl Corpus {
    /// Build a corpus from words, dropping duplicates but keeping first-seen order
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words.into_iter().filter(|w| lookup.insert(*w)).collect();

        Self {
            words: words.into(),
            lookup: Arc::new(lookup),
        }
    }

    /// Build a corpus from string slices, skipping anything that is not a valid word
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::Corpus;
    ///
    /// let corpus = Corpus::from_strs(&["apple", "apply", "toolong", "angle"]);
    /// assert_eq!(corpus.len(), 3);
    /// ```
    #[must_use]
    pub fn from_strs<S: AsRef<str>>(words: &[S]) -> Self {
        Self::new(words.iter().filter_map(|w| Word::new(w.as_ref()).ok()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Get the word stored at a corpus index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
