//! Guess selection strategies
//!
//! Defines the Solver trait and its concrete implementations. Every solver
//! owns its own [`CandidateFilter`] and is meant for a single puzzle.

use super::filter::CandidateFilter;
use super::scoring::{entropy_score, first_max_by_score, likelihood_score};
use crate::WordleError;
use crate::core::{Clue, Corpus, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A guesser that learns from feedback
pub trait Solver {
    /// Pick the next word to play
    ///
    /// # Errors
    /// Returns `WordleError::EmptyCandidateSet` if no candidate is left.
    fn choose_guess(&mut self) -> Result<Word, WordleError>;

    /// Narrow the candidates using the clue received for `guess`
    fn observe_feedback(&mut self, clue: &Clue, guess: &Word);

    /// The candidates this solver is choosing from
    fn candidates(&self) -> &CandidateFilter;
}

/// Random selection from the surviving candidates
#[derive(Clone)]
pub struct RandomSolver {
    filter: CandidateFilter,
    rng: StdRng,
}

impl RandomSolver {
    /// Create a solver seeded from the thread RNG
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            filter: CandidateFilter::new(corpus),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a solver whose picks repeat for a given seed
    #[must_use]
    pub fn seeded(corpus: Corpus, seed: u64) -> Self {
        Self {
            filter: CandidateFilter::new(corpus),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Solver for RandomSolver {
    fn choose_guess(&mut self) -> Result<Word, WordleError> {
        let &index = self
            .filter
            .surviving_indices()
            .choose(&mut self.rng)
            .ok_or(WordleError::EmptyCandidateSet)?;

        self.filter
            .corpus()
            .get(index)
            .copied()
            .ok_or(WordleError::EmptyCandidateSet)
    }

    fn observe_feedback(&mut self, clue: &Clue, guess: &Word) {
        self.filter.narrow(clue, guess);
    }

    fn candidates(&self) -> &CandidateFilter {
        &self.filter
    }
}

/// Most probable candidate under independent letter frequencies
///
/// Scores each candidate with [`likelihood_score`]; the first of equally
/// scored candidates wins.
#[derive(Clone)]
pub struct MaxLikelihoodSolver {
    filter: CandidateFilter,
}

impl MaxLikelihoodSolver {
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            filter: CandidateFilter::new(corpus),
        }
    }
}

impl Solver for MaxLikelihoodSolver {
    fn choose_guess(&mut self) -> Result<Word, WordleError> {
        let stats = self.filter.statistics();
        first_max_by_score(self.filter.surviving(), |word| likelihood_score(stats, word))
            .map(|(word, _)| *word)
            .ok_or(WordleError::EmptyCandidateSet)
    }

    fn observe_feedback(&mut self, clue: &Clue, guess: &Word) {
        self.filter.narrow(clue, guess);
    }

    fn candidates(&self) -> &CandidateFilter {
        &self.filter
    }
}

/// Candidate with the highest letter entropy
///
/// Uses [`entropy_score`], which looks only at letter frequencies. In practice
/// it picks much the same words as [`MaxLikelihoodSolver`]; it does not
/// measure how a guess would split the candidates.
#[derive(Clone)]
pub struct MaxEntropySolver {
    filter: CandidateFilter,
}

impl MaxEntropySolver {
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            filter: CandidateFilter::new(corpus),
        }
    }
}

impl Solver for MaxEntropySolver {
    fn choose_guess(&mut self) -> Result<Word, WordleError> {
        let stats = self.filter.statistics();
        first_max_by_score(self.filter.surviving(), |word| entropy_score(stats, word))
            .map(|(word, _)| *word)
            .ok_or(WordleError::EmptyCandidateSet)
    }

    fn observe_feedback(&mut self, clue: &Clue, guess: &Word) {
        self.filter.narrow(clue, guess);
    }

    fn candidates(&self) -> &CandidateFilter {
        &self.filter
    }
}

/// Enum wrapper for all solver types
///
/// Allows runtime selection of a solver while keeping static dispatch.
#[derive(Clone)]
pub enum SolverType {
    /// Uniform random pick from the candidates
    Random(RandomSolver),
    /// Highest letter-frequency probability
    MaxLikelihood(MaxLikelihoodSolver),
    /// Highest letter entropy
    MaxEntropy(MaxEntropySolver),
}

impl SolverType {
    /// Names accepted by [`SolverType::from_name`]
    pub const NAMES: [&'static str; 3] = ["random", "likelihood", "entropy"];

    /// Create a fresh solver over `corpus` from its name
    ///
    /// Supported names: "random", "likelihood" (or "max-likelihood"),
    /// "entropy" (or "max-entropy"). Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str, corpus: Corpus) -> Option<Self> {
        match name {
            "random" => Some(Self::Random(RandomSolver::new(corpus))),
            "likelihood" | "max-likelihood" => {
                Some(Self::MaxLikelihood(MaxLikelihoodSolver::new(corpus)))
            }
            "entropy" | "max-entropy" => Some(Self::MaxEntropy(MaxEntropySolver::new(corpus))),
            _ => None,
        }
    }
}

impl Solver for SolverType {
    fn choose_guess(&mut self) -> Result<Word, WordleError> {
        match self {
            Self::Random(s) => s.choose_guess(),
            Self::MaxLikelihood(s) => s.choose_guess(),
            Self::MaxEntropy(s) => s.choose_guess(),
        }
    }

    fn observe_feedback(&mut self, clue: &Clue, guess: &Word) {
        match self {
            Self::Random(s) => s.observe_feedback(clue, guess),
            Self::MaxLikelihood(s) => s.observe_feedback(clue, guess),
            Self::MaxEntropy(s) => s.observe_feedback(clue, guess),
        }
    }

    fn candidates(&self) -> &CandidateFilter {
        match self {
            Self::Random(s) => s.candidates(),
            Self::MaxLikelihood(s) => s.candidates(),
            Self::MaxEntropy(s) => s.candidates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn setup_corpus() -> Corpus {
        Corpus::from_strs(&["apple", "apply", "angle"])
    }

    fn all_solvers(corpus: &Corpus) -> Vec<SolverType> {
        SolverType::NAMES
            .iter()
            .map(|name| SolverType::from_name(name, corpus.clone()).unwrap())
            .collect()
    }

    #[test]
    fn likelihood_picks_most_probable_word() {
        let mut solver = MaxLikelihoodSolver::new(setup_corpus());
        assert_eq!(solver.choose_guess(), Ok(word("apple")));
    }

    #[test]
    fn entropy_picks_highest_letter_entropy() {
        let mut solver = MaxEntropySolver::new(setup_corpus());
        assert_eq!(solver.choose_guess(), Ok(word("apple")));
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let corpus = Corpus::from_strs(&["tears", "stare", "rates"]);

        assert_eq!(
            MaxLikelihoodSolver::new(corpus.clone()).choose_guess(),
            Ok(word("tears"))
        );
        assert_eq!(MaxEntropySolver::new(corpus).choose_guess(), Ok(word("tears")));
    }

    #[test]
    fn single_candidate_is_returned() {
        let corpus = Corpus::from_strs(&["crane"]);
        for mut solver in all_solvers(&corpus) {
            assert_eq!(solver.choose_guess(), Ok(word("crane")));
        }
    }

    #[test]
    fn single_survivor_after_feedback_is_returned() {
        let corpus = setup_corpus();
        let guess = word("apply");
        let clue = Clue::compute(&guess, &word("apple"));

        for mut solver in all_solvers(&corpus) {
            solver.observe_feedback(&clue, &guess);
            assert_eq!(solver.candidates().len(), 1);
            assert_eq!(solver.choose_guess(), Ok(word("apple")));
        }
    }

    #[test]
    fn empty_candidates_fail_explicitly() {
        let corpus = setup_corpus();
        for mut solver in all_solvers(&corpus) {
            solver.observe_feedback(&Clue::SOLVED, &word("zzzzz"));
            assert_eq!(solver.choose_guess(), Err(WordleError::EmptyCandidateSet));
        }

        let empty = Corpus::from_strs::<&str>(&[]);
        assert_eq!(
            RandomSolver::new(empty).choose_guess(),
            Err(WordleError::EmptyCandidateSet)
        );
    }

    #[test]
    fn random_picks_from_candidates() {
        let corpus = Corpus::from_strs(&["crane", "slate", "irate", "crate", "grate"]);
        let mut solver = RandomSolver::seeded(corpus.clone(), 7);

        for _ in 0..20 {
            let guess = solver.choose_guess().unwrap();
            assert!(corpus.contains(&guess));
        }
    }

    #[test]
    fn random_seeded_repeats() {
        let corpus = Corpus::from_strs(&["crane", "slate", "irate", "crate", "grate"]);
        let mut a = RandomSolver::seeded(corpus.clone(), 42);
        let mut b = RandomSolver::seeded(corpus, 42);

        for _ in 0..10 {
            assert_eq!(a.choose_guess(), b.choose_guess());
        }
    }

    #[test]
    fn from_name_aliases_and_unknown() {
        let corpus = setup_corpus();
        assert!(matches!(
            SolverType::from_name("max-likelihood", corpus.clone()),
            Some(SolverType::MaxLikelihood(_))
        ));
        assert!(matches!(
            SolverType::from_name("max-entropy", corpus.clone()),
            Some(SolverType::MaxEntropy(_))
        ));
        assert!(matches!(
            SolverType::from_name("random", corpus.clone()),
            Some(SolverType::Random(_))
        ));
        assert!(SolverType::from_name("oracle", corpus).is_none());
    }
}
