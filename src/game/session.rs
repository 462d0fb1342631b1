//! A single Wordle round
//!
//! The session owns the hidden solution and the guess history. Guesses come
//! either from the caller one at a time or from a [`Solver`] via autoplay.

use crate::WordleError;
use crate::core::{Clue, Corpus, WORD_LEN, Word};
use crate::solver::Solver;

/// Turns allowed in autoplay before the session gives up
pub const DEFAULT_MAX_TURNS: usize = 1000;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Solved,
    TimedOut,
}

/// How an autoplayed session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { turns: usize },
    TimedOut { turns: usize },
}

impl Outcome {
    #[must_use]
    pub const fn turns(self) -> usize {
        match self {
            Self::Solved { turns } | Self::TimedOut { turns } => turns,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One round of play against a fixed solution
#[derive(Debug, Clone)]
pub struct GameSession {
    corpus: Corpus,
    solution: Word,
    max_turns: usize,
    turn: usize,
    state: GameState,
    guesses: Vec<Word>,
    clues: Vec<Clue>,
}

impl GameSession {
    /// Create a session with the default turn cap
    #[must_use]
    pub const fn new(corpus: Corpus, solution: Word) -> Self {
        Self::with_max_turns(corpus, solution, DEFAULT_MAX_TURNS)
    }

    /// Create a session whose autoplay gives up after `max_turns` guesses
    #[must_use]
    pub const fn with_max_turns(corpus: Corpus, solution: Word, max_turns: usize) -> Self {
        Self {
            corpus,
            solution,
            max_turns,
            turn: 0,
            state: GameState::InProgress,
            guesses: Vec::new(),
            clues: Vec::new(),
        }
    }

    /// Play a guess given as text
    ///
    /// # Errors
    /// - `InvalidGuessLength` if the guess is not 5 characters long
    /// - `GuessNotInCorpus` if it is not a corpus word
    /// - `GameOver` if the session has already ended
    ///
    /// A rejected guess leaves the session unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::WordleError;
    /// use wordle_sim::core::{Corpus, Word};
    /// use wordle_sim::game::{GameSession, GameState};
    ///
    /// let corpus = Corpus::from_strs(&["apple", "apply", "angle"]);
    /// let mut session = GameSession::new(corpus, Word::new("apple").unwrap());
    ///
    /// assert_eq!(session.submit_guess("app"), Err(WordleError::InvalidGuessLength(3)));
    /// assert!(!session.submit_guess("apply").unwrap().is_solved());
    /// assert!(session.submit_guess("apple").unwrap().is_solved());
    /// assert_eq!(session.state(), GameState::Solved);
    /// assert_eq!(session.turn(), 2);
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> Result<Clue, WordleError> {
        let len = guess.chars().count();
        if len != WORD_LEN {
            return Err(WordleError::InvalidGuessLength(len));
        }
        let word =
            Word::new(guess).map_err(|_| WordleError::GuessNotInCorpus(guess.to_string()))?;
        self.submit_word(word)
    }

    /// Play an already parsed word
    ///
    /// # Errors
    /// - `GuessNotInCorpus` if the word is not in the corpus
    /// - `GameOver` if the session has already ended
    pub fn submit_word(&mut self, guess: Word) -> Result<Clue, WordleError> {
        if self.state != GameState::InProgress {
            return Err(WordleError::GameOver);
        }
        if !self.corpus.contains(&guess) {
            return Err(WordleError::GuessNotInCorpus(guess.to_string()));
        }

        self.turn += 1;
        let clue = Clue::compute(&guess, &self.solution);
        self.guesses.push(guess);
        self.clues.push(clue);
        if clue.is_solved() {
            self.state = GameState::Solved;
        }
        Ok(clue)
    }

    /// Let `solver` play until it finds the solution or runs out of turns
    ///
    /// Running past the turn cap is not an error: the session moves to
    /// `TimedOut` and the outcome reports how many turns were played.
    ///
    /// # Errors
    /// Propagates solver failures such as `EmptyCandidateSet`, and `GameOver`
    /// if the session already timed out. An already solved session returns
    /// its outcome straight away.
    pub fn autoplay<S: Solver + ?Sized>(&mut self, solver: &mut S) -> Result<Outcome, WordleError> {
        loop {
            match self.state {
                GameState::Solved => return Ok(Outcome::Solved { turns: self.turn }),
                GameState::TimedOut => return Err(WordleError::GameOver),
                GameState::InProgress => {}
            }

            let guess = solver.choose_guess()?;
            let clue = self.submit_word(guess)?;
            solver.observe_feedback(&clue, &guess);

            if self.state == GameState::InProgress && self.turn > self.max_turns {
                self.state = GameState::TimedOut;
                return Ok(Outcome::TimedOut { turns: self.turn });
            }
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Guesses paired with the clue each one received
    pub fn history(&self) -> impl Iterator<Item = (&Word, &Clue)> {
        self.guesses.iter().zip(&self.clues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Absent, Hit};
    use crate::solver::{
        CandidateFilter, MaxEntropySolver, MaxLikelihoodSolver, RandomSolver, SolverType,
    };

    const WORDS: &[&str] = &[
        "apple", "apply", "angle", "crane", "slate", "irate", "crate", "grate", "trace", "react",
        "speed", "erase", "eerie", "llama", "robot", "floor", "world", "lolly", "tears", "stare",
    ];

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(solution: &str) -> GameSession {
        GameSession::new(Corpus::from_strs(WORDS), word(solution))
    }

    /// Keeps guessing the same word and never learns
    struct StubbornSolver {
        guess: Word,
        filter: CandidateFilter,
    }

    impl Solver for StubbornSolver {
        fn choose_guess(&mut self) -> Result<Word, WordleError> {
            Ok(self.guess)
        }

        fn observe_feedback(&mut self, _clue: &Clue, _guess: &Word) {}

        fn candidates(&self) -> &CandidateFilter {
            &self.filter
        }
    }

    #[test]
    fn new_session_in_progress() {
        let session = session("apple");
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.turn(), 0);
        assert!(session.guesses().is_empty());
        assert!(session.clues().is_empty());
        assert_eq!(session.max_turns(), DEFAULT_MAX_TURNS);
    }

    #[test]
    fn submit_guess_records_history() {
        let mut session = session("apple");

        let clue = session.submit_guess("apply").unwrap();
        assert_eq!(clue.marks(), &[Hit, Hit, Hit, Hit, Absent]);
        assert_eq!(session.turn(), 1);
        assert_eq!(session.guesses(), &[word("apply")]);
        assert_eq!(session.clues(), &[clue]);
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn submit_guess_rejects_wrong_length() {
        let mut session = session("apple");

        assert_eq!(
            session.submit_guess("apples"),
            Err(WordleError::InvalidGuessLength(6))
        );
        assert_eq!(session.submit_guess(""), Err(WordleError::InvalidGuessLength(0)));
        assert_eq!(session.turn(), 0);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn submit_guess_rejects_unknown_word() {
        let mut session = session("apple");

        assert_eq!(
            session.submit_guess("zzzzz"),
            Err(WordleError::GuessNotInCorpus("zzzzz".to_string()))
        );
        assert_eq!(
            session.submit_guess("APPLE"),
            Err(WordleError::GuessNotInCorpus("APPLE".to_string()))
        );
        assert_eq!(
            session.submit_guess("ap1le"),
            Err(WordleError::GuessNotInCorpus("ap1le".to_string()))
        );
        assert_eq!(session.turn(), 0);
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn solved_session_rejects_more_guesses() {
        let mut session = session("apple");

        assert!(session.submit_guess("apple").unwrap().is_solved());
        assert!(session.is_solved());
        assert_eq!(session.submit_guess("apply"), Err(WordleError::GameOver));
        assert_eq!(session.turn(), 1);
    }

    #[test]
    fn autoplay_solves_every_word_with_every_solver() {
        let corpus = Corpus::from_strs(WORDS);
        for solution in corpus.iter() {
            for name in SolverType::NAMES {
                let mut solver = SolverType::from_name(name, corpus.clone()).unwrap();
                let mut session = GameSession::new(corpus.clone(), *solution);

                let outcome = session.autoplay(&mut solver).unwrap();
                assert!(outcome.is_solved(), "{name} failed on {solution}");
                assert!(outcome.turns() <= corpus.len());
                assert_eq!(outcome.turns(), session.turn());
                assert_eq!(session.guesses().last(), Some(solution));
            }
        }
    }

    #[test]
    fn autoplay_apple_with_likelihood() {
        let corpus = Corpus::from_strs(&["apple", "apply", "angle"]);
        let mut session = GameSession::new(corpus.clone(), word("apply"));
        let mut solver = MaxLikelihoodSolver::new(corpus);

        // "apple" is the most probable first guess, then only "apply" fits
        assert_eq!(session.autoplay(&mut solver), Ok(Outcome::Solved { turns: 2 }));
        assert_eq!(session.guesses(), &[word("apple"), word("apply")]);
    }

    #[test]
    fn autoplay_entropy_and_random_solve() {
        let corpus = Corpus::from_strs(WORDS);

        let mut session = GameSession::new(corpus.clone(), word("floor"));
        let outcome = session.autoplay(&mut MaxEntropySolver::new(corpus.clone())).unwrap();
        assert!(outcome.is_solved());

        let mut session = GameSession::new(corpus.clone(), word("floor"));
        let outcome = session.autoplay(&mut RandomSolver::seeded(corpus, 3)).unwrap();
        assert!(outcome.is_solved());
    }

    #[test]
    fn autoplay_times_out_past_cap() {
        let corpus = Corpus::from_strs(WORDS);
        let mut session = GameSession::with_max_turns(corpus.clone(), word("apple"), 10);
        let mut solver = StubbornSolver {
            guess: word("crane"),
            filter: CandidateFilter::new(corpus),
        };

        assert_eq!(session.autoplay(&mut solver), Ok(Outcome::TimedOut { turns: 11 }));
        assert_eq!(session.state(), GameState::TimedOut);
        assert_eq!(session.submit_guess("apple"), Err(WordleError::GameOver));
        assert_eq!(session.autoplay(&mut solver), Err(WordleError::GameOver));
    }

    #[test]
    fn autoplay_reports_empty_candidates() {
        // The solution is missing from the corpus, so candidates run dry
        let corpus = Corpus::from_strs(&["apply", "angle"]);
        let mut session = GameSession::new(corpus.clone(), word("apple"));
        let mut solver = MaxLikelihoodSolver::new(corpus);

        assert_eq!(
            session.autoplay(&mut solver),
            Err(WordleError::EmptyCandidateSet)
        );
        assert_eq!(session.state(), GameState::InProgress);
    }

    #[test]
    fn autoplay_on_solved_session_returns_immediately() {
        let corpus = Corpus::from_strs(WORDS);
        let mut session = GameSession::new(corpus.clone(), word("crane"));
        session.submit_guess("crane").unwrap();

        let outcome = session.autoplay(&mut MaxLikelihoodSolver::new(corpus)).unwrap();
        assert_eq!(outcome, Outcome::Solved { turns: 1 });
    }

    #[test]
    fn history_pairs_guesses_and_clues() {
        let mut session = session("crate");
        session.submit_guess("crane").unwrap();
        session.submit_guess("crate").unwrap();

        let pairs: Vec<_> = session
            .history()
            .map(|(g, c)| (g.as_str(), c.to_string()))
            .collect();
        assert_eq!(
            pairs,
            [("crane", "GGG-G".to_string()), ("crate", "GGGGG".to_string())]
        );
    }
}
