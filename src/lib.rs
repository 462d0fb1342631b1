//! Wordle Simulator
//!
//! Plays Wordle against a fixed word list and evaluates letter-frequency
//! solvers by how many turns they need.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{Corpus, Word};
//! use wordle_sim::game::GameSession;
//! use wordle_sim::solver::MaxLikelihoodSolver;
//!
//! let corpus = Corpus::from_strs(&["apple", "apply", "angle"]);
//! let mut session = GameSession::new(corpus.clone(), Word::new("angle").unwrap());
//! let mut solver = MaxLikelihoodSolver::new(corpus);
//!
//! let outcome = session.autoplay(&mut solver).unwrap();
//! assert!(outcome.is_solved());
//! ```

// Core domain types
pub mod core;

// Errors shared by sessions and solvers
mod error;

// Game sessions
pub mod game;

// Candidate filtering and solvers
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::WordleError;
