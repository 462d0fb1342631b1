//! Wordle solving algorithms
//!
//! Candidate narrowing plus the solvers that pick guesses from what survives.

pub mod filter;
pub mod scoring;
pub mod strategy;

pub use filter::{CandidateFilter, LetterStats};
pub use strategy::{MaxEntropySolver, MaxLikelihoodSolver, RandomSolver, Solver, SolverType};
