//! Word lists for Wordle games
//!
//! The corpus is read from a plain text file supplied at startup.

pub mod loader;

pub use loader::{DEFAULT_CORPUS_PATH, load_from_file};
