//! Core domain types for Wordle
//!
//! Words, clues and the shared corpus. Everything here is pure and immutable
//! once built.

mod clue;
mod corpus;
mod word;

pub use clue::{Clue, Mark, ParseClueError};
pub use corpus::Corpus;
pub use word::{WORD_LEN, Word, WordError};
