//! Game sessions
//!
//! Drives one puzzle at a time, for human players or solvers.

mod session;

pub use session::{DEFAULT_MAX_TURNS, GameSession, GameState, Outcome};
