//! Core domain types for Mastermind
//!
//! Pegs, codes, scoring and the per-match game state. Nothing here performs
//! I/O; the driving loops and renderers consume these types read-only.

mod code;
mod game;
mod score;

pub use code::{Code, Color, GuessError, NUM_COLORS, NUM_PEGS};
pub use game::{GameState, MAX_TURNS, Outcome};
pub use score::{MatchKind, Score, ScoringRule};
