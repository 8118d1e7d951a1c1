//! Mastermind
//!
//! The code-breaking game in the terminal: a hidden four-peg code, ten turns,
//! and exact / color-only feedback that handles repeated colors correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, GameState, Outcome};
//! use mastermind::output::board::render;
//!
//! let answer: Code = "1123".parse().unwrap();
//! let mut game = GameState::with_answer(answer);
//!
//! let score = game.submit("1111".parse::<Code>().unwrap().pegs()).unwrap();
//! assert_eq!(score.exact(), 2);
//! assert_eq!(game.outcome(), Outcome::Unknown);
//!
//! print!("{}", render(&game));
//! ```

// Core domain types
pub mod core;

// Score partition analysis
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
