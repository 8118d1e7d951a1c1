//! Terminal output formatting
//!
//! The plain board renderer plus colored display utilities for the CLI.

pub mod board;
pub mod display;
pub mod formatters;

pub use board::render;
pub use display::{print_analysis_result, print_score_result};
