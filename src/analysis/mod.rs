//! Information analysis of guesses
//!
//! Measures how a guess splits the possible answers by the score each answer
//! would produce. This never chooses a guess for the player.

mod partition;

pub use partition::{ScoreMetrics, calculate_metrics, group_by_score, score_distribution, shannon_entropy};
