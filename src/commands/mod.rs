//! Command implementations

pub mod analyze;
pub mod score;
pub mod session;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess};
pub use score::{ScoreResult, score_codes};
pub use session::{Session, SessionConfig, Statistics};
pub use simple::run_simple;
