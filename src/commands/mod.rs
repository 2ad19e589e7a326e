//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_words};
pub use simple::{SimpleConfig, run_simple};
