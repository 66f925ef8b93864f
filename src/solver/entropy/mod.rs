//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions and
//! the selector that combines it with the popularity prior.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{ScoredGuess, rank_guesses, select_best_guess};
