//! Errors surfaced at the attempt boundary

use crate::core::{Pattern, PatternError, Word};
use thiserror::Error;

/// Anything that ends or refuses a solve attempt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Feedback text that is not an `X`/`Y`/`G` pattern of the right length
    #[error("malformed feedback: {0}")]
    MalformedFeedback(#[from] PatternError),

    /// Filtering left no candidates, so the feedback history contradicts itself
    #[error(
        "no candidate words remain after {guess} scored {feedback}; the feedback history is contradictory"
    )]
    EmptyPool { guess: Word, feedback: Pattern },

    #[error("the vocabulary is empty")]
    EmptyVocabulary,

    #[error("popularity weight must be finite and non-negative, got {0}")]
    InvalidPopularityWeight(f64),

    /// A state machine call that does not fit the current state
    #[error("{0}")]
    OutOfTurn(&'static str),
}
