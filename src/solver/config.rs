//! Solver configuration

use super::error::SolveError;
use crate::core::Word;

/// Opening guess used by the command-line front end
///
/// A strong opener for English word-frequency dictionaries. The `openers`
/// command ranks alternatives for any other dictionary.
pub const DEFAULT_OPENING_GUESS: &str = "corms";

/// Weight on the popularity term of the guess score
pub const DEFAULT_POPULARITY_WEIGHT: f64 = 1.0;

/// Knobs shared by every attempt a [`Solver`](super::Solver) runs
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    opening: Option<Word>,
    popularity_weight: f64,
}

impl SolverConfig {
    /// Default configuration: opening guess computed from the vocabulary,
    /// popularity weight [`DEFAULT_POPULARITY_WEIGHT`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            opening: None,
            popularity_weight: DEFAULT_POPULARITY_WEIGHT,
        }
    }

    /// Use a fixed opening guess instead of scanning the whole vocabulary
    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = Some(opening);
        self
    }

    /// Set the popularity weight; 0 means pure entropy selection
    ///
    /// # Errors
    /// Returns `SolveError::InvalidPopularityWeight` for negative or non-finite weights.
    pub fn with_popularity_weight(mut self, weight: f64) -> Result<Self, SolveError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(SolveError::InvalidPopularityWeight(weight));
        }
        self.popularity_weight = weight;
        Ok(self)
    }

    #[must_use]
    pub const fn opening(&self) -> Option<Word> {
        self.opening
    }

    #[must_use]
    pub const fn popularity_weight(&self) -> f64 {
        self.popularity_weight
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
