//! Word popularity prior
//!
//! Maps every vocabulary word to a score in [0, 1]. Raw usage frequencies are
//! squashed with a logistic curve over their natural logarithm, so the popularity
//! term nudges the guess selector toward common words without swamping the entropy
//! term for very frequent ones.

use super::word::Word;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Default shift applied to `ln(frequency)` before the logistic
///
/// Puts the midpoint of the curve at a relative frequency of roughly 1e-7.
pub const DEFAULT_POPULARITY_OFFSET: f64 = 16.0;

/// Logistic function
#[inline]
#[must_use]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Transform from raw frequency to popularity score
///
/// `score = sigmoid(ln(frequency) + offset)`; a frequency of zero scores 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularityTransform {
    pub offset: f64,
}

impl PopularityTransform {
    #[must_use]
    pub const fn new(offset: f64) -> Self {
        Self { offset }
    }

    /// Score a raw, non-negative frequency
    #[must_use]
    pub fn apply(&self, frequency: f64) -> f64 {
        if frequency <= 0.0 {
            return 0.0;
        }
        sigmoid(frequency.ln() + self.offset)
    }
}

impl Default for PopularityTransform {
    fn default() -> Self {
        Self::new(DEFAULT_POPULARITY_OFFSET)
    }
}

/// Error type for popularity inputs that cannot be scored
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopularityError {
    #[error("frequency for '{word}' must be finite and non-negative, got {value}")]
    InvalidFrequency { word: Word, value: f64 },
    #[error("score for '{word}' must lie in [0, 1], got {value}")]
    ScoreOutOfRange { word: Word, value: f64 },
}

/// Popularity score per word
///
/// Read-only once built; words without an entry score 0.
#[derive(Debug, Clone, Default)]
pub struct PopularityModel {
    scores: FxHashMap<Word, f64>,
}

impl PopularityModel {
    /// Build from raw frequencies, applying `transform` to each
    ///
    /// # Errors
    /// Returns `PopularityError::InvalidFrequency` for negative or non-finite input.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{PopularityModel, PopularityTransform, Word};
    ///
    /// let crane = Word::new("crane").unwrap();
    /// let model = PopularityModel::from_raw([(crane, 1e-5)], &PopularityTransform::default())
    ///     .unwrap();
    ///
    /// assert!(model.score(&crane) > 0.5);
    /// assert_eq!(model.score(&Word::new("xylyl").unwrap()), 0.0);
    /// ```
    pub fn from_raw<I>(frequencies: I, transform: &PopularityTransform) -> Result<Self, PopularityError>
    where
        I: IntoIterator<Item = (Word, f64)>,
    {
        let scores = frequencies
            .into_iter()
            .map(|(word, value)| {
                if value.is_finite() && value >= 0.0 {
                    Ok((word, transform.apply(value)))
                } else {
                    Err(PopularityError::InvalidFrequency { word, value })
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { scores })
    }

    /// Build from scores that are already in [0, 1]
    ///
    /// # Errors
    /// Returns `PopularityError::ScoreOutOfRange` for anything outside [0, 1].
    pub fn from_scores<I>(scores: I) -> Result<Self, PopularityError>
    where
        I: IntoIterator<Item = (Word, f64)>,
    {
        let scores = scores
            .into_iter()
            .map(|(word, value)| {
                if (0.0..=1.0).contains(&value) {
                    Ok((word, value))
                } else {
                    Err(PopularityError::ScoreOutOfRange { word, value })
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { scores })
    }

    /// Popularity of `word`, 0 when unknown
    #[inline]
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.scores.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn sigmoid_midpoint_and_limits() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(40.0) > 0.999_999);
        assert!(sigmoid(-40.0) < 1e-6);
    }

    #[test]
    fn transform_zero_frequency_scores_zero() {
        let transform = PopularityTransform::default();
        assert!(transform.apply(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn transform_midpoint_follows_offset() {
        let transform = PopularityTransform::new(3.0);
        let midpoint = (-3.0f64).exp();
        assert!((transform.apply(midpoint) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn transform_is_monotonic_and_bounded() {
        let transform = PopularityTransform::default();
        let frequencies = [1e-12, 1e-9, 1e-7, 1e-5, 1e-3, 1.0, 1e6];
        let scores: Vec<f64> = frequencies.iter().map(|&f| transform.apply(f)).collect();

        for pair in scores.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn model_from_raw_scores_every_word() {
        let model = PopularityModel::from_raw(
            [(word("crane"), 1e-4), (word("xylyl"), 1e-10)],
            &PopularityTransform::default(),
        )
        .unwrap();

        assert_eq!(model.len(), 2);
        assert!(model.score(&word("crane")) > model.score(&word("xylyl")));
    }

    #[test]
    fn model_from_raw_rejects_negative_frequency() {
        let result = PopularityModel::from_raw(
            [(word("crane"), -1.0)],
            &PopularityTransform::default(),
        );
        assert!(matches!(
            result,
            Err(PopularityError::InvalidFrequency { .. })
        ));

        let result = PopularityModel::from_raw(
            [(word("crane"), f64::NAN)],
            &PopularityTransform::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn model_from_scores_keeps_values() {
        let model = PopularityModel::from_scores([(word("crane"), 0.25)]).unwrap();
        assert!((model.score(&word("crane")) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn model_from_scores_rejects_out_of_range() {
        let result = PopularityModel::from_scores([(word("crane"), 1.5)]);
        assert!(matches!(
            result,
            Err(PopularityError::ScoreOutOfRange { .. })
        ));
    }

    #[test]
    fn unknown_word_scores_zero() {
        let model = PopularityModel::default();
        assert!(model.is_empty());
        assert!(!model.contains(&word("crane")));
        assert!(model.score(&word("crane")).abs() < f64::EPSILON);
    }
}
