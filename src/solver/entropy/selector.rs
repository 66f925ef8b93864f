//! Entropy-based word selection with a popularity prior
//!
//! Scores each guess as `entropy + weight × popularity` and picks the maximum.
//! Equal scores resolve to the lexicographically smallest word.

use super::calculator::calculate_entropy;
use crate::core::{PopularityModel, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A guess with its score breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    /// Expected information over the live pool, in bits
    pub entropy: f64,
    /// Popularity score in [0, 1]
    pub popularity: f64,
    /// `entropy + weight × popularity`
    pub score: f64,
}

impl ScoredGuess {
    /// Score `word` against `pool`
    #[must_use]
    pub fn evaluate(word: Word, pool: &[Word], popularity: &PopularityModel, weight: f64) -> Self {
        let entropy = calculate_entropy(&word, pool);
        let popularity = popularity.score(&word);
        Self {
            word,
            entropy,
            popularity,
            score: entropy + weight * popularity,
        }
    }

    /// Best-first order: higher score, then smaller word
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Select the best guess from the live pool
///
/// Every live word is a candidate guess and is scored against the whole pool.
/// The scan runs in parallel; each worker reads the shared pool and writes only
/// its own result. Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use wordle_entropy::core::{PopularityModel, Word};
/// use wordle_entropy::solver::entropy::select_best_guess;
///
/// let pool = vec![
///     Word::new("abcde").unwrap(),
///     Word::new("abcdf").unwrap(),
///     Word::new("zzzzz").unwrap(),
/// ];
///
/// let best = select_best_guess(&pool, &PopularityModel::default(), 0.0).unwrap();
/// // abcde and abcdf both split the pool three ways; the smaller word wins the tie
/// assert_eq!(best.word.text(), "abcde");
/// ```
#[must_use]
pub fn select_best_guess(
    pool: &[Word],
    popularity: &PopularityModel,
    weight: f64,
) -> Option<ScoredGuess> {
    let scored: Vec<ScoredGuess> = pool
        .par_iter()
        .map(|&word| ScoredGuess::evaluate(word, pool, popularity, weight))
        .collect();

    scored.into_iter().min_by(ScoredGuess::rank)
}

/// Score `guesses` against `pool` and return the best `top`, best first
///
/// Used to choose an opening guess offline over the full vocabulary.
#[must_use]
pub fn rank_guesses(
    guesses: &[Word],
    pool: &[Word],
    popularity: &PopularityModel,
    weight: f64,
    top: usize,
) -> Vec<ScoredGuess> {
    let mut scored: Vec<ScoredGuess> = guesses
        .par_iter()
        .map(|&word| ScoredGuess::evaluate(word, pool, popularity, weight))
        .collect();

    scored.sort_by(ScoredGuess::rank);
    scored.truncate(top);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PopularityTransform;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy_with_zero_weight() {
        let pool = words(&["aaaaa", "crane", "slate", "irate", "trace"]);

        let best = select_best_guess(&pool, &PopularityModel::default(), 0.0).unwrap();

        let expected = pool
            .iter()
            .map(|w| calculate_entropy(w, &pool))
            .fold(f64::MIN, f64::max);
        assert!((best.entropy - expected).abs() < 1e-12);
        assert_ne!(best.word.text(), "aaaaa");
    }

    #[test]
    fn ties_break_to_smallest_word() {
        // Every guess sees a single all-grey pattern from the others except itself,
        // so all three score the same
        let pool = words(&["ccccc", "aaaaa", "bbbbb"]);

        let best = select_best_guess(&pool, &PopularityModel::default(), 0.0).unwrap();
        assert_eq!(best.word.text(), "aaaaa");

        let reversed: Vec<Word> = pool.iter().rev().copied().collect();
        let best = select_best_guess(&reversed, &PopularityModel::default(), 0.0).unwrap();
        assert_eq!(best.word.text(), "aaaaa");
    }

    #[test]
    fn popularity_weight_breaks_entropy_ties() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let popularity = PopularityModel::from_scores([(pool[2], 0.9), (pool[0], 0.1)]).unwrap();

        let best = select_best_guess(&pool, &popularity, 1.0).unwrap();

        assert_eq!(best.word.text(), "ccccc");
        assert!((best.popularity - 0.9).abs() < f64::EPSILON);
        assert!((best.score - (best.entropy + 0.9)).abs() < 1e-12);
    }

    #[test]
    fn heavy_weight_can_override_entropy() {
        let pool = words(&["abcde", "abcdf", "zzzzz", "zzzzy"]);
        let popularity = PopularityModel::from_raw(
            [(pool[2], 1.0), (pool[0], 1e-12)],
            &PopularityTransform::default(),
        )
        .unwrap();

        let pure = select_best_guess(&pool, &popularity, 0.0).unwrap();
        let biased = select_best_guess(&pool, &popularity, 10.0).unwrap();

        assert_eq!(pure.word.text(), "abcde");
        assert_eq!(biased.word.text(), "zzzzz");
    }

    #[test]
    fn single_word_pool_is_selectable() {
        let pool = words(&["abcdf"]);
        let best = select_best_guess(&pool, &PopularityModel::default(), 0.0).unwrap();

        assert_eq!(best.word.text(), "abcdf");
        assert!(best.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_pool_yields_none() {
        assert!(select_best_guess(&[], &PopularityModel::default(), 0.0).is_none());
    }

    #[test]
    fn rank_guesses_orders_best_first() {
        let pool = words(&["crane", "slate", "irate", "trace", "raise"]);
        let guesses = words(&["zzzzz", "crane", "aaaaa", "slate"]);

        let ranked = rank_guesses(&guesses, &pool, &PopularityModel::default(), 0.0, 3);

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(ranked.iter().all(|g| g.word.text() != "zzzzz"));
    }
}
