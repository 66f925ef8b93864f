//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and the live candidate pool, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against the live candidates
///
/// Returns the expected information gain in bits, always in `[0, log₂(n)]`.
/// Candidates are treated as equally likely targets; each is scored as
/// `Pattern::calculate(guess, candidate)`.
///
/// An empty pool has no meaningful entropy; callers never pass one, and it
/// yields 0.0 rather than NaN.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_entropy::core::Word;
/// use wordle_entropy::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);

    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Shannon entropy of a pattern histogram, in bits
///
/// Counts are turned into probabilities over their total. Zero counts are
/// ignored and an empty histogram yields 0.0. One pattern holding every
/// candidate is certain and yields +0.0; `k` equally filled patterns yield
/// log₂(k).
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_entropy::core::Pattern;
/// use wordle_entropy::solver::entropy::shannon_entropy;
///
/// let histogram: FxHashMap<Pattern, usize> = (0..8).map(|v| (Pattern::new(v), 3)).collect();
///
/// assert!((shannon_entropy(&histogram) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            // p * log₂(1/p) keeps a certain outcome at +0.0 rather than -0.0
            p * p.recip().log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size,
/// for reporting alongside the chosen guess.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    }
}
