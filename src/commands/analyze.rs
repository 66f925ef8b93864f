//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word, and ranks
//! opening guesses over the whole vocabulary.

use crate::core::Word;
use crate::solver::Solver;
use crate::solver::entropy::{ScoredGuess, calculate_metrics, rank_guesses};
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub popularity: f64,
    /// `entropy + weight × popularity` with the solver's weight
    pub score: f64,
    pub total_candidates: usize,
}

/// Analyze `word` as an opening guess against the full vocabulary
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the vocabulary
pub fn analyze_word(word: &str, solver: &Solver) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    if !solver.vocabulary().contains(&word) {
        bail!("'{word}' is not in the dictionary");
    }

    let candidates = solver.vocabulary();
    let metrics = calculate_metrics(&word, candidates);
    let popularity = solver.popularity().score(&word);

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        popularity,
        score: metrics.entropy + solver.popularity_weight() * popularity,
        total_candidates: candidates.len(),
    })
}

/// Rank every vocabulary word as an opening guess, best `top` first
#[must_use]
pub fn rank_openers(solver: &Solver, top: usize) -> Vec<ScoredGuess> {
    let vocabulary = solver.vocabulary();
    rank_guesses(
        vocabulary,
        vocabulary,
        solver.popularity(),
        solver.popularity_weight(),
        top,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PopularityModel;
    use crate::solver::SolverConfig;

    fn solver(weight: f64) -> Solver {
        let vocabulary: Vec<Word> = [
            "crane", "slate", "irate", "crate", "grate", "trace", "raise", "eerie", "merit",
            "speed", "erase",
        ]
        .iter()
        .map(|w| Word::new(w).unwrap())
        .collect();
        let popularity =
            PopularityModel::from_scores([(Word::new("crane").unwrap(), 0.5)]).unwrap();
        let config = SolverConfig::new()
            .with_opening(Word::new("crane").unwrap())
            .with_popularity_weight(weight)
            .unwrap();
        Solver::new(vocabulary, popularity, &config).unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("crane", &solver(2.0)).unwrap();

        assert_eq!(result.word.text(), "crane");
        assert!(result.entropy > 0.0);
        assert!(result.entropy <= 11f64.log2());
        assert!(result.expected_reduction >= 1.0);
        assert!(result.expected_remaining <= 11.0);
        assert!(result.max_partition >= 1);
        assert_eq!(result.total_candidates, 11);
        assert!((result.score - (result.entropy + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn analyze_unknown_or_invalid_word() {
        assert!(analyze_word("zzzzz", &solver(1.0)).is_err());
        assert!(analyze_word("cran", &solver(1.0)).is_err());
    }

    #[test]
    fn openers_are_ranked_best_first() {
        let ranked = rank_openers(&solver(0.0), 5);

        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let analyzed = analyze_word(ranked[0].word.text(), &solver(0.0)).unwrap();
        assert!((analyzed.entropy - ranked[0].entropy).abs() < 1e-12);
    }
}
