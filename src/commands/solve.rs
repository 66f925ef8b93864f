//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::Word;
use crate::solver::{AttemptResult, Solver};
use anyhow::{Context, Result, bail};

/// Solve `target` with feedback from the pattern oracle
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not in the solver's vocabulary
/// - The attempt ends in a contradiction
pub fn solve_word(target: &str, solver: &Solver) -> Result<AttemptResult> {
    let target_word =
        Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;

    if !solver.vocabulary().contains(&target_word) {
        bail!("'{target_word}' is not in the dictionary");
    }

    solver
        .solve(&target_word)
        .with_context(|| format!("failed to solve '{target_word}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PopularityModel;
    use crate::solver::SolverConfig;

    fn solver() -> Solver {
        let vocabulary = ["crane", "slate", "irate", "crate", "grate", "trace", "abcde"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let config = SolverConfig::new()
            .with_opening(Word::new("slate").unwrap())
            .with_popularity_weight(0.0)
            .unwrap();
        Solver::new(vocabulary, PopularityModel::default(), &config).unwrap()
    }

    #[test]
    fn solve_word_succeeds() {
        let result = solve_word("grate", &solver()).unwrap();

        assert_eq!(result.target.text(), "grate");
        assert_eq!(result.rounds.len(), result.guesses);
        assert!(result.rounds.last().unwrap().feedback.is_perfect());
    }

    #[test]
    fn solve_records_shrinking_pool() {
        let result = solve_word("trace", &solver()).unwrap();

        for pair in result.rounds.windows(2) {
            assert!(pair[1].report.pool_size < pair[0].report.pool_size);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        assert!(solve_word("toolong", &solver()).is_err());
        assert!(solve_word("zzzzz", &solver()).is_err()); // Not in vocabulary
    }

    #[test]
    fn solve_uppercase_target() {
        let result = solve_word("CRANE", &solver()).unwrap();
        assert_eq!(result.target.text(), "crane");
    }
}
