//! Candidate pool
//!
//! One fixed array of words with a live-count boundary. Words in front of the
//! boundary are still possible; words behind it have been eliminated. Filtering
//! swaps eliminated words to the back and shrinks the boundary, so no round
//! allocates.

use crate::core::{Pattern, Word};

/// Words still consistent with every feedback seen in the current attempt
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Vec<Word>,
    live: usize,
}

impl CandidatePool {
    /// Create a pool with every word live
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let live = words.len();
        Self { words, live }
    }

    /// The live words
    #[inline]
    #[must_use]
    pub fn live(&self) -> &[Word] {
        &self.words[..self.live]
    }

    /// Number of live words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.live
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total number of words, live or eliminated
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.live().contains(word)
    }

    /// Mark every word live again
    pub fn reset(&mut self) {
        self.live = self.words.len();
    }

    /// Remove `guess` and every word that would not have produced `observed`
    ///
    /// A live word survives only if it differs from `guess` and
    /// `Pattern::calculate(guess, word) == observed`. Returns the number of
    /// words eliminated.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Pattern, Word};
    /// use wordle_entropy::solver::CandidatePool;
    ///
    /// let mut pool = CandidatePool::new(vec![
    ///     Word::new("abcde").unwrap(),
    ///     Word::new("abcdf").unwrap(),
    ///     Word::new("zzzzz").unwrap(),
    /// ]);
    ///
    /// let removed = pool.filter(&Word::new("abcde").unwrap(), "GGGGX".parse().unwrap());
    ///
    /// assert_eq!(removed, 2);
    /// assert_eq!(pool.live(), &[Word::new("abcdf").unwrap()]);
    /// ```
    pub fn filter(&mut self, guess: &Word, observed: Pattern) -> usize {
        let before = self.live;
        let mut i = 0;

        while i < self.live {
            let word = self.words[i];
            if word == *guess || Pattern::calculate(guess, &word) != observed {
                // Re-examine slot i, which now holds the last live word
                self.live -= 1;
                self.words.swap(i, self.live);
            } else {
                i += 1;
            }
        }

        before - self.live
    }
}
