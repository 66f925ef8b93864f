//! Dictionary: the closed vocabulary plus its popularity prior
//!
//! Built once at startup and shared read-only by every attempt. The caller
//! states whether the numbers in the source are raw frequencies (transformed
//! here) or already scores in [0, 1].

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_FREQUENCIES, embedded_dictionary};

use crate::core::{PopularityError, PopularityModel, PopularityTransform, Word};
use log::warn;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// How to read the number attached to each dictionary word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FrequencyKind {
    /// Non-negative usage frequency, squashed with the popularity transform
    #[default]
    Raw,
    /// Popularity score already in [0, 1]
    Scores,
}

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary is not a JSON object of word to number")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Popularity(#[from] PopularityError),
    #[error("dictionary contains no usable words")]
    Empty,
}

/// Vocabulary in lexicographic order, with a popularity score for every word
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    popularity: PopularityModel,
}

impl Dictionary {
    /// Build from (word, number) entries
    ///
    /// Entries that are not valid words, or whose number is unusable for `kind`,
    /// are skipped with a warning. A word listed twice keeps its last number.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if nothing usable remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::PopularityTransform;
    /// use wordle_entropy::dictionary::{Dictionary, FrequencyKind};
    ///
    /// let dictionary = Dictionary::from_entries(
    ///     [("slate".to_string(), 2e-5), ("crane".to_string(), 1e-5), ("nope".to_string(), 1.0)],
    ///     FrequencyKind::Raw,
    ///     &PopularityTransform::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.words()[0].text(), "crane");
    /// ```
    pub fn from_entries<I, S>(
        entries: I,
        kind: FrequencyKind,
        transform: &PopularityTransform,
    ) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut accepted: BTreeMap<Word, f64> = BTreeMap::new();

        for (text, value) in entries {
            let text = text.as_ref();
            let word = match Word::new(text.trim()) {
                Ok(word) => word,
                Err(e) => {
                    warn!("skipping dictionary entry '{text}': {e}");
                    continue;
                }
            };

            let usable = match kind {
                FrequencyKind::Raw => value.is_finite() && value >= 0.0,
                FrequencyKind::Scores => (0.0..=1.0).contains(&value),
            };
            if !usable {
                warn!("skipping dictionary entry '{text}': unusable value {value}");
                continue;
            }

            accepted.insert(word, value);
        }

        if accepted.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let words: Vec<Word> = accepted.keys().copied().collect();
        let popularity = match kind {
            FrequencyKind::Raw => PopularityModel::from_raw(accepted, transform)?,
            FrequencyKind::Scores => PopularityModel::from_scores(accepted)?,
        };

        Ok(Self { words, popularity })
    }

    /// Vocabulary, sorted
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn popularity(&self) -> &PopularityModel {
        &self.popularity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Split into vocabulary and popularity, e.g. to build a solver
    #[must_use]
    pub fn into_parts(self) -> (Vec<Word>, PopularityModel) {
        (self.words, self.popularity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn words_are_sorted_and_scored() {
        let dictionary = Dictionary::from_entries(
            [("zzzzz", 0.0), ("abcdf", 1e-6), ("abcde", 1e-4)],
            FrequencyKind::Raw,
            &PopularityTransform::default(),
        )
        .unwrap();

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["abcde", "abcdf", "zzzzz"]);

        let popularity = dictionary.popularity();
        assert!(popularity.score(&word("abcde")) > popularity.score(&word("abcdf")));
        assert!(popularity.score(&word("zzzzz")).abs() < f64::EPSILON);
    }

    #[test]
    fn every_word_has_a_popularity_entry() {
        let dictionary = Dictionary::from_entries(
            [("crane", 1e-5), ("slate", 0.0)],
            FrequencyKind::Raw,
            &PopularityTransform::default(),
        )
        .unwrap();

        for w in dictionary.words() {
            assert!(dictionary.popularity().contains(w));
        }
        assert_eq!(dictionary.popularity().len(), dictionary.len());
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let dictionary = Dictionary::from_entries(
            [("crane", 1.0), ("toolong", 1.0), ("cr4ne", 1.0), ("slate", -3.0)],
            FrequencyKind::Raw,
            &PopularityTransform::default(),
        )
        .unwrap();

        assert_eq!(dictionary.words(), &[word("crane")]);
    }

    #[test]
    fn scores_are_taken_as_is() {
        let dictionary = Dictionary::from_entries(
            [("crane", 0.75), ("slate", 1.5)],
            FrequencyKind::Scores,
            &PopularityTransform::default(),
        )
        .unwrap();

        assert_eq!(dictionary.len(), 1);
        assert!((dictionary.popularity().score(&word("crane")) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn case_variants_collapse_to_one_word() {
        let dictionary = Dictionary::from_entries(
            [("Crane", 0.1), ("crane", 0.2)],
            FrequencyKind::Scores,
            &PopularityTransform::default(),
        )
        .unwrap();

        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains(&word("crane")));
    }

    #[test]
    fn nothing_usable_is_an_error() {
        let result = Dictionary::from_entries(
            [("nope", 1.0)],
            FrequencyKind::Raw,
            &PopularityTransform::default(),
        );
        assert!(matches!(result, Err(DictionaryError::Empty)));

        let empty: [(&str, f64); 0] = [];
        let result =
            Dictionary::from_entries(empty, FrequencyKind::Raw, &PopularityTransform::default());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }
}
