//! Dictionary loading utilities
//!
//! Two on-disk formats are understood:
//! - JSON: an object mapping each word to a number, `{"crane": 1.2e-5, ...}`
//! - Text: one word per line, optionally followed by whitespace and a number;
//!   blank lines and lines starting with `#` are ignored

use super::{Dictionary, DictionaryError, FrequencyKind};
use crate::core::{PopularityTransform, Word};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load a dictionary file, picking the format from the extension
///
/// Files ending in `.json` are parsed as JSON; anything else as text.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON (for `.json`),
/// or contains no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_entropy::core::PopularityTransform;
/// use wordle_entropy::dictionary::{FrequencyKind, loader::load_from_file};
///
/// let dictionary =
///     load_from_file("data/word_freq.json", FrequencyKind::Raw, &PopularityTransform::default())
///         .unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    kind: FrequencyKind,
    transform: &PopularityTransform,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let dictionary = if is_json {
        parse_json(&content, kind, transform)?
    } else {
        parse_text(&content, kind, transform)?
    };

    info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Parse a JSON object of word to number
///
/// # Errors
///
/// Returns `DictionaryError::Json` if the content is not such an object, or
/// `DictionaryError::Empty` when no word is usable.
pub fn parse_json(
    content: &str,
    kind: FrequencyKind,
    transform: &PopularityTransform,
) -> Result<Dictionary, DictionaryError> {
    let entries: BTreeMap<String, f64> = serde_json::from_str(content)?;
    Dictionary::from_entries(entries, kind, transform)
}

/// Parse the line-oriented text format
///
/// A word without a number gets 0, which is the lowest popularity either way.
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if no line holds a usable word.
pub fn parse_text(
    content: &str,
    kind: FrequencyKind,
    transform: &PopularityTransform,
) -> Result<Dictionary, DictionaryError> {
    let entries = content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let mut fields = trimmed.split_whitespace();
            let word = fields.next()?;
            let value = match fields.next() {
                None => 0.0,
                Some(raw) => match raw.parse::<f64>() {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("line {}: bad number '{raw}' for '{word}': {e}", idx + 1);
                        return None;
                    }
                },
            };
            Some((word, value))
        });

    Dictionary::from_entries(entries, kind, transform)
}

/// Load a plain list of words, one per line, e.g. secrets for batch scoring
///
/// Invalid lines are skipped with a warning; anything after the first
/// whitespace-separated field is ignored.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|field| !field.starts_with('#'))
        .filter_map(|field| match Word::new(field) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("skipping word list entry '{field}': {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> PopularityTransform {
        PopularityTransform::default()
    }

    #[test]
    fn json_object_is_loaded() {
        let content = r#"{"slate": 2.5e-5, "crane": 1.0e-5, "zzzzz": 0}"#;
        let dictionary = parse_json(content, FrequencyKind::Raw, &transform()).unwrap();

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "zzzzz"]);
    }

    #[test]
    fn json_that_is_not_a_map_is_rejected() {
        let result = parse_json(r#"["crane", "slate"]"#, FrequencyKind::Raw, &transform());
        assert!(matches!(result, Err(DictionaryError::Json(_))));

        let result = parse_json("{not json", FrequencyKind::Raw, &transform());
        assert!(matches!(result, Err(DictionaryError::Json(_))));
    }

    #[test]
    fn json_with_no_usable_words_is_empty() {
        let result = parse_json(r#"{"toolong": 1.0}"#, FrequencyKind::Raw, &transform());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn text_lines_with_and_without_numbers() {
        let content = "# sample\ncrane 0.9\n\nslate\n  irate   0.1  \n";
        let dictionary = parse_text(content, FrequencyKind::Scores, &transform()).unwrap();

        assert_eq!(dictionary.len(), 3);
        let popularity = dictionary.popularity();
        assert!((popularity.score(&Word::new("crane").unwrap()) - 0.9).abs() < f64::EPSILON);
        assert!(popularity.score(&Word::new("slate").unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn text_lines_with_bad_numbers_are_skipped() {
        let content = "crane abc\nslate 0.5\n";
        let dictionary = parse_text(content, FrequencyKind::Scores, &transform()).unwrap();
        assert_eq!(dictionary.words(), &[Word::new("slate").unwrap()]);
    }

    #[test]
    fn word_list_skips_invalid_lines() {
        let words = words_from_lines("crane\n\n# comment\ntoolong\nSLATE extra\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_from_file(
            "definitely/not/here.json",
            FrequencyKind::Raw,
            &transform(),
        );
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
        assert!(matches!(
            load_word_list("definitely/not/here.txt"),
            Err(DictionaryError::Io { .. })
        ));
    }
}
