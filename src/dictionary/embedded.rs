//! Embedded dictionary
//!
//! A word-frequency sample compiled into the binary, used when no dictionary
//! file is given.

use super::{Dictionary, DictionaryError, FrequencyKind, loader::parse_json};
use crate::core::PopularityTransform;

/// Raw frequencies, JSON object of word to relative usage frequency
pub const EMBEDDED_FREQUENCIES: &str = include_str!("../../data/word_freq.json");

/// Parse the embedded dictionary with `transform`
///
/// # Errors
///
/// Only fails if the embedded data is corrupt.
pub fn embedded_dictionary(transform: &PopularityTransform) -> Result<Dictionary, DictionaryError> {
    parse_json(EMBEDDED_FREQUENCIES, FrequencyKind::Raw, transform)
}
