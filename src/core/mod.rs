//! Core domain types for Wordle
//!
//! Words, feedback patterns (and the oracle that produces them), and the
//! popularity prior. Everything here is pure and shared read-only across attempts.

mod pattern;
mod popularity;
mod word;

pub use pattern::{Pattern, PatternError, Verdict};
pub use popularity::{
    DEFAULT_POPULARITY_OFFSET, PopularityError, PopularityModel, PopularityTransform, sigmoid,
};
pub use word::{WORD_LENGTH, Word, WordError};
