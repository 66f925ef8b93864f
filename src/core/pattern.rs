//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Grey (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. Its text form is one character
//! per position: `X` for grey, `Y` for yellow, `G` for green.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter absent (or every copy already accounted for)
    Grey,
    /// Letter present, wrong position
    Yellow,
    /// Letter present, correct position
    Green,
}

impl Verdict {
    const fn digit(self) -> u8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Grey,
        }
    }

    /// Character used in the `X`/`Y`/`G` text encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Grey => 'X',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse one character of the `X`/`Y`/`G` encoding (case-insensitive)
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Self::Grey),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            _ => None,
        }
    }
}

/// Error type for feedback text that is not a valid pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("feedback must be exactly 5 characters, got {0}")]
    InvalidLength(usize),
    #[error("invalid verdict '{symbol}' at position {position}; use X (grey), Y (yellow) or G (green)")]
    InvalidVerdict { symbol: char, position: usize },
}

/// Feedback pattern for a Wordle guess
///
/// Represents the coloured feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Total number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Pack per-position verdicts into a pattern
    #[must_use]
    pub fn from_verdicts(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for verdict in verdicts {
            pattern += verdict.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Unpack the pattern into per-position verdicts
    #[must_use]
    pub fn verdicts(self) -> [Verdict; WORD_LENGTH] {
        let mut result = [Verdict::Grey; WORD_LENGTH];
        let mut val = self.0;
        for slot in &mut result {
            *slot = Verdict::from_digit(val % 3);
            val /= 3;
        }
        result
    }

    /// Verdict at a single position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[must_use]
    pub fn verdict_at(self, position: usize) -> Verdict {
        self.verdicts()[position]
    }

    /// Calculate the pattern when `guess` is played and `target` is the hidden word
    ///
    /// Implements Wordle's duplicate-letter rules by consuming letters of the target
    /// as they are matched, so a letter is never credited more often than it occurs.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches green and consume them from a scratch copy
    /// 2. Second pass: for every non-green position, consume the first remaining
    ///    occurrence of the letter and mark it yellow; otherwise it stays grey
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::core::{Word, Pattern};
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let target = Word::new("merit").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "XGGGX");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        // Never a letter, so a consumed slot cannot match again.
        const CONSUMED: u8 = 0;

        let mut remaining = *target.chars();
        let mut verdicts = [Verdict::Grey; WORD_LENGTH];

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if guess.char_at(i) == remaining[i] {
                *verdict = Verdict::Green;
                remaining[i] = CONSUMED;
            }
        }

        for (i, verdict) in verdicts.iter_mut().enumerate() {
            if *verdict == Verdict::Green {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(slot) = remaining.iter_mut().find(|c| **c == letter) {
                *slot = CONSUMED;
                *verdict = Verdict::Yellow;
            }
        }

        Self::from_verdicts(verdicts)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.verdicts()
            .iter()
            .filter(|&&v| v == Verdict::Green)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.verdicts()
            .iter()
            .filter(|&&v| v == Verdict::Yellow)
            .count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.verdicts() {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse the `X`/`Y`/`G` encoding, rejecting anything else outright
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(PatternError::InvalidLength(len));
        }

        let mut verdicts = [Verdict::Grey; WORD_LENGTH];
        for (position, (slot, symbol)) in verdicts.iter_mut().zip(s.chars()).enumerate() {
            *slot = Verdict::from_symbol(symbol)
                .ok_or(PatternError::InvalidVerdict { symbol, position })?;
        }

        Ok(Self::from_verdicts(verdicts))
    }
}
