//! Formatting utilities for terminal output

use crate::core::{Pattern, Verdict};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .verdicts()
        .iter()
        .map(|verdict| match verdict {
            Verdict::Grey => '⬜',
            Verdict::Yellow => '🟨',
            Verdict::Green => '🟩',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to `max_entropy` bits
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}
