//! Formatting utilities for terminal output

use crate::core::{Feedback, Symbol};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            Symbol::Exact => '🟩',
            Symbol::Misplaced => '🟨',
            Symbol::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `part` in `total` as a percentage, 0 for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
