//! Formatting utilities for terminal output

use crate::core::Solution;

/// Format a solution as a quoted word pair, padded to `width`
#[must_use]
pub fn format_pair(solution: &Solution, width: usize) -> String {
    let pair = format!("('{}', '{}')", solution.first(), solution.second());
    format!("{pair:<width$}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
