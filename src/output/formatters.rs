//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::Colorize;

/// Format feedback as colored key pegs
///
/// Exact pegs are red, partial pegs white, empty slots dimmed.
#[must_use]
pub fn colored_pegs(feedback: Feedback, code_length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = code_length.saturating_sub(exact + partial);

    format!(
        "{}{}{}",
        "●".repeat(exact).bright_red(),
        "○".repeat(partial).bright_white(),
        "·".repeat(empty).bright_black()
    )
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

/// Bar showing how much of the candidate set a guess eliminated
#[must_use]
pub fn elimination_bar(before: usize, after: usize, width: usize) -> String {
    create_progress_bar(before.saturating_sub(after) as f64, before as f64, width)
}
