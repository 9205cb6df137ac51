//! Formatting utilities for terminal output

use crate::core::Family;

/// Header line printed above a family's words
#[must_use]
pub fn family_header(family: &Family) -> String {
    format!(
        "***Family signature: {} Num words: {}",
        family.signature(),
        family.len()
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

/// Bar showing a family's share of the words
#[must_use]
pub fn share_bar(family_size: usize, total: usize, width: usize) -> String {
    create_progress_bar(family_size as f64, total as f64, width)
}
