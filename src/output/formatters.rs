//! Formatting utilities for terminal output

use crate::core::Word;

/// Position of the single character that differs between two ladder rungs
#[must_use]
pub fn changed_position(previous: &Word, next: &Word) -> Option<usize> {
    if !previous.is_neighbor(next) {
        return None;
    }

    previous
        .chars()
        .iter()
        .zip(next.chars())
        .position(|(a, b)| a != b)
}

/// Render a rung with its changed character bracketed, e.g. `c[o]t`
#[must_use]
pub fn mark_change(previous: &Word, next: &Word) -> String {
    let changed = changed_position(previous, next);

    next.chars()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if Some(i) == changed {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
