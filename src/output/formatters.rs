//! Formatting utilities for terminal output

use crate::core::FrequencyMap;
use crate::matcher::FindError;

/// Format a letter frequency map as `a:3 b:1 n:2`
#[must_use]
pub fn format_frequency(counts: &FrequencyMap) -> String {
    counts
        .iter()
        .map(|(letter, count)| format!("{letter}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay out words in left-aligned columns
///
/// Empty words (candidates with no letters) are shown as `''`.
#[must_use]
pub fn format_columns(words: &[String], columns: usize) -> String {
    let columns = columns.max(1);
    let shown: Vec<&str> = words
        .iter()
        .map(|w| if w.is_empty() { "''" } else { w.as_str() })
        .collect();
    let width = shown.iter().map(|w| w.len()).max().unwrap_or(0);

    shown
        .chunks(columns)
        .map(|row| {
            let line = row
                .iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            format!("   {}", line.trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a search result the way the acceptance suite prints it
#[must_use]
pub fn format_outcome(result: &Result<Vec<String>, FindError>) -> String {
    match result {
        Ok(words) => format!("{words:?}"),
        Err(_) => "Invalid Input".to_string(),
    }
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
