//! Formatting utilities for terminal output

use crate::core::{Color, ColorCode, Guess};
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Placeholder for a position with no fixed character
pub const UNKNOWN: char = '_';

/// Render a guess with each character on its color's background
#[must_use]
pub fn colored_guess(guess: &Guess, code: &ColorCode) -> String {
    guess
        .chars()
        .iter()
        .zip(code.colors())
        .map(|(&ch, color)| {
            let cell = format!(" {} ", (ch as char).to_ascii_uppercase());
            match color {
                Color::Green => cell.black().on_green().bold().to_string(),
                Color::Yellow => cell.black().on_yellow().bold().to_string(),
                Color::Gray => cell.white().on_bright_black().to_string(),
            }
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
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Characters of a set in sorted order, or `-` when empty
#[must_use]
pub fn format_char_set(set: &FxHashSet<u8>) -> String {
    if set.is_empty() {
        return "-".to_string();
    }
    let mut chars: Vec<u8> = set.iter().copied().collect();
    chars.sort_unstable();
    chars.into_iter().map(char::from).collect()
}

/// Fixed characters laid out by position, unknown positions as `_`
#[must_use]
pub fn format_fixed(fixed: &[Option<u8>]) -> String {
    fixed
        .iter()
        .map(|slot| slot.map_or(UNKNOWN, char::from))
        .collect()
}

/// Lay words out in rows of `columns`, upper-cased
#[must_use]
pub fn format_columns(words: &[&Guess], columns: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|word| word.text().to_uppercase())
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
