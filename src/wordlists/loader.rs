//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{EQUATIONS, WORDS};
use crate::core::{GameConfig, GameKind, Guess};
use std::fs;
use std::io;
use std::path::Path;

/// Load candidates for one game variant from a file
///
/// One entry per line; blank lines and entries that are invalid for
/// `config` are skipped, and letters are lowercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_checker::core::GameConfig;
/// use wordle_checker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", &GameConfig::WORDLE).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &GameConfig) -> io::Result<Vec<Guess>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content, config))
}

/// Convert embedded string slice to a Guess vector
///
/// # Examples
/// ```
/// use wordle_checker::core::GameConfig;
/// use wordle_checker::wordlists::loader::words_from_slice;
/// use wordle_checker::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, &GameConfig::WORDLE);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], config: &GameConfig) -> Vec<Guess> {
    slice
        .iter()
        .filter_map(|&s| Guess::new(s, config).ok())
        .collect()
}

/// The embedded list for a game variant
#[must_use]
pub const fn builtin(kind: GameKind) -> &'static [&'static str] {
    match kind {
        GameKind::Wordle => WORDS,
        GameKind::Nerdle => EQUATIONS,
    }
}

fn parse_lines(content: &str, config: &GameConfig) -> Vec<Guess> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Guess::new(trimmed, config).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", "irate"], &GameConfig::WORDLE);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input, &GameConfig::WORDLE);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_respects_variant() {
        let input = &["crane", "11+5-7=9"];
        assert_eq!(words_from_slice(input, &GameConfig::NERDLE).len(), 1);
        assert_eq!(words_from_slice(input, &GameConfig::WORDLE).len(), 1);
        assert!(words_from_slice(&[], &GameConfig::WORDLE).is_empty());
    }

    #[test]
    fn parse_lines_skips_blanks_and_invalid() {
        let words = parse_lines("CRANE\n\n  slate  \nnope\n", &GameConfig::WORDLE);
        let texts: Vec<&str> = words.iter().map(Guess::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load_from_file("/nonexistent/words.txt", &GameConfig::WORDLE).is_err());
    }

    #[test]
    fn builtin_lists_load_completely() {
        for kind in [GameKind::Wordle, GameKind::Nerdle] {
            let list = builtin(kind);
            assert_eq!(words_from_slice(list, &kind.config()).len(), list.len());
        }
    }
}
