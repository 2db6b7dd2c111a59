//! Guess representation
//!
//! A `Guess` stores a validated, case-normalized string for one game variant
//! along with character position indices for duplicate handling.

use super::{GameConfig, InputError};
use rustc_hash::FxHashMap;
use std::fmt;

/// A fixed-length guess, solution or candidate for one game variant
///
/// Stores the text as bytes and maintains a map of character positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    chars: Vec<u8>,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

impl Guess {
    /// Create a new Guess for the given game variant
    ///
    /// Letters are lowercased before validation, so `"CRANE"` and `"crane"`
    /// produce equal guesses.
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length differs from `config.length()`
    /// - Any character is outside the variant's alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_checker::core::{GameConfig, Guess};
    ///
    /// let guess = Guess::new("CRANE", &GameConfig::WORDLE).unwrap();
    /// assert_eq!(guess.text(), "crane");
    ///
    /// assert!(Guess::new("too long", &GameConfig::WORDLE).is_err());
    /// assert!(Guess::new("12+34=46", &GameConfig::NERDLE).is_ok());
    /// ```
    pub fn new(text: impl Into<String>, config: &GameConfig) -> Result<Self, InputError> {
        let text: String = text.into().trim().to_lowercase();

        let actual = text.chars().count();
        if actual != config.length() {
            return Err(InputError::InvalidLength {
                expected: config.length(),
                actual,
            });
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| !c.is_ascii() || !config.allows(c as u8))
        {
            return Err(InputError::InvalidCharacter(bad));
        }

        let chars = text.as_bytes().to_vec();

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the guess as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the guess as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position is past the end of the guess
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the guess contains a specific character
    #[inline]
    #[must_use]
    pub fn has_char(&self, ch: u8) -> bool {
        self.char_positions.contains_key(&ch)
    }

    /// Get all positions where a character appears
    ///
    /// Returns an empty slice if the character doesn't appear.
    #[inline]
    pub fn positions_of(&self, ch: u8) -> &[usize] {
        self.char_positions
            .get(&ch)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of times a character occurs
    #[inline]
    #[must_use]
    pub fn occurrences(&self, ch: u8) -> usize {
        self.positions_of(ch).len()
    }

    /// Get the count of each character in the guess
    ///
    /// Used for scoring with duplicate characters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
