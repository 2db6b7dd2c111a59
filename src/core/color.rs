//! Per-position feedback colors
//!
//! A `ColorCode` is the ordered feedback for one guess, one `Color` per
//! character position. The canonical text form uses one symbol per color:
//! - `_` = Gray (character absent)
//! - `Y` = Yellow (present, wrong position)
//! - `G` = Green (correct position)

use super::InputError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single character position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray,
    Yellow,
    Green,
}

impl Color {
    /// Canonical text symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Gray => '_',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Colored-block glyph for display
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Gray => '⬛',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    /// Parse one symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '_'/'-'/⬛/⬜ for gray
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '_' | '-' | '⬛' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorCode(Vec<Color>);

impl ColorCode {
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// All greens (perfect match) for the given length
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self(vec![Color::Green; length])
    }

    /// Parse a code and check it has the expected length
    ///
    /// # Errors
    /// Returns `InputError::InvalidColor` for an unknown symbol and
    /// `InputError::CodeLength` when the length is wrong.
    ///
    /// # Examples
    /// ```
    /// use wordle_checker::core::ColorCode;
    ///
    /// let code = ColorCode::parse("G_Y__", 5).unwrap();
    /// assert_eq!(code.to_string(), "G_Y__");
    /// assert_eq!(code, ColorCode::parse("🟩⬛🟨⬛⬛", 5).unwrap());
    /// assert!(ColorCode::parse("G_Y", 5).is_err());
    /// ```
    pub fn parse(s: &str, expected_len: usize) -> Result<Self, InputError> {
        let code: Self = s.parse()?;
        if code.len() != expected_len {
            return Err(InputError::CodeLength {
                expected: expected_len,
                actual: code.len(),
            });
        }
        Ok(code)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Color::Green)
    }

    /// Count positions with the given color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Convert to a colored-block string like "🟩⬛🟨⬛⬛"
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|c| c.glyph()).collect()
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for ColorCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|ch| Color::from_symbol(ch).ok_or(InputError::InvalidColor(ch)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
