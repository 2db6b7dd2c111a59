//! Game variants
//!
//! The two supported puzzles differ only in answer length and alphabet, so a
//! single `GameConfig` value parametrizes every algorithm in the crate.

use std::fmt;
use std::str::FromStr;

/// Which puzzle is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    /// Five-letter word game
    Wordle,
    /// Eight-character equation game
    Nerdle,
}

impl GameKind {
    /// Display name used in headers and messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wordle => "WORDLE",
            Self::Nerdle => "NERDLE",
        }
    }

    /// The fixed configuration for this puzzle
    #[must_use]
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Wordle => GameConfig::WORDLE,
            Self::Nerdle => GameConfig::NERDLE,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wordle" | "word" => Ok(Self::Wordle),
            "nerdle" | "equation" => Ok(Self::Nerdle),
            other => Err(format!("Unknown game '{other}' (expected wordle or nerdle)")),
        }
    }
}

/// Length and alphabet of one puzzle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    kind: GameKind,
    length: usize,
    alphabet: &'static [u8],
}

impl GameConfig {
    /// Wordle: five lowercase ASCII letters
    pub const WORDLE: Self = Self {
        kind: GameKind::Wordle,
        length: 5,
        alphabet: b"abcdefghijklmnopqrstuvwxyz",
    };

    /// Nerdle: eight characters of digits and `+ - * / =`
    pub const NERDLE: Self = Self {
        kind: GameKind::Nerdle,
        length: 8,
        alphabet: b"0123456789+-*/=",
    };

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> GameKind {
        self.kind
    }

    /// Number of characters in every guess and solution
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Allowed characters, already case-normalized
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &'static [u8] {
        self.alphabet
    }

    /// Check whether a (normalized) byte belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn allows(&self, byte: u8) -> bool {
        self.alphabet.contains(&byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordle_config() {
        let config = GameConfig::WORDLE;
        assert_eq!(config.length(), 5);
        assert_eq!(config.kind(), GameKind::Wordle);
        assert!(config.allows(b'a'));
        assert!(config.allows(b'z'));
        assert!(!config.allows(b'A'));
        assert!(!config.allows(b'1'));
    }

    #[test]
    fn nerdle_config() {
        let config = GameConfig::NERDLE;
        assert_eq!(config.length(), 8);
        for &byte in b"0123456789+-*/=" {
            assert!(config.allows(byte));
        }
        assert!(!config.allows(b'a'));
        assert!(!config.allows(b'('));
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("wordle".parse::<GameKind>(), Ok(GameKind::Wordle));
        assert_eq!("NERDLE".parse::<GameKind>(), Ok(GameKind::Nerdle));
        assert!("sudoku".parse::<GameKind>().is_err());
    }

    #[test]
    fn kind_config_roundtrip() {
        assert_eq!(GameKind::Wordle.config(), GameConfig::WORDLE);
        assert_eq!(GameKind::Nerdle.config(), GameConfig::NERDLE);
        assert_eq!(GameKind::Nerdle.to_string(), "NERDLE");
    }
}
