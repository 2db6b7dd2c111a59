//! Error types shared by the checker
//!
//! `InputError` covers bad data (wrong length, disallowed characters,
//! malformed color codes, contradictory tries). `CheckError` adds the
//! sequencing failure of using a session before it was started.

use std::fmt;

/// Invalid input supplied by the caller
///
/// Always returned synchronously and never corrected; the operation that
/// produced it has left all state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Guess or solution has the wrong number of characters
    InvalidLength { expected: usize, actual: usize },
    /// A character outside the game's alphabet
    InvalidCharacter(char),
    /// A color code symbol other than gray, yellow or green
    InvalidColor(char),
    /// Color code length differs from the guess length
    CodeLength { expected: usize, actual: usize },
    /// The try conflicts with constraints derived from earlier tries
    Contradiction { position: usize, character: char },
    /// An all-green try was already recorded
    AlreadySolved,
    /// A stored game line could not be parsed
    MalformedRecord(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Must be exactly {expected} characters long, got {actual}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Invalid character '{ch}'"),
            Self::InvalidColor(ch) => {
                write!(f, "Invalid result symbol '{ch}', must be one of 'G', 'Y', '_'")
            }
            Self::CodeLength { expected, actual } => {
                write!(f, "Result must be {expected} symbols long, got {actual}")
            }
            Self::Contradiction {
                position,
                character,
            } => write!(
                f,
                "'{character}' at position {} contradicts earlier tries",
                position + 1
            ),
            Self::AlreadySolved => write!(f, "Game is already solved"),
            Self::MalformedRecord(line) => write!(f, "Malformed game record: {line}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Errors raised by a checking session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    InvalidInput(InputError),
    /// An operation needing an active session ran before `start`
    NotStarted,
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::NotStarted => write!(f, "Game not started"),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::NotStarted => None,
        }
    }
}

impl From<InputError> for CheckError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = InputError::InvalidLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Must be exactly 5 characters long, got 3");

        let err = InputError::Contradiction {
            position: 0,
            character: 's',
        };
        assert_eq!(err.to_string(), "'s' at position 1 contradicts earlier tries");
        assert_eq!(CheckError::NotStarted.to_string(), "Game not started");
    }

    #[test]
    fn input_error_converts() {
        let err: CheckError = InputError::InvalidColor('x').into();
        assert!(matches!(
            err,
            CheckError::InvalidInput(InputError::InvalidColor('x'))
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
