//! Guess scoring against a known solution
//!
//! Implements the two-pass duplicate-aware feedback rules shared by both game
//! variants. Used when a finished game is replayed from its solution; live
//! checking gets its color codes from the player instead.

use crate::core::{Color, ColorCode, GameConfig, Guess, InputError};

/// Calculate the color code when `guess` is played against `solution`
///
/// # Algorithm
/// 1. First pass: mark all exact matches (greens) and remove them from the
///    available pool
/// 2. Second pass: mark present-but-wrong-position (yellows) from the
///    remaining pool, consuming one occurrence per yellow
///
/// # Errors
/// Returns `InputError::InvalidLength` if the two strings differ in length.
///
/// # Examples
/// ```
/// use wordle_checker::checker::evaluate;
/// use wordle_checker::core::{GameConfig, Guess};
///
/// let solution = Guess::new("green", &GameConfig::WORDLE).unwrap();
/// let guess = Guess::new("eeege", &GameConfig::WORDLE).unwrap();
/// assert_eq!(evaluate(&guess, &solution).unwrap().to_string(), "Y_GY_");
/// ```
pub fn evaluate(guess: &Guess, solution: &Guess) -> Result<ColorCode, InputError> {
    let length = solution.chars().len();
    if guess.chars().len() != length {
        return Err(InputError::InvalidLength {
            expected: length,
            actual: guess.chars().len(),
        });
    }

    let mut result = vec![Color::Gray; length];
    let mut available = solution.char_counts();

    // First pass: greens
    for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
        if g == s {
            result[i] = Color::Green;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from what the greens left over
    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == Color::Green {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            result[i] = Color::Yellow;
            *count -= 1;
        }
    }

    Ok(ColorCode::new(result))
}

/// Scores guesses against one fixed solution
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: GameConfig,
    solution: Guess,
}

impl Evaluator {
    /// Create an evaluator for a solution of the given variant
    ///
    /// # Errors
    /// Returns `InputError` if the solution is not valid for `config`.
    pub fn new(config: GameConfig, solution: &str) -> Result<Self, InputError> {
        let solution = Guess::new(solution, &config)?;
        Ok(Self { config, solution })
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn solution(&self) -> &Guess {
        &self.solution
    }

    /// Score a raw guess string
    ///
    /// # Errors
    /// Returns `InputError` if the guess has the wrong length or alphabet.
    pub fn score(&self, guess: &str) -> Result<ColorCode, InputError> {
        let guess = Guess::new(guess, &self.config)?;
        self.score_guess(&guess)
    }

    /// Score an already validated guess
    ///
    /// # Errors
    /// Returns `InputError::InvalidLength` if the guess belongs to another variant.
    pub fn score_guess(&self, guess: &Guess) -> Result<ColorCode, InputError> {
        evaluate(guess, &self.solution)
    }
}
