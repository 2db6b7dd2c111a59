//! Completed game records
//!
//! Once a game is over the solution is known, so every try can be re-scored
//! with the evaluator instead of trusting hand-entered feedback. The record
//! renders as a box transcript and as one comma-separated log line:
//!
//! ```text
//! 2024-03-01,OCTAL SIREN SNAFU,___Y_ G___Y GGGGG,SNAFU
//! ```

use super::evaluator::Evaluator;
use crate::core::{ColorCode, GameConfig, Guess, InputError};
use std::fmt;

/// Marker written in place of a missing date
const NO_DATE: &str = "-";

/// A finished game: its tries, their color codes and the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    date: Option<String>,
    tries: Vec<Guess>,
    results: Vec<ColorCode>,
    solution: Guess,
}

impl GameRecord {
    /// Score every try against the known solution
    ///
    /// # Errors
    /// Returns `InputError` if the solution or any try is invalid for `config`.
    ///
    /// # Examples
    /// ```
    /// use wordle_checker::checker::GameRecord;
    /// use wordle_checker::core::GameConfig;
    ///
    /// let record = GameRecord::replay(GameConfig::WORDLE, None, "close", &["cheer", "leave", "close"]).unwrap();
    /// assert_eq!(record.to_line(), "-,CHEER LEAVE CLOSE,G_Y__ Y___G GGGGG,CLOSE");
    /// assert_eq!(record.score(), 3);
    /// ```
    pub fn replay<S: AsRef<str>>(
        config: GameConfig,
        date: Option<String>,
        solution: &str,
        tries: &[S],
    ) -> Result<Self, InputError> {
        let evaluator = Evaluator::new(config, solution)?;
        let tries = tries
            .iter()
            .map(|t| Guess::new(t.as_ref(), &config))
            .collect::<Result<Vec<_>, _>>()?;
        let results = tries
            .iter()
            .map(|t| evaluator.score_guess(t))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            date,
            tries,
            results,
            solution: evaluator.solution().clone(),
        })
    }

    /// Parse a log line written by [`GameRecord::to_line`]
    ///
    /// # Errors
    /// Returns `InputError::MalformedRecord` if the line does not have four
    /// fields or the try and result counts differ, and other `InputError`s for
    /// invalid words or codes.
    pub fn parse_line(config: GameConfig, line: &str) -> Result<Self, InputError> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        let [date, tries, results, solution] = fields.as_slice() else {
            return Err(InputError::MalformedRecord(line.trim().to_string()));
        };

        let solution = Guess::new(*solution, &config)?;
        let tries = tries
            .split_whitespace()
            .map(|t| Guess::new(t, &config))
            .collect::<Result<Vec<_>, _>>()?;
        let results = results
            .split_whitespace()
            .map(|r| ColorCode::parse(r, config.length()))
            .collect::<Result<Vec<_>, _>>()?;

        if tries.len() != results.len() {
            return Err(InputError::MalformedRecord(line.trim().to_string()));
        }

        let date = match date.trim() {
            "" | NO_DATE => None,
            d => Some(d.to_string()),
        };

        Ok(Self {
            date,
            tries,
            results,
            solution,
        })
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    #[must_use]
    pub fn tries(&self) -> &[Guess] {
        &self.tries
    }

    #[must_use]
    pub fn results(&self) -> &[ColorCode] {
        &self.results
    }

    #[must_use]
    pub const fn solution(&self) -> &Guess {
        &self.solution
    }

    /// True when the last try scored all green
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.results.last().is_some_and(ColorCode::is_solved)
    }

    /// Number of tries, counting an unsolved game as one extra
    #[must_use]
    pub fn score(&self) -> usize {
        self.tries.len() + usize::from(!self.is_solved())
    }

    /// One-line storage form
    #[must_use]
    pub fn to_line(&self) -> String {
        let tries: Vec<String> = self.tries.iter().map(|t| t.text().to_uppercase()).collect();
        let results: Vec<String> = self.results.iter().map(ToString::to_string).collect();
        format!(
            "{},{},{},{}",
            self.date().unwrap_or(NO_DATE),
            tries.join(" "),
            results.join(" "),
            self.solution.text().to_uppercase()
        )
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            self.date().unwrap_or(NO_DATE),
            self.solution.text().to_uppercase()
        )?;
        for (result, guess) in self.results.iter().zip(&self.tries) {
            write!(f, "\n{} {}", result.to_glyphs(), guess.text().to_uppercase())?;
        }
        Ok(())
    }
}
