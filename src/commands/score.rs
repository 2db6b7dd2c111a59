//! Guess scoring command
//!
//! Scores one or more guesses against a known solution.

use crate::checker::Evaluator;
use crate::core::{ColorCode, GameConfig};

/// Result of scoring guesses against a solution
pub struct ScoreResult {
    pub solution: String,
    pub scores: Vec<(String, ColorCode)>,
}

impl ScoreResult {
    /// True if any scored guess was the solution
    #[must_use]
    pub fn solved(&self) -> bool {
        self.scores.iter().any(|(_, code)| code.is_solved())
    }
}

/// Score every guess against `solution`
///
/// # Errors
///
/// Returns an error if the solution or any guess is invalid for the game.
pub fn score_guesses(
    config: GameConfig,
    solution: &str,
    guesses: &[String],
) -> Result<ScoreResult, String> {
    let evaluator =
        Evaluator::new(config, solution).map_err(|e| format!("Invalid solution: {e}"))?;

    let scores = guesses
        .iter()
        .map(|guess| {
            evaluator
                .score(guess)
                .map(|code| (guess.to_lowercase(), code))
                .map_err(|e| format!("Invalid guess '{guess}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScoreResult {
        solution: evaluator.solution().text().to_string(),
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_fixture_guesses() {
        let guesses = vec!["CHEER".to_string(), "LEAVE".to_string()];
        let result = score_guesses(GameConfig::WORDLE, "CLOSE", &guesses).unwrap();

        assert_eq!(result.solution, "close");
        assert_eq!(result.scores[0].0, "cheer");
        assert_eq!(result.scores[0].1.to_string(), "G_Y__");
        assert_eq!(result.scores[1].1.to_string(), "Y___G");
        assert!(!result.solved());
    }

    #[test]
    fn detects_solved() {
        let guesses = vec!["17+1-9=9".to_string(), "11+5-7=9".to_string()];
        let result = score_guesses(GameConfig::NERDLE, "11+5-7=9", &guesses).unwrap();
        assert_eq!(result.scores[0].1.to_string(), "GYGYG_GG");
        assert!(result.solved());
    }

    #[test]
    fn invalid_inputs_reported() {
        let guesses = vec!["cheers".to_string()];
        let err = score_guesses(GameConfig::WORDLE, "close", &guesses)
            .err()
            .unwrap();
        assert!(err.contains("cheers"));

        assert!(score_guesses(GameConfig::WORDLE, "clos", &[]).is_err());
    }
}
