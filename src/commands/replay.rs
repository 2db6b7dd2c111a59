//! Completed game replay command
//!
//! Rebuilds the color codes of a finished game from its solution, ready to be
//! logged by whatever storage the caller uses.

use crate::checker::GameRecord;
use crate::core::GameConfig;

/// Most tries a single game allows
pub const MAX_TRIES: usize = 6;

/// Replay a finished game
///
/// Tries must stop at the solution and may not exceed [`MAX_TRIES`].
///
/// # Errors
///
/// Returns an error if the solution or a try is invalid, if a try follows the
/// solution, or if there are too many tries.
pub fn replay_game(
    config: GameConfig,
    date: Option<String>,
    solution: &str,
    tries: &[String],
) -> Result<GameRecord, String> {
    if tries.len() > MAX_TRIES {
        return Err(format!(
            "At most {MAX_TRIES} tries allowed, got {}",
            tries.len()
        ));
    }

    let record = GameRecord::replay(config, date, solution, tries)
        .map_err(|e| format!("Invalid game: {e}"))?;

    if let Some(position) = record.results().iter().position(|code| code.is_solved())
        && position + 1 < record.tries().len()
    {
        return Err(format!(
            "Try {} already solved the game; remove the tries after it",
            position + 1
        ));
    }

    Ok(record)
}
