//! Batch filtering command
//!
//! Runs a checking session over tries given up front and reports how the
//! candidate list narrows at each step.

use crate::checker::{CandidateFilter, Session};
use crate::core::ColorCode;

/// A single try in the filtering run
pub struct FilterStep {
    pub guess: String,
    pub code: ColorCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of filtering a word list by a series of tries
pub struct FilterResult {
    pub total_words: usize,
    pub steps: Vec<FilterStep>,
    pub candidates: Vec<String>,
    pub solution: Option<String>,
}

/// Split a `GUESS/CODE` argument into its two halves
///
/// `:` is accepted as a separator too. Only the last separator counts, since
/// `/` is also division inside equations.
///
/// # Errors
///
/// Returns an error if no separator is present.
pub fn parse_try(arg: &str) -> Result<(&str, &str), String> {
    arg.rsplit_once(['/', ':'])
        .map(|(guess, code)| (guess.trim(), code.trim()))
        .ok_or_else(|| format!("Expected GUESS/CODE, got '{arg}'"))
}

/// Feed every try into a fresh session and collect the narrowing steps
///
/// # Errors
///
/// Returns an error naming the offending try if one is malformed or
/// contradicts an earlier try.
pub fn filter_words(filter: CandidateFilter, tries: &[String]) -> Result<FilterResult, String> {
    let mut session = Session::new(filter);
    session.start();

    let mut steps = Vec::with_capacity(tries.len());
    for arg in tries {
        let (guess, code) = parse_try(arg)?;
        let candidates_before = remaining(&session)?;

        session
            .add_try(guess, code)
            .map_err(|e| format!("Try '{arg}' rejected: {e}"))?;

        let (guess, code) = session
            .tries()
            .map_err(|e| e.to_string())?
            .last()
            .cloned()
            .ok_or("Try was not recorded")?;

        steps.push(FilterStep {
            guess: guess.text().to_string(),
            code,
            candidates_before,
            candidates_after: remaining(&session)?,
        });
    }

    let candidates = session
        .possible_solutions()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|w| w.text().to_string())
        .collect();
    let solution = session
        .solution()
        .map_err(|e| e.to_string())?
        .map(|g| g.text().to_string());

    Ok(FilterResult {
        total_words: filter.words().len(),
        steps,
        candidates,
        solution,
    })
}

fn remaining(session: &Session) -> Result<usize, String> {
    session
        .possible_solutions()
        .map(<[_]>::len)
        .map_err(|e| e.to_string())
}
