//! Checking session controller
//!
//! A `Session` wires one `CandidateFilter` to an `Accumulator` that exists
//! only while a session is running. Each session is independent, so several
//! can run side by side without coordination.

use super::constraints::{Accumulator, ConstraintSet};
use super::filter::CandidateFilter;
use crate::core::{CheckError, ColorCode, GameConfig, Guess};

/// One run of the checker, from `start` to solve or abandonment
#[derive(Debug, Clone)]
pub struct Session<'a> {
    filter: CandidateFilter<'a>,
    accumulator: Option<Accumulator>,
    remaining: Vec<&'a Guess>,
}

impl<'a> Session<'a> {
    /// Create an idle session; call [`Session::start`] before adding tries
    #[must_use]
    pub const fn new(filter: CandidateFilter<'a>) -> Self {
        Self {
            filter,
            accumulator: None,
            remaining: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.filter.config()
    }

    #[must_use]
    pub const fn filter(&self) -> &CandidateFilter<'a> {
        &self.filter
    }

    /// Begin a new session with empty constraints, discarding any previous one
    pub fn start(&mut self) {
        self.accumulator = Some(Accumulator::new(*self.filter.config()));
        self.remaining = self.filter.words().iter().collect();
    }

    /// Drop the current session
    pub fn end(&mut self) {
        self.accumulator = None;
        self.remaining.clear();
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.accumulator.is_some()
    }

    /// Add a color-coded try and narrow the running candidate list
    ///
    /// # Errors
    /// Returns `CheckError::NotStarted` without an active session, or
    /// `CheckError::InvalidInput` for a malformed or contradictory try.
    ///
    /// # Examples
    /// ```
    /// use wordle_checker::checker::{CandidateFilter, Session};
    /// use wordle_checker::core::{CheckError, GameConfig, Guess};
    ///
    /// let words = vec![Guess::new("snafu", &GameConfig::WORDLE).unwrap()];
    /// let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
    /// assert_eq!(session.add_try("octal", "___Y_"), Err(CheckError::NotStarted));
    ///
    /// session.start();
    /// session.add_try("octal", "___Y_").unwrap();
    /// assert_eq!(session.possible_solutions().unwrap().len(), 1);
    /// ```
    pub fn add_try(&mut self, guess: &str, code: &str) -> Result<(), CheckError> {
        let accumulator = self.accumulator.as_mut().ok_or(CheckError::NotStarted)?;
        accumulator.add_try(guess, code)?;
        self.remaining = CandidateFilter::refine(
            std::mem::take(&mut self.remaining),
            accumulator.constraints(),
        );
        Ok(())
    }

    /// Remove the latest try and rebuild the constraints from the rest
    ///
    /// Returns the removed try, or `None` when there was nothing to undo.
    ///
    /// # Errors
    /// Returns `CheckError::NotStarted` without an active session.
    pub fn undo(&mut self) -> Result<Option<(Guess, ColorCode)>, CheckError> {
        let accumulator = self.accumulator.as_ref().ok_or(CheckError::NotStarted)?;
        let mut tries = accumulator.tries().to_vec();
        let Some(removed) = tries.pop() else {
            return Ok(None);
        };

        let mut rebuilt = Accumulator::new(*self.filter.config());
        for (guess, code) in tries {
            rebuilt.add(guess, code)?;
        }
        self.remaining = self.filter.filter(rebuilt.constraints());
        self.accumulator = Some(rebuilt);
        Ok(Some(removed))
    }

    /// Current constraints
    ///
    /// # Errors
    /// Returns `CheckError::NotStarted` without an active session.
    pub fn constraints(&self) -> Result<&ConstraintSet, CheckError> {
        self.active().map(Accumulator::constraints)
    }

    /// Tries accepted so far
    ///
    /// # Errors
    /// Returns `CheckError::NotStarted` without an active session.
    pub fn tries(&self) -> Result<&[(Guess, ColorCode)], CheckError> {
        self.active().map(Accumulator::tries)
    }

    /// The solved word, if an all-green try was entered
    ///
    /// # Errors
    /// Returns `CheckError::NotStarted` without an active session.
    pub fn solution(&self) -> Result<Option<&Guess>, CheckError> {
        self.active().map(Accumulator::solution)
    }

    /// Candidates consistent with every try so far, in list order
    ///
    /// # Errors
    /// Returns `CheckError::NotStarted` without an active session.
    pub fn possible_solutions(&self) -> Result<&[&'a Guess], CheckError> {
        self.active()?;
        Ok(&self.remaining)
    }

    fn active(&self) -> Result<&Accumulator, CheckError> {
        self.accumulator.as_ref().ok_or(CheckError::NotStarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputError;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn texts(session: &Session) -> Vec<String> {
        session
            .possible_solutions()
            .unwrap()
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    #[test]
    fn operations_require_start() {
        let words = words_from_slice(&["snafu"], &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));

        assert!(!session.is_active());
        assert_eq!(session.add_try("snafu", "GGGGG"), Err(CheckError::NotStarted));
        assert_eq!(session.possible_solutions(), Err(CheckError::NotStarted));
        assert!(matches!(session.constraints(), Err(CheckError::NotStarted)));
        assert!(matches!(session.undo(), Err(CheckError::NotStarted)));

        session.start();
        session.end();
        assert_eq!(session.tries().map(<[_]>::len), Err(CheckError::NotStarted));
    }

    #[test]
    fn fresh_session_lists_everything() {
        let words = words_from_slice(&["crane", "slate"], &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        session.start();
        assert_eq!(texts(&session), ["crane", "slate"]);
        assert!(session.constraints().unwrap().is_empty());
    }

    #[test]
    fn snafu_session() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        session.start();

        for (guess, code) in [
            ("OCTAL", "___Y_"),
            ("SIREN", "G___Y"),
            ("DUMPY", "_Y___"),
            ("STUNT", "G_YY_"),
            ("SONAR", "G_YY_"),
        ] {
            session.add_try(guess, code).unwrap();
            assert!(!session.possible_solutions().unwrap().is_empty());
        }

        session.add_try("SNAFU", "GGGGG").unwrap();
        assert_eq!(texts(&session), ["snafu"]);
        assert_eq!(
            session.solution().unwrap().map(Guess::text),
            Some("snafu")
        );
    }

    #[test]
    fn invalid_try_is_distinct_from_not_started() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        session.start();
        let before = texts(&session);

        assert!(matches!(
            session.add_try("toolong", "_______"),
            Err(CheckError::InvalidInput(InputError::InvalidLength { .. }))
        ));
        assert!(matches!(
            session.add_try("crane", "__?__"),
            Err(CheckError::InvalidInput(InputError::InvalidColor('?')))
        ));
        assert_eq!(texts(&session), before);
        assert!(session.tries().unwrap().is_empty());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let words = words_from_slice(&["crane", "slate"], &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        session.start();
        session.add_try("zzzzz", "Y____").unwrap();
        assert_eq!(session.possible_solutions().map(<[_]>::len), Ok(0));
    }

    #[test]
    fn undo_restores_previous_state() {
        let words = words_from_slice(WORDS, &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        session.start();

        session.add_try("OCTAL", "___Y_").unwrap();
        let after_first = texts(&session);
        let constraints = session.constraints().unwrap().clone();

        session.add_try("SIREN", "G___Y").unwrap();
        let removed = session.undo().unwrap();
        assert_eq!(removed.map(|(g, _)| g.text().to_string()), Some("siren".to_string()));
        assert_eq!(texts(&session), after_first);
        assert_eq!(session.constraints().unwrap(), &constraints);

        session.undo().unwrap();
        assert!(session.undo().unwrap().is_none());
        assert_eq!(texts(&session).len(), words.len());
    }

    #[test]
    fn restart_discards_previous_session() {
        let words = words_from_slice(&["crane", "slate"], &GameConfig::WORDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
        session.start();
        session.add_try("crane", "GGGGG").unwrap();
        assert_eq!(texts(&session), ["crane"]);

        session.start();
        assert_eq!(texts(&session), ["crane", "slate"]);
        assert!(session.solution().unwrap().is_none());
    }

    #[test]
    fn equation_session() {
        let words = words_from_slice(crate::wordlists::EQUATIONS, &GameConfig::NERDLE);
        let mut session = Session::new(CandidateFilter::new(GameConfig::NERDLE, &words));
        session.start();
        session.add_try("15+24=39", "GYG__Y_G").unwrap();
        session.add_try("17+1-9=9", "GYGYG_GG").unwrap();
        assert_eq!(texts(&session), ["11+5-7=9"]);
    }
}
