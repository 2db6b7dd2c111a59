//! Accumulated knowledge from color-coded tries
//!
//! The `Accumulator` ingests `(guess, color code)` pairs and keeps the
//! `ConstraintSet` they imply. Constraints only ever tighten.

use crate::core::{Color, ColorCode, GameConfig, Guess, InputError};
use rustc_hash::FxHashSet;

/// Positional and existential constraints derived from all tries so far
///
/// Per-position state lives in vectors indexed by position `0..length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    excluded: FxHashSet<u8>,
    position_excluded: Vec<FxHashSet<u8>>,
    position_fixed: Vec<Option<u8>>,
    required: FxHashSet<u8>,
}

impl ConstraintSet {
    /// Empty constraints for guesses of `length` characters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            excluded: FxHashSet::default(),
            position_excluded: vec![FxHashSet::default(); length],
            position_fixed: vec![None; length],
            required: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.position_fixed.len()
    }

    /// Characters confirmed absent from the solution
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &FxHashSet<u8> {
        &self.excluded
    }

    /// Characters known not to occupy `position`
    ///
    /// # Panics
    /// Panics if position >= `length()`
    #[inline]
    #[must_use]
    pub fn position_excluded(&self, position: usize) -> &FxHashSet<u8> {
        &self.position_excluded[position]
    }

    /// Confirmed character at `position`, if any
    ///
    /// # Panics
    /// Panics if position >= `length()`
    #[inline]
    #[must_use]
    pub fn position_fixed(&self, position: usize) -> Option<u8> {
        self.position_fixed[position]
    }

    /// Confirmed characters for every position
    #[inline]
    #[must_use]
    pub fn fixed(&self) -> &[Option<u8>] {
        &self.position_fixed
    }

    /// Characters confirmed present somewhere
    #[inline]
    #[must_use]
    pub const fn required(&self) -> &FxHashSet<u8> {
        &self.required
    }

    /// True when nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
            && self.required.is_empty()
            && self.position_fixed.iter().all(Option::is_none)
            && self.position_excluded.iter().all(FxHashSet::is_empty)
    }

    /// Pin `ch` to `position`
    fn fix(&mut self, position: usize, ch: u8) -> Result<(), InputError> {
        let conflicting = self.excluded.contains(&ch)
            || self.position_excluded[position].contains(&ch)
            || self.position_fixed[position].is_some_and(|fixed| fixed != ch);
        if conflicting {
            return Err(contradiction(position, ch));
        }
        self.position_fixed[position] = Some(ch);
        self.required.insert(ch);
        Ok(())
    }

    /// Record `ch` as present but not at `position`
    fn exclude_at(&mut self, position: usize, ch: u8) -> Result<(), InputError> {
        if self.excluded.contains(&ch) || self.position_fixed[position] == Some(ch) {
            return Err(contradiction(position, ch));
        }
        self.position_excluded[position].insert(ch);
        self.required.insert(ch);
        Ok(())
    }

    /// Record `ch` as absent everywhere
    fn exclude(&mut self, position: usize, ch: u8) -> Result<(), InputError> {
        if self.required.contains(&ch) {
            return Err(contradiction(position, ch));
        }
        self.excluded.insert(ch);
        Ok(())
    }
}

fn contradiction(position: usize, ch: u8) -> InputError {
    InputError::Contradiction {
        position,
        character: char::from(ch),
    }
}

/// Builds up a `ConstraintSet` across the tries of one checking session
#[derive(Debug, Clone)]
pub struct Accumulator {
    config: GameConfig,
    constraints: ConstraintSet,
    tries: Vec<(Guess, ColorCode)>,
    solution: Option<Guess>,
}

impl Accumulator {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            constraints: ConstraintSet::new(config.length()),
            tries: Vec::new(),
            solution: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The constraints implied by every try so far
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Accepted tries in order
    #[must_use]
    pub fn tries(&self) -> &[(Guess, ColorCode)] {
        &self.tries
    }

    /// The guess that scored all green, once one has
    #[must_use]
    pub const fn solution(&self) -> Option<&Guess> {
        self.solution.as_ref()
    }

    /// Parse and add a try given as raw text
    ///
    /// # Errors
    /// Returns `InputError` if the guess or code is malformed, or if the try
    /// contradicts an earlier one. State is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_checker::checker::Accumulator;
    /// use wordle_checker::core::GameConfig;
    ///
    /// let mut acc = Accumulator::new(GameConfig::WORDLE);
    /// acc.add_try("octal", "___Y_").unwrap();
    /// assert!(acc.constraints().excluded().contains(&b'o'));
    /// assert!(acc.constraints().required().contains(&b'a'));
    /// assert!(acc.add_try("octal", "___X_").is_err());
    /// ```
    pub fn add_try(&mut self, guess: &str, code: &str) -> Result<(), InputError> {
        let guess = Guess::new(guess, &self.config)?;
        let code = ColorCode::parse(code, guess.chars().len())?;
        self.add(guess, code)
    }

    /// Add an already parsed try
    ///
    /// # Errors
    /// Same conditions as [`Accumulator::add_try`], plus a guess built for a
    /// different game variant.
    pub fn add(&mut self, guess: Guess, code: ColorCode) -> Result<(), InputError> {
        self.validate(&guess, &code)?;

        let mut next = self.constraints.clone();
        if code.is_solved() {
            for (i, &ch) in guess.chars().iter().enumerate() {
                next.fix(i, ch)?;
            }
            self.solution = Some(guess.clone());
        } else {
            derive(&mut next, &guess, &code)?;
        }

        self.constraints = next;
        self.tries.push((guess, code));
        Ok(())
    }

    fn validate(&self, guess: &Guess, code: &ColorCode) -> Result<(), InputError> {
        if self.solution.is_some() {
            return Err(InputError::AlreadySolved);
        }
        let length = guess.chars().len();
        if length != self.config.length() {
            return Err(InputError::InvalidLength {
                expected: self.config.length(),
                actual: length,
            });
        }
        if let Some(&bad) = guess.chars().iter().find(|&&ch| !self.config.allows(ch)) {
            return Err(InputError::InvalidCharacter(char::from(bad)));
        }
        if code.len() != length {
            return Err(InputError::CodeLength {
                expected: length,
                actual: code.len(),
            });
        }
        Ok(())
    }
}

/// Apply one try's per-position feedback to `constraints`
fn derive(
    constraints: &mut ConstraintSet,
    guess: &Guess,
    code: &ColorCode,
) -> Result<(), InputError> {
    for (i, (&ch, &color)) in guess.chars().iter().zip(code.colors()).enumerate() {
        match color {
            Color::Green => constraints.fix(i, ch)?,
            Color::Yellow => constraints.exclude_at(i, ch)?,
            Color::Gray => {
                // A repeated character is only absent when none of its
                // occurrences in this guess were marked present.
                let marked_elsewhere = guess
                    .positions_of(ch)
                    .iter()
                    .any(|&j| j != i && code.colors()[j] != Color::Gray);
                if marked_elsewhere {
                    constraints.exclude_at(i, ch)?;
                } else {
                    constraints.exclude(i, ch)?;
                }
            }
        }
    }
    Ok(())
}
