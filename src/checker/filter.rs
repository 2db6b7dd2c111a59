//! Candidate list filtering
//!
//! Reduces a word list to the candidates consistent with a `ConstraintSet`.
//! Input order is preserved and nothing is ever added.

use super::constraints::ConstraintSet;
use crate::core::{GameConfig, Guess};

/// Filters one immutable word list for one game variant
///
/// The word list is loaded once when the filter is built and never reloaded.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    config: GameConfig,
    words: &'a [Guess],
}

impl<'a> CandidateFilter<'a> {
    #[must_use]
    pub const fn new(config: GameConfig, words: &'a [Guess]) -> Self {
        Self { config, words }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The full word list
    #[must_use]
    pub const fn words(&self) -> &'a [Guess] {
        self.words
    }

    /// Every word consistent with `constraints`, in list order
    ///
    /// An empty result means no known solution, not an error.
    ///
    /// # Examples
    /// ```
    /// use wordle_checker::checker::{Accumulator, CandidateFilter};
    /// use wordle_checker::core::{GameConfig, Guess};
    ///
    /// let words: Vec<Guess> = ["close", "clone", "cheer", "leave"]
    ///     .iter()
    ///     .map(|w| Guess::new(*w, &GameConfig::WORDLE).unwrap())
    ///     .collect();
    /// let filter = CandidateFilter::new(GameConfig::WORDLE, &words);
    ///
    /// let mut acc = Accumulator::new(GameConfig::WORDLE);
    /// acc.add_try("cheer", "G_Y__").unwrap();
    /// let remaining: Vec<&str> = filter.filter(acc.constraints()).iter().map(|w| w.text()).collect();
    /// assert_eq!(remaining, ["close", "clone"]);
    /// ```
    #[must_use]
    pub fn filter(&self, constraints: &ConstraintSet) -> Vec<&'a Guess> {
        Self::refine(self.words, constraints)
    }

    /// Re-filter an earlier result (or any subsequence of the list)
    ///
    /// Because constraints only tighten, refining the previous result with the
    /// newest constraints gives the same answer as filtering the full list.
    pub fn refine<I>(candidates: I, constraints: &ConstraintSet) -> Vec<&'a Guess>
    where
        I: IntoIterator<Item = &'a Guess>,
    {
        candidates
            .into_iter()
            .filter(|candidate| admits(constraints, candidate))
            .collect()
    }
}

/// Check a single candidate against every constraint
///
/// Passes run cheapest and most eliminating first; each is independent.
#[must_use]
pub fn admits(constraints: &ConstraintSet, candidate: &Guess) -> bool {
    candidate.chars().len() == constraints.length()
        && avoids_excluded(constraints, candidate)
        && avoids_position_excluded(constraints, candidate)
        && contains_required(constraints, candidate)
        && matches_fixed(constraints, candidate)
}

fn avoids_excluded(constraints: &ConstraintSet, candidate: &Guess) -> bool {
    !candidate
        .chars()
        .iter()
        .any(|ch| constraints.excluded().contains(ch))
}

fn avoids_position_excluded(constraints: &ConstraintSet, candidate: &Guess) -> bool {
    candidate
        .chars()
        .iter()
        .enumerate()
        .all(|(i, ch)| !constraints.position_excluded(i).contains(ch))
}

fn contains_required(constraints: &ConstraintSet, candidate: &Guess) -> bool {
    constraints
        .required()
        .iter()
        .all(|&ch| candidate.has_char(ch))
}

fn matches_fixed(constraints: &ConstraintSet, candidate: &Guess) -> bool {
    constraints
        .fixed()
        .iter()
        .zip(candidate.chars())
        .all(|(fixed, &ch)| fixed.is_none_or(|f| f == ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{Accumulator, evaluate};
    use crate::wordlists::EQUATIONS;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    const SNAFU_TRIES: [(&str, &str); 5] = [
        ("OCTAL", "___Y_"),
        ("SIREN", "G___Y"),
        ("DUMPY", "_Y___"),
        ("STUNT", "G_YY_"),
        ("SONAR", "G_YY_"),
    ];

    fn words(list: &[&str]) -> Vec<Guess> {
        words_from_slice(list, &GameConfig::WORDLE)
    }

    fn texts<'a>(candidates: &[&'a Guess]) -> Vec<&'a str> {
        candidates.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let list = words(&["crane", "slate", "snafu"]);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let constraints = ConstraintSet::new(5);
        assert_eq!(texts(&filter.filter(&constraints)), ["crane", "slate", "snafu"]);
    }

    #[test]
    fn close_scenario() {
        let list = words(&["cheer", "clone", "close", "cycle", "leave", "slate"]);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let mut acc = Accumulator::new(GameConfig::WORDLE);

        acc.add_try("cheer", "G_Y__").unwrap();
        assert_eq!(
            texts(&filter.filter(acc.constraints())),
            ["clone", "close", "cycle"]
        );

        acc.add_try("leave", "Y___G").unwrap();
        assert_eq!(
            texts(&filter.filter(acc.constraints())),
            ["clone", "close", "cycle"]
        );

        acc.add_try("clone", "GGG_G").unwrap();
        assert_eq!(texts(&filter.filter(acc.constraints())), ["close"]);
    }

    #[test]
    fn each_pass_rejects() {
        let list = words(&["crane", "slate", "snafu"]);
        assert_eq!(CandidateFilter::refine(&list, &ConstraintSet::new(5)).len(), 3);

        // excluded
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        acc.add_try("bowed", "_____").unwrap();
        assert_eq!(
            texts(&CandidateFilter::refine(&list, acc.constraints())),
            ["snafu"]
        );

        // position excluded plus required
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        acc.add_try("xxxxs", "____Y").unwrap();
        assert_eq!(
            texts(&CandidateFilter::refine(&list, acc.constraints())),
            ["slate", "snafu"]
        );
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        acc.add_try("sxxxx", "Y____").unwrap();
        assert!(CandidateFilter::refine(&list, acc.constraints()).is_empty());

        // fixed
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        acc.add_try("xnxxx", "_G___").unwrap();
        assert_eq!(
            texts(&CandidateFilter::refine(&list, acc.constraints())),
            ["snafu"]
        );
        assert!(admits(acc.constraints(), &list[2]));
        assert!(!admits(acc.constraints(), &list[0]));
    }

    #[test]
    fn snafu_scenario_small_list() {
        let list = words(&["crane", "sandy", "sauna", "shank", "snafu", "snaky", "stunt"]);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let mut acc = Accumulator::new(GameConfig::WORDLE);

        for (guess, code) in SNAFU_TRIES {
            acc.add_try(guess, code).unwrap();
            let remaining = filter.filter(acc.constraints());
            assert!(!remaining.is_empty(), "no candidates after {guess}");
            assert!(remaining.iter().any(|w| w.text() == "snafu"));
        }

        acc.add_try("SNAFU", "GGGGG").unwrap();
        assert_eq!(texts(&filter.filter(acc.constraints())), ["snafu"]);
    }

    #[test]
    fn snafu_scenario_embedded_list() {
        let list = words_from_slice(WORDS, &GameConfig::WORDLE);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        let mut previous = filter.filter(acc.constraints());

        for (guess, code) in SNAFU_TRIES {
            acc.add_try(guess, code).unwrap();
            let remaining = filter.filter(acc.constraints());
            assert!(!remaining.is_empty(), "no candidates after {guess}");
            assert!(remaining.len() <= previous.len());
            previous = remaining;
        }

        acc.add_try("SNAFU", "GGGGG").unwrap();
        assert_eq!(texts(&filter.filter(acc.constraints())), ["snafu"]);
    }

    #[test]
    fn result_is_subsequence_of_previous() {
        let list = words_from_slice(WORDS, &GameConfig::WORDLE);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        let mut previous = filter.filter(acc.constraints());

        for (guess, code) in SNAFU_TRIES {
            acc.add_try(guess, code).unwrap();
            let current = filter.filter(acc.constraints());

            let mut rest = previous.iter();
            for word in &current {
                assert!(rest.any(|p| p == word), "{word} not in previous result");
            }
            previous = current;
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let list = words_from_slice(WORDS, &GameConfig::WORDLE);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        acc.add_try("OCTAL", "___Y_").unwrap();

        let once = filter.filter(acc.constraints());
        let twice = CandidateFilter::refine(once.iter().copied(), acc.constraints());
        assert_eq!(once, twice);
    }

    #[test]
    fn incremental_refine_matches_full_filter() {
        let list = words_from_slice(WORDS, &GameConfig::WORDLE);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);
        let mut acc = Accumulator::new(GameConfig::WORDLE);
        let mut running = filter.filter(acc.constraints());

        for (guess, code) in SNAFU_TRIES {
            acc.add_try(guess, code).unwrap();
            running = CandidateFilter::refine(running, acc.constraints());
            assert_eq!(running, filter.filter(acc.constraints()));
        }
    }

    #[test]
    fn solution_always_survives() {
        let list = words_from_slice(WORDS, &GameConfig::WORDLE);
        let filter = CandidateFilter::new(GameConfig::WORDLE, &list);

        for solution in list.iter().step_by(97) {
            let mut acc = Accumulator::new(GameConfig::WORDLE);
            for guess in list.iter().step_by(401).take(4) {
                let code = evaluate(guess, solution).unwrap();
                if code.is_solved() {
                    break;
                }
                acc.add(guess.clone(), code).unwrap();
                assert!(
                    filter.filter(acc.constraints()).contains(&solution),
                    "{solution} dropped after {guess}"
                );
            }
        }
    }

    #[test]
    fn equation_scenario() {
        let list = words_from_slice(EQUATIONS, &GameConfig::NERDLE);
        let filter = CandidateFilter::new(GameConfig::NERDLE, &list);
        let mut acc = Accumulator::new(GameConfig::NERDLE);

        acc.add_try("15+24=39", "GYG__Y_G").unwrap();
        let remaining = filter.filter(acc.constraints());
        assert!(remaining.iter().any(|w| w.text() == "11+5-7=9"));

        acc.add_try("17+1-9=9", "GYGYG_GG").unwrap();
        let remaining = filter.filter(acc.constraints());
        assert_eq!(texts(&remaining), ["11+5-7=9"]);
    }

    #[test]
    fn wrong_length_candidates_rejected() {
        let list = words_from_slice(&["11+5-7=9"], &GameConfig::NERDLE);
        let constraints = ConstraintSet::new(5);
        assert!(CandidateFilter::refine(&list, &constraints).is_empty());
    }
}
