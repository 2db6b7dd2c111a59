//! Word sources for both game variants
//!
//! Provides embedded lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT, WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn equations_count_matches_const() {
        assert_eq!(EQUATIONS.len(), EQUATIONS_COUNT);
    }

    #[test]
    fn words_are_lowercase_five_letters() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn equations_have_one_equals_sign() {
        for &equation in &EQUATIONS[..100] {
            // Just check the first 100 for speed
            assert_eq!(equation.len(), 8, "Equation '{equation}' is not 8 characters");
            assert_eq!(equation.matches('=').count(), 1);
        }
    }

    #[test]
    fn known_entries_present() {
        assert!(WORDS.contains(&"snafu"));
        assert!(WORDS.contains(&"close"));
        assert!(EQUATIONS.contains(&"11+5-7=9"));
        assert!(EQUATIONS.contains(&"99-41=58"));
    }

    #[test]
    fn expected_counts() {
        assert_eq!(EQUATIONS_COUNT, 17723, "Expected 17,723 equations");
        assert!(WORDS_COUNT > 2000);
    }
}
