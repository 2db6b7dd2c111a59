//! Wordle Checker
//!
//! Scores guesses against a solution and narrows a word list to the
//! candidates still consistent with every try, for Wordle and Nerdle.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_checker::checker::{CandidateFilter, Evaluator, Session};
//! use wordle_checker::core::GameConfig;
//! use wordle_checker::wordlists::{WORDS, loader::words_from_slice};
//!
//! // Score a guess
//! let evaluator = Evaluator::new(GameConfig::WORDLE, "snafu").unwrap();
//! let code = evaluator.score("sonar").unwrap();
//! assert_eq!(code.to_string(), "G_YY_");
//!
//! // Narrow the candidates
//! let words = words_from_slice(WORDS, &GameConfig::WORDLE);
//! let mut session = Session::new(CandidateFilter::new(GameConfig::WORDLE, &words));
//! session.start();
//! session.add_try("sonar", "G_YY_").unwrap();
//! assert!(session.possible_solutions().unwrap().iter().any(|w| w.text() == "snafu"));
//! ```

// Core domain types
pub mod core;

// Scoring, constraints and filtering
pub mod checker;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
