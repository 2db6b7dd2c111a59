//! Command implementations

pub mod audit;
pub mod filter;
pub mod replay;
pub mod score;
pub mod simple;

pub use audit::{AuditConfig, AuditStatistics, print_audit_statistics, run_audit};
pub use filter::{FilterResult, FilterStep, filter_words, parse_try};
pub use replay::{MAX_TRIES, replay_game};
pub use score::{ScoreResult, score_guesses};
pub use simple::run_simple;
