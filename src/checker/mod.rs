//! Guess scoring and constraint filtering
//!
//! - [`evaluate`] / [`Evaluator`] score a guess against a known solution
//! - [`Accumulator`] turns color-coded tries into a [`ConstraintSet`]
//! - [`CandidateFilter`] narrows a word list to what the constraints allow
//! - [`Session`] runs the three together for one checking session

mod constraints;
mod evaluator;
mod filter;
mod record;
mod session;

pub use constraints::{Accumulator, ConstraintSet};
pub use evaluator::{Evaluator, evaluate};
pub use filter::{CandidateFilter, admits};
pub use record::GameRecord;
pub use session::Session;
